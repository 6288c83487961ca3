use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored statement artifact (an uploaded PDF).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    /// The artifact ID
    pub id: String,
    /// The original file name
    pub name: String,
    /// The size in bytes
    pub size_bytes: u64,
    /// When the artifact was stored, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}
