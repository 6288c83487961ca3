use serde::{Deserialize, Serialize};

/// A notice attached to a card, such as a payment reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// The notice ID
    pub id: String,
    /// The short title
    pub title: String,
    /// The full message
    pub message: String,
    /// How urgent the notice is; 0 is informational
    #[serde(default)]
    pub severity: u8,
}
impl Notice {
    /// The minimum severity for a notice to be shown in the rotating tab strip.
    pub const TAB_SEVERITY: u8 = 1;

    /// Whether this notice belongs in the rotating tab strip.
    pub fn is_tab_notice(&self) -> bool {
        self.severity >= Self::TAB_SEVERITY
    }
}
