use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::aggregate::DEFAULT_SMALL_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    /// How often the host redraws and checks timers, in milliseconds.
    pub tick_rate_ms: u64,
    /// How long each tab notice is shown before rotating, in seconds.
    pub notice_rotation_secs: f64,
    /// Categories with a smaller share than this are labelled outside the bar.
    pub small_category_threshold: f64,
}
impl Default for General {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            notice_rotation_secs: 5.0,
            small_category_threshold: DEFAULT_SMALL_THRESHOLD,
        }
    }
}

/// Where statements come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryKind {
    /// The built-in sample statement; uploads are kept in memory.
    #[default]
    Mock,
    /// A directory holding `statement.json` and uploaded PDFs.
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Repository {
    pub kind: RepositoryKind,
    pub root: PathBuf,
}
impl Default for Repository {
    fn default() -> Self {
        Self {
            kind: RepositoryKind::default(),
            root: PathBuf::from("statements"),
        }
    }
}
