use serde::{Deserialize, Serialize};
use crate::models::domain::{CandidateProfile, MatchAlertState, MatchRecord};

/// Snapshot of the session handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub candidate: Option<CandidateProfile>,
    #[serde(rename = "photoIndex")]
    pub photo_index: usize,
    #[serde(rename = "photoCount")]
    pub photo_count: usize,
    pub exhausted: bool,
    pub cursor: usize,
    pub total: usize,
    pub alert: MatchAlertState,
    pub matches: Vec<MatchRecord>,
}

/// Result of a single gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureReport {
    pub matched: bool,
    #[serde(rename = "cursorMoved")]
    pub cursor_moved: bool,
    #[serde(rename = "photoMoved")]
    pub photo_moved: bool,
    pub cursor: usize,
}
