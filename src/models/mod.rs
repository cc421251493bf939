// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, Gesture, MatchAlertState, MatchOutcome, MatchRecord, MatchSummary,
    SkillLevel, SwipeDecision, Terrain,
};
pub use requests::{CandidateEntry, DeckFile};
pub use responses::{GestureReport, SessionView};
