//! SkiMate - swipe-and-match interaction engine for the SkiMate dating app
//!
//! This library drives the swipe surface: a forward-only queue of candidate
//! profiles, the pass / like / super-like decisions that may produce a match,
//! the match alert, and the photo index of the card on screen.

pub mod config;
pub mod console;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CandidateQueue, InteractionState, MatchController, PhotoBrowser, QueueError, RandomSource, SwipeSession};
pub use crate::models::{CandidateProfile, Gesture, MatchAlertState, MatchOutcome, MatchSummary, SkillLevel, SwipeDecision, Terrain};
