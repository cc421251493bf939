use std::collections::HashSet;
use thiserror::Error;

use crate::models::CandidateProfile;

/// Errors raised while building a candidate queue
#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    #[error("Invalid profile data for '{id}': {reason}")]
    InvalidProfileData { id: String, reason: String },
}

impl QueueError {
    fn invalid(profile: &CandidateProfile, reason: impl Into<String>) -> Self {
        QueueError::InvalidProfileData {
            id: profile.id.clone(),
            reason: reason.into(),
        }
    }
}

/// Ordered candidates plus a forward-only cursor
///
/// `0 <= cursor <= len` always holds. `cursor == len` means the queue is
/// exhausted and nothing is displayed. Profiles are never revisited.
#[derive(Debug, Clone)]
pub struct CandidateQueue {
    profiles: Vec<CandidateProfile>,
    cursor: usize,
}

impl CandidateQueue {
    /// Build a queue, rejecting profiles the engine cannot display
    pub fn new(profiles: Vec<CandidateProfile>) -> Result<Self, QueueError> {
        let mut seen_ids = HashSet::with_capacity(profiles.len());

        for profile in &profiles {
            validate_profile(profile)?;

            if !seen_ids.insert(profile.id.as_str()) {
                return Err(QueueError::invalid(profile, "duplicate candidate id"));
            }
        }

        tracing::debug!("Candidate queue built with {} profiles", profiles.len());

        Ok(Self { profiles, cursor: 0 })
    }

    pub fn current_candidate(&self) -> Option<&CandidateProfile> {
        self.profiles.get(self.cursor)
    }

    /// Move past the current candidate
    ///
    /// Returns `false` without changing anything once the queue is exhausted,
    /// so repeated calls from a rapid double gesture are harmless.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.profiles.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.profiles.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.profiles.len() - self.cursor
    }
}

fn validate_profile(profile: &CandidateProfile) -> Result<(), QueueError> {
    if profile.id.trim().is_empty() {
        return Err(QueueError::invalid(profile, "id must not be empty"));
    }

    if profile.photos.is_empty() {
        return Err(QueueError::invalid(profile, "at least one photo is required"));
    }

    if profile.age == 0 {
        return Err(QueueError::invalid(profile, "age must be positive"));
    }

    if let Some(distance) = profile.distance {
        if !distance.is_finite() || distance < 0.0 {
            return Err(QueueError::invalid(profile, "distance must be a non-negative number"));
        }
    }

    Ok(())
}
