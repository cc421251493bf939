use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use crate::models::domain::{CandidateProfile, SkillLevel, Terrain};

/// On-disk deck of candidates used to seed a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckFile {
    #[serde(default)]
    pub candidates: Vec<CandidateEntry>,
}

/// One deck entry before it becomes a queued profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub age: u8,
    #[validate(length(min = 1))]
    pub photos: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(alias = "skill_level", rename = "skillLevel")]
    pub skill_level: SkillLevel,
    #[serde(alias = "preferred_terrain", rename = "preferredTerrain", default)]
    pub preferred_terrain: BTreeSet<Terrain>,
    #[serde(alias = "home_resort", rename = "homeResort")]
    pub home_resort: String,
    #[serde(alias = "current_resort", rename = "currentResort")]
    pub current_resort: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub distance: Option<f64>,
}

impl CandidateEntry {
    /// Convert into a profile, generating an id when the entry has none
    pub fn into_profile(self) -> CandidateProfile {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        CandidateProfile {
            id,
            name: self.name,
            age: self.age,
            photos: self.photos,
            bio: self.bio,
            skill_level: self.skill_level,
            preferred_terrain: self.preferred_terrain,
            home_resort: self.home_resort,
            current_resort: self.current_resort,
            distance: self.distance,
        }
    }
}
