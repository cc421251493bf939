use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Skier ability, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// Preferred terrain tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Park,
    Backcountry,
    Groomed,
    #[serde(rename = "All Mountain", alias = "AllMountain")]
    AllMountain,
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Terrain::Park => "Park",
            Terrain::Backcountry => "Backcountry",
            Terrain::Groomed => "Groomed",
            Terrain::AllMountain => "All Mountain",
        };
        f.write_str(label)
    }
}

/// A potential match shown as a swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub photos: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "skillLevel")]
    pub skill_level: SkillLevel,
    #[serde(rename = "preferredTerrain", default)]
    pub preferred_terrain: BTreeSet<Terrain>,
    #[serde(rename = "homeResort")]
    pub home_resort: String,
    #[serde(rename = "currentResort")]
    pub current_resort: String,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl CandidateProfile {
    /// First photo, used as the card cover and the match alert image
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    pub fn summary(&self) -> Option<MatchSummary> {
        self.primary_photo().map(|photo| MatchSummary {
            candidate_id: self.id.clone(),
            name: self.name.clone(),
            photo: photo.to_string(),
        })
    }
}

/// A discrete user action on the swipe surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gesture {
    Pass,
    Like,
    SuperLike,
    NextPhoto,
}

impl Gesture {
    /// The card-resolving form of this gesture, if it resolves the card
    pub fn as_swipe(self) -> Option<SwipeDecision> {
        match self {
            Gesture::Pass => Some(SwipeDecision::Pass),
            Gesture::Like => Some(SwipeDecision::Like),
            Gesture::SuperLike => Some(SwipeDecision::SuperLike),
            Gesture::NextPhoto => None,
        }
    }
}

/// Gestures that resolve the current card and move the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeDecision {
    Pass,
    Like,
    SuperLike,
}

impl From<SwipeDecision> for Gesture {
    fn from(decision: SwipeDecision) -> Self {
        match decision {
            SwipeDecision::Pass => Gesture::Pass,
            SwipeDecision::Like => Gesture::Like,
            SwipeDecision::SuperLike => Gesture::SuperLike,
        }
    }
}

/// What the match alert shows about the matched candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub name: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    NoMatch,
    Match(MatchSummary),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match(_))
    }

    pub fn summary(&self) -> Option<&MatchSummary> {
        match self {
            MatchOutcome::Match(summary) => Some(summary),
            MatchOutcome::NoMatch => None,
        }
    }
}

/// Match notification overlay state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAlertState {
    pub visible: bool,
    pub subject: Option<MatchSummary>,
}

/// Session log entry for every match produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub summary: MatchSummary,
    pub decision: SwipeDecision,
    #[serde(rename = "matchedAt")]
    pub matched_at: chrono::DateTime<chrono::Utc>,
    /// Set when this match arrived while an earlier alert was still on screen
    #[serde(rename = "arrivedDuringAlert")]
    pub arrived_during_alert: bool,
}
