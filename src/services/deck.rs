use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::core::{CandidateQueue, QueueError};
use crate::models::{CandidateEntry, CandidateProfile, DeckFile, SkillLevel, Terrain};

/// Errors that can occur while loading a candidate deck
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON deck: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML deck: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid deck entry {index}: {source}")]
    Validation {
        index: usize,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Unsupported deck format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Deck file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Json,
    Toml,
}

impl DeckFormat {
    pub fn from_path(path: &Path) -> Result<Self, DeckError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DeckFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(DeckFormat::Toml),
            other => Err(DeckError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Load and validate a deck from disk
pub fn load_deck<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateProfile>, DeckError> {
    let path = path.as_ref();
    let format = DeckFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;

    let profiles = parse_deck(&contents, format)?;
    tracing::info!("Loaded {} candidates from {}", profiles.len(), path.display());

    Ok(profiles)
}

/// Parse deck contents and turn valid entries into profiles
pub fn parse_deck(contents: &str, format: DeckFormat) -> Result<Vec<CandidateProfile>, DeckError> {
    let deck: DeckFile = match format {
        DeckFormat::Json => serde_json::from_str(contents)?,
        DeckFormat::Toml => toml::from_str(contents)?,
    };

    deck.candidates
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .validate()
                .map_err(|source| DeckError::Validation { index, source })?;
            Ok(entry.into_profile())
        })
        .collect()
}

/// Load a deck straight into a queue, surfacing invalid profile data
pub fn load_queue<P: AsRef<Path>>(path: P) -> Result<CandidateQueue, DeckError> {
    let profiles = load_deck(path)?;
    Ok(CandidateQueue::new(profiles)?)
}

/// Built-in deck used when no deck file is configured
pub fn default_deck() -> Vec<CandidateProfile> {
    let entries = [
        CandidateEntry {
            id: Some("1".to_string()),
            name: "Sarah Alpine".to_string(),
            age: 28,
            photos: vec![
                "https://images.unsplash.com/photo-1551524559-8af4e6624178?w=800".to_string(),
                "https://images.unsplash.com/photo-1551524559-8af4e6624178?w=800".to_string(),
            ],
            bio: "Powder chaser ❄️ Looking for someone to share first tracks with!".to_string(),
            skill_level: SkillLevel::Advanced,
            preferred_terrain: BTreeSet::from([Terrain::Backcountry, Terrain::Groomed]),
            home_resort: "Whistler Blackcomb".to_string(),
            current_resort: "Whistler Blackcomb".to_string(),
            distance: Some(12.0),
        },
        CandidateEntry {
            id: Some("2".to_string()),
            name: "Jack Frost".to_string(),
            age: 31,
            photos: vec![
                "https://images.unsplash.com/photo-1542127306-0b4688895b9e?w=800".to_string(),
                "https://images.unsplash.com/photo-1542127306-0b4688895b9e?w=800".to_string(),
            ],
            bio: "Park rat by day, powder hound by night 🏂".to_string(),
            skill_level: SkillLevel::Expert,
            preferred_terrain: BTreeSet::from([Terrain::Park, Terrain::Backcountry]),
            home_resort: "Whistler Blackcomb".to_string(),
            current_resort: "Whistler Blackcomb".to_string(),
            distance: None,
        },
    ];

    entries.into_iter().map(CandidateEntry::into_profile).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_DECK: &str = r#"{
        "candidates": [
            {
                "id": "mika",
                "name": "Mika Couloir",
                "age": 29,
                "photos": ["mika-1.jpg", "mika-2.jpg"],
                "bio": "Dawn patrol regular",
                "skillLevel": "Expert",
                "preferredTerrain": ["Backcountry", "All Mountain"],
                "homeResort": "Alta",
                "currentResort": "Snowbird",
                "distance": 4.2
            },
            {
                "name": "Theo Groomer",
                "age": 34,
                "photos": ["theo.jpg"],
                "skillLevel": "Beginner",
                "homeResort": "Vail",
                "currentResort": "Vail"
            }
        ]
    }"#;

    #[test]
    fn test_parse_json_deck() {
        let profiles = parse_deck(JSON_DECK, DeckFormat::Json).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].id, "mika");
        assert!(profiles[0].preferred_terrain.contains(&Terrain::AllMountain));
        assert_eq!(profiles[1].distance, None);
        // Missing ids are generated
        assert!(uuid::Uuid::parse_str(&profiles[1].id).is_ok());
    }

    #[test]
    fn test_parse_toml_deck() {
        let toml_deck = r#"
            [[candidates]]
            id = "ana"
            name = "Ana Pow"
            age = 25
            photos = ["ana.jpg"]
            skillLevel = "Intermediate"
            preferredTerrain = ["Groomed"]
            homeResort = "Zermatt"
            currentResort = "Zermatt"
        "#;

        let profiles = parse_deck(toml_deck, DeckFormat::Toml).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].skill_level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_rejects_entry_without_photos() {
        let deck = r#"{"candidates": [{
            "name": "No Photos", "age": 30, "photos": [],
            "skillLevel": "Advanced", "homeResort": "Aspen", "currentResort": "Aspen"
        }]}"#;

        let err = parse_deck(deck, DeckFormat::Json).unwrap_err();
        assert!(matches!(err, DeckError::Validation { index: 0, .. }));
    }

    #[test]
    fn test_rejects_negative_distance() {
        let deck = r#"{"candidates": [{
            "name": "Far Away", "age": 30, "photos": ["x.jpg"], "distance": -3.0,
            "skillLevel": "Advanced", "homeResort": "Aspen", "currentResort": "Aspen"
        }]}"#;

        assert!(parse_deck(deck, DeckFormat::Json).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DeckFormat::from_path(Path::new("deck.yaml")).unwrap_err();
        assert!(matches!(err, DeckError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn test_default_deck_builds_queue() {
        let queue = CandidateQueue::new(default_deck()).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current_candidate().unwrap().name, "Sarah Alpine");
    }
}
