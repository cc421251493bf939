use std::fmt::Write;

use crate::core::{InteractionState, RandomSource, SwipeSession};
use crate::models::{CandidateProfile, MatchRecord, MatchSummary};

/// Render whatever the session currently shows
pub fn render_session<R: RandomSource>(session: &SwipeSession<R>) -> String {
    match session.state() {
        InteractionState::Browsing { candidate, photo_index } => {
            render_card(candidate, photo_index)
        }
        InteractionState::AlertShown { subject, .. } => {
            let also = session
                .matches()
                .iter()
                .rev()
                .take_while(|record| record.arrived_during_alert)
                .count();
            render_alert(subject, also)
        }
        InteractionState::Exhausted => render_exhausted(),
    }
}

pub fn render_card(candidate: &CandidateProfile, photo_index: usize) -> String {
    let mut out = String::new();

    let dots: String = (0..candidate.photos.len())
        .map(|i| if i == photo_index { '●' } else { '○' })
        .collect();

    let _ = writeln!(out, "{}", dots);
    if let Some(photo) = candidate.photos.get(photo_index) {
        let _ = writeln!(out, "[photo] {}", photo);
    }
    let _ = writeln!(out, "{}, {}", candidate.name, candidate.age);
    if let Some(distance) = candidate.distance {
        let _ = writeln!(out, "{} miles away", distance);
    }
    let _ = writeln!(out, "{} · {}", candidate.skill_level, candidate.current_resort);

    if !candidate.preferred_terrain.is_empty() {
        let terrain: Vec<String> = candidate
            .preferred_terrain
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "Terrain: {}", terrain.join(", "));
    }
    if candidate.home_resort != candidate.current_resort {
        let _ = writeln!(out, "Home: {}", candidate.home_resort);
    }
    if !candidate.bio.is_empty() {
        let _ = writeln!(out, "{}", candidate.bio);
    }

    out
}

pub fn render_alert(subject: &MatchSummary, also_matched: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "It's a Match!");
    let _ = writeln!(out, "[photo] {}", subject.photo);
    let _ = writeln!(out, "You and {} have matched!", subject.name);
    if also_matched > 0 {
        let _ = writeln!(out, "(+{} more new match(es), see `matches`)", also_matched);
    }
    let _ = writeln!(out, "Time to plan your next ski run together?");
    let _ = writeln!(out, "[chat] Start Chat   [keep] Keep Swiping");
    out
}

pub fn render_exhausted() -> String {
    "No more profiles to show\nCheck back later for more potential matches!\n".to_string()
}

pub fn render_matches(matches: &[MatchRecord]) -> String {
    if matches.is_empty() {
        return "No matches yet\n".to_string();
    }

    let mut out = String::new();
    for record in matches {
        let _ = writeln!(
            out,
            "{} ({:?}, {})",
            record.summary.name,
            record.decision,
            record.matched_at.format("%H:%M:%S")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSequence;
    use crate::models::SkillLevel;
    use std::collections::BTreeSet;

    fn create_candidate(id: &str) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            name: "Sarah Alpine".to_string(),
            age: 28,
            photos: vec!["one.jpg".to_string(), "two.jpg".to_string()],
            bio: "Powder chaser".to_string(),
            skill_level: SkillLevel::Advanced,
            preferred_terrain: BTreeSet::new(),
            home_resort: "Whistler Blackcomb".to_string(),
            current_resort: "Whistler Blackcomb".to_string(),
            distance: Some(12.0),
        }
    }

    #[test]
    fn test_render_card_shows_current_photo() {
        let text = render_card(&create_candidate("1"), 1);
        assert!(text.contains("○●"));
        assert!(text.contains("two.jpg"));
        assert!(text.contains("Sarah Alpine, 28"));
        assert!(text.contains("12 miles away"));
    }

    #[test]
    fn test_render_session_states() {
        let mut session = SwipeSession::new(vec![create_candidate("1")], FixedSequence::constant(0.9)).unwrap();
        assert!(render_session(&session).contains("Sarah Alpine"));

        session.super_like();
        assert!(render_session(&session).contains("It's a Match!"));

        session.dismiss_alert();
        assert!(render_session(&session).contains("No more profiles to show"));
    }
}
