use crate::core::matcher::{ChatHook, MatchController};
use crate::core::photos::PhotoBrowser;
use crate::core::queue::{CandidateQueue, QueueError};
use crate::core::random::RandomSource;
use crate::models::{
    CandidateProfile, Gesture, GestureReport, MatchAlertState, MatchOutcome, MatchRecord,
    MatchSummary, SessionView, SwipeDecision,
};

/// Composite state of the swipe surface
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState<'a> {
    Browsing {
        candidate: &'a CandidateProfile,
        photo_index: usize,
    },
    /// The alert refers to an earlier card; the queue may already be exhausted
    AlertShown {
        candidate: Option<&'a CandidateProfile>,
        subject: &'a MatchSummary,
    },
    Exhausted,
}

/// One swipe session: queue, photo browser and match alert
///
/// All transitions happen synchronously inside the gesture call. Swipes
/// received while an alert is visible are accepted; every match is kept in
/// the session log even when a later one replaces the alert subject.
pub struct SwipeSession<R: RandomSource> {
    queue: CandidateQueue,
    photos: PhotoBrowser,
    matcher: MatchController<R>,
    matches: Vec<MatchRecord>,
}

impl<R: RandomSource> SwipeSession<R> {
    pub fn new(profiles: Vec<CandidateProfile>, random: R) -> Result<Self, QueueError> {
        let queue = CandidateQueue::new(profiles)?;
        Ok(Self::from_queue(queue, random))
    }

    pub fn from_queue(queue: CandidateQueue, random: R) -> Self {
        let photo_count = queue.current_candidate().map_or(0, |c| c.photos.len());

        tracing::info!("Swipe session started with {} candidates", queue.len());

        Self {
            queue,
            photos: PhotoBrowser::new(photo_count),
            matcher: MatchController::new(random),
            matches: Vec::new(),
        }
    }

    pub fn with_chat_hook(mut self, hook: ChatHook) -> Self {
        self.matcher.set_chat_hook(hook);
        self
    }

    pub fn pass(&mut self) -> GestureReport {
        self.swipe(SwipeDecision::Pass)
    }

    pub fn like(&mut self) -> GestureReport {
        self.swipe(SwipeDecision::Like)
    }

    pub fn super_like(&mut self) -> GestureReport {
        self.swipe(SwipeDecision::SuperLike)
    }

    pub fn next_photo(&mut self) -> GestureReport {
        let photo_moved = self.photos.next();
        GestureReport {
            matched: false,
            cursor_moved: false,
            photo_moved,
            cursor: self.queue.cursor(),
        }
    }

    pub fn apply(&mut self, gesture: Gesture) -> GestureReport {
        match gesture.as_swipe() {
            Some(decision) => self.swipe(decision),
            None => self.next_photo(),
        }
    }

    /// Resolve the current card: decide the match, then advance the queue
    pub fn swipe(&mut self, decision: SwipeDecision) -> GestureReport {
        let cursor = self.queue.cursor();

        let Some(candidate) = self.queue.current_candidate() else {
            tracing::debug!("Ignoring {:?} on exhausted queue", decision);
            return GestureReport {
                matched: false,
                cursor_moved: false,
                photo_moved: false,
                cursor,
            };
        };

        let alert_was_visible = self.matcher.is_alert_visible();
        let outcome = self.matcher.handle_gesture(decision, candidate);

        tracing::debug!(
            "{:?} on {} at cursor {} -> {}",
            decision,
            candidate.id,
            cursor,
            if outcome.is_match() { "match" } else { "no match" }
        );

        let matched = match outcome {
            MatchOutcome::Match(summary) => {
                self.matches.push(MatchRecord {
                    summary,
                    decision,
                    matched_at: chrono::Utc::now(),
                    arrived_during_alert: alert_was_visible,
                });
                true
            }
            MatchOutcome::NoMatch => false,
        };

        let cursor_moved = self.queue.advance();
        if cursor_moved {
            let photo_count = self.queue.current_candidate().map_or(0, |c| c.photos.len());
            self.photos.reset(photo_count);
        }

        if self.queue.is_exhausted() {
            tracing::info!("Candidate queue exhausted after {} profiles", self.queue.len());
        }

        GestureReport {
            matched,
            cursor_moved,
            photo_moved: false,
            cursor: self.queue.cursor(),
        }
    }

    /// Close the alert; the cursor stays where the last swipe left it
    pub fn dismiss_alert(&mut self) {
        self.matcher.dismiss_alert();
    }

    pub fn start_chat(&mut self) -> Option<MatchSummary> {
        self.matcher.start_chat()
    }

    pub fn current_candidate(&self) -> Option<&CandidateProfile> {
        self.queue.current_candidate()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_exhausted()
    }

    pub fn cursor(&self) -> usize {
        self.queue.cursor()
    }

    pub fn queue(&self) -> &CandidateQueue {
        &self.queue
    }

    pub fn photo_index(&self) -> usize {
        self.photos.current_index()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.photo_count()
    }

    pub fn current_photo(&self) -> Option<&str> {
        self.current_candidate()
            .and_then(|c| c.photos.get(self.photos.current_index()))
            .map(String::as_str)
    }

    pub fn alert(&self) -> &MatchAlertState {
        self.matcher.alert()
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn state(&self) -> InteractionState<'_> {
        let alert = self.matcher.alert();
        if let (true, Some(subject)) = (alert.visible, alert.subject.as_ref()) {
            return InteractionState::AlertShown {
                candidate: self.queue.current_candidate(),
                subject,
            };
        }

        match self.queue.current_candidate() {
            Some(candidate) => InteractionState::Browsing {
                candidate,
                photo_index: self.photos.current_index(),
            },
            None => InteractionState::Exhausted,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            candidate: self.queue.current_candidate().cloned(),
            photo_index: self.photos.current_index(),
            photo_count: self.photos.photo_count(),
            exhausted: self.queue.is_exhausted(),
            cursor: self.queue.cursor(),
            total: self.queue.len(),
            alert: self.matcher.alert().clone(),
            matches: self.matches.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::FixedSequence;
    use crate::models::SkillLevel;
    use std::collections::BTreeSet;

    fn create_candidate(id: &str, photos: usize) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            name: format!("Skier {}", id),
            age: 26,
            photos: (1..=photos).map(|i| format!("{}-p{}", id, i)).collect(),
            bio: String::new(),
            skill_level: SkillLevel::Expert,
            preferred_terrain: BTreeSet::new(),
            home_resort: "Chamonix".to_string(),
            current_resort: "Verbier".to_string(),
            distance: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let session = SwipeSession::new(vec![create_candidate("a", 2)], FixedSequence::constant(0.9)).unwrap();
        assert!(matches!(
            session.state(),
            InteractionState::Browsing { photo_index: 0, .. }
        ));
        assert_eq!(session.current_photo(), Some("a-p1"));

        let empty = SwipeSession::new(vec![], FixedSequence::constant(0.9)).unwrap();
        assert_eq!(empty.state(), InteractionState::Exhausted);
    }

    #[test]
    fn test_advance_resets_photo_index() {
        let mut session = SwipeSession::new(
            vec![create_candidate("a", 3), create_candidate("b", 2)],
            FixedSequence::constant(0.9),
        )
        .unwrap();

        session.next_photo();
        session.next_photo();
        assert_eq!(session.photo_index(), 2);

        let report = session.pass();
        assert!(report.cursor_moved);
        assert_eq!(session.photo_index(), 0);
        assert_eq!(session.photo_count(), 2);
        assert_eq!(session.current_photo(), Some("b-p1"));
    }

    #[test]
    fn test_match_shows_alert_for_previous_card() {
        let mut session = SwipeSession::new(
            vec![create_candidate("a", 1), create_candidate("b", 1)],
            FixedSequence::constant(0.9),
        )
        .unwrap();

        session.super_like();

        match session.state() {
            InteractionState::AlertShown { candidate, subject } => {
                assert_eq!(subject.candidate_id, "a");
                assert_eq!(candidate.unwrap().id, "b");
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_match_during_alert_is_logged() {
        let mut session = SwipeSession::new(
            vec![create_candidate("a", 1), create_candidate("b", 1)],
            FixedSequence::constant(0.9),
        )
        .unwrap();

        session.super_like();
        session.super_like();

        let matches = session.matches();
        assert_eq!(matches.len(), 2);
        assert!(!matches[0].arrived_during_alert);
        assert!(matches[1].arrived_during_alert);
        assert_eq!(session.alert().subject.as_ref().unwrap().candidate_id, "b");
    }

    #[test]
    fn test_view_snapshot() {
        let mut session = SwipeSession::new(vec![create_candidate("a", 2)], FixedSequence::constant(0.1)).unwrap();
        session.like();

        let view = session.view();
        assert!(view.exhausted);
        assert!(view.candidate.is_none());
        assert_eq!(view.cursor, 1);
        assert_eq!(view.total, 1);
        assert!(view.alert.visible);
        assert_eq!(view.matches.len(), 1);
    }
}
