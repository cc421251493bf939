use crate::core::random::RandomSource;
use crate::models::{CandidateProfile, MatchAlertState, MatchOutcome, MatchSummary, SwipeDecision};

/// Probability that a plain like turns into a match
pub const LIKE_MATCH_PROBABILITY: f64 = 0.5;

/// Hand-off invoked when the user starts a chat from the match alert
pub type ChatHook = Box<dyn FnMut(&MatchSummary)>;

/// Decides match outcomes and owns the match alert
///
/// This is the only writer of [`MatchOutcome`] and [`MatchAlertState`].
pub struct MatchController<R: RandomSource> {
    random: R,
    alert: MatchAlertState,
    chat_hook: Option<ChatHook>,
}

impl<R: RandomSource> MatchController<R> {
    pub fn new(random: R) -> Self {
        Self {
            random,
            alert: MatchAlertState::default(),
            chat_hook: None,
        }
    }

    pub fn with_chat_hook(mut self, hook: ChatHook) -> Self {
        self.chat_hook = Some(hook);
        self
    }

    pub fn set_chat_hook(&mut self, hook: ChatHook) {
        self.chat_hook = Some(hook);
    }

    /// Decide whether a swipe on `candidate` is a match
    ///
    /// Likes take one fresh draw per call. Super likes always match and never
    /// consume a draw. A match raises the alert; a miss leaves it as it was.
    pub fn handle_gesture(
        &mut self,
        decision: SwipeDecision,
        candidate: &CandidateProfile,
    ) -> MatchOutcome {
        let is_match = match decision {
            SwipeDecision::Pass => false,
            SwipeDecision::Like => {
                let draw = self.random.next_draw();
                tracing::trace!("Like draw for {}: {:.3}", candidate.id, draw);
                draw <= LIKE_MATCH_PROBABILITY
            }
            SwipeDecision::SuperLike => true,
        };

        if !is_match {
            return MatchOutcome::NoMatch;
        }

        // Queue construction guarantees a first photo
        let Some(summary) = candidate.summary() else {
            tracing::warn!("Candidate {} has no photo, match dropped", candidate.id);
            return MatchOutcome::NoMatch;
        };

        tracing::info!("Matched with {} ({:?})", candidate.name, decision);

        self.alert = MatchAlertState {
            visible: true,
            subject: Some(summary.clone()),
        };

        MatchOutcome::Match(summary)
    }

    pub fn alert(&self) -> &MatchAlertState {
        &self.alert
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert.visible
    }

    /// Hide the alert, keeping the subject until the next match overwrites it
    pub fn dismiss_alert(&mut self) {
        if self.alert.visible {
            tracing::debug!("Match alert dismissed");
        }
        self.alert.visible = false;
    }

    /// Hand the current match to the chat hook and close the alert
    ///
    /// Returns the summary that was handed off, or `None` when no alert is up.
    pub fn start_chat(&mut self) -> Option<MatchSummary> {
        if !self.alert.visible {
            return None;
        }

        let subject = self.alert.subject.clone()?;

        match self.chat_hook.as_mut() {
            Some(hook) => hook(&subject),
            None => tracing::debug!("No chat hook registered for {}", subject.name),
        }

        self.alert.visible = false;
        Some(subject)
    }
}

impl<R: RandomSource + std::fmt::Debug> std::fmt::Debug for MatchController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchController")
            .field("random", &self.random)
            .field("alert", &self.alert)
            .field("chat_hook", &self.chat_hook.is_some())
            .finish()
    }
}
