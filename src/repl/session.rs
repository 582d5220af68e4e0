//! Session state for the interactive demo
//!
//! Holds every piece of demo state for the current run: chat transcript,
//! quiz attempt, last risk and advice results, cached news, and simple usage
//! counters for the status display. All of it is ephemeral and discarded
//! when the session ends or is reset.

use crate::advisor::Advice;
use crate::chat::Transcript;
use crate::news::NewsArticle;
use crate::quiz::QuizAttempt;
use crate::risk::{RiskInputs, RiskTier};
use std::time::{SystemTime, UNIX_EPOCH};

/// Usage counters shown by /status
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    pub messages_sent: usize,
    pub quizzes_completed: usize,
    pub advisor_queries: usize,
    pub news_refreshes: usize,
}

/// Outcome of the most recent news fetch
#[derive(Debug, Clone, Default)]
pub enum NewsState {
    /// No fetch attempted yet
    #[default]
    NotLoaded,
    /// Last fetch succeeded
    Loaded(Vec<NewsArticle>),
    /// Last fetch failed; holds the static user-facing message
    Failed(&'static str),
}

/// Ephemeral session state
pub struct Session {
    transcript: Transcript,
    quiz: QuizAttempt,
    last_risk: Option<(RiskInputs, RiskTier)>,
    last_advice: Option<Advice>,
    news: NewsState,
    stats: SessionStats,
    session_start: u64,
}

impl Session {
    /// Create a fresh session
    ///
    /// Complexity: O(1) initialization
    pub fn new() -> Self {
        Session {
            transcript: Transcript::new(),
            quiz: QuizAttempt::new(),
            last_risk: None,
            last_advice: None,
            news: NewsState::NotLoaded,
            stats: SessionStats::default(),
            session_start: now_secs(),
        }
    }

    /// Chat transcript (immutable)
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Chat transcript (mutable)
    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Current quiz attempt (mutable)
    pub fn quiz_mut(&mut self) -> &mut QuizAttempt {
        &mut self.quiz
    }

    /// Current quiz attempt (immutable)
    pub fn quiz(&self) -> &QuizAttempt {
        &self.quiz
    }

    /// Record a chat message having been sent
    pub fn note_message_sent(&mut self) {
        self.stats.messages_sent += 1;
    }

    /// Record a completed quiz
    pub fn note_quiz_completed(&mut self) {
        self.stats.quizzes_completed += 1;
    }

    /// Record the latest risk result
    pub fn record_risk(&mut self, inputs: RiskInputs, tier: RiskTier) {
        self.last_risk = Some((inputs, tier));
    }

    /// Latest risk result, if any
    pub fn last_risk(&self) -> Option<(RiskInputs, RiskTier)> {
        self.last_risk
    }

    /// Record the latest advisor outcome
    pub fn record_advice(&mut self, advice: Advice) {
        self.last_advice = Some(advice);
        self.stats.advisor_queries += 1;
    }

    /// Latest advisor outcome, if any
    pub fn last_advice(&self) -> Option<Advice> {
        self.last_advice
    }

    /// Store the outcome of a news fetch
    pub fn set_news(&mut self, state: NewsState) {
        self.news = state;
        self.stats.news_refreshes += 1;
    }

    /// Current news panel state
    pub fn news(&self) -> &NewsState {
        &self.news
    }

    /// Usage counters
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Get session duration in seconds
    pub fn session_duration(&self) -> u64 {
        now_secs().saturating_sub(self.session_start)
    }

    /// Discard all state (everything is ephemeral by design)
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor;

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        assert_eq!(session.transcript().len(), 1); // greeting
        assert_eq!(session.quiz().answered_count(), 0);
        assert!(session.last_risk().is_none());
        assert!(session.last_advice().is_none());
        assert!(matches!(session.news(), NewsState::NotLoaded));
        assert_eq!(session.stats().messages_sent, 0);
    }

    #[test]
    fn test_message_counter() {
        let mut session = Session::new();
        session.transcript_mut().submit("hello");
        session.note_message_sent();
        assert_eq!(session.stats().messages_sent, 1);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_record_risk() {
        let mut session = Session::new();
        let inputs = RiskInputs::new(70, 0);
        session.record_risk(inputs, inputs.tier());

        let (stored, tier) = session.last_risk().unwrap();
        assert_eq!(stored, inputs);
        assert_eq!(tier, RiskTier::Medium);
    }

    #[test]
    fn test_record_advice_counts_queries() {
        let mut session = Session::new();
        session.record_advice(advisor::advise("fever"));
        session.record_advice(advisor::advise(""));
        assert_eq!(session.stats().advisor_queries, 2);
        assert_eq!(session.last_advice(), Some(Advice::Prompt));
    }

    #[test]
    fn test_news_state_transitions() {
        let mut session = Session::new();
        session.set_news(NewsState::Failed(crate::news::FETCH_ERROR_MESSAGE));
        assert!(matches!(session.news(), NewsState::Failed(_)));

        session.set_news(NewsState::Loaded(vec![]));
        assert!(matches!(session.news(), NewsState::Loaded(_)));
        assert_eq!(session.stats().news_refreshes, 2);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut session = Session::new();
        session.transcript_mut().submit("hello");
        session.note_message_sent();
        session.record_advice(advisor::advise("fever"));
        session.quiz_mut().record_answer(0, 1);

        session.reset();

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.stats().messages_sent, 0);
        assert!(session.last_advice().is_none());
        assert_eq!(session.quiz().answered_count(), 0);
    }
}
