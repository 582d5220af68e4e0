//! Preparedness quiz demo
//!
//! Four fixed multiple-choice questions with client-side scoring. Scoring
//! runs exactly once per completed attempt; partial answer sets produce no
//! score. A perfect score is a distinguished outcome that triggers a
//! celebratory display effect outside this module.

/// Number of quiz questions (fixed)
pub const QUESTION_COUNT: usize = 4;

/// Number of choices per question (fixed)
pub const CHOICE_COUNT: usize = 4;

/// A single quiz question, immutable and defined at startup
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub choices: [&'static str; CHOICE_COUNT],
    pub correct: usize,
}

/// The fixed question bank
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "What should you do first during an earthquake?",
        choices: [
            "Run outside immediately",
            "Drop, Cover, and Hold On",
            "Stand in a doorway",
            "Call for help",
        ],
        correct: 1,
    },
    Question {
        prompt: "How many days of emergency supplies should you keep at home?",
        choices: ["1 day", "3 days", "7 days", "14 days"],
        correct: 2,
    },
    Question {
        prompt: "What is the best way to stay informed during a disaster?",
        choices: [
            "Social media only",
            "Battery-powered radio",
            "Neighbor updates",
            "None needed",
        ],
        correct: 1,
    },
    Question {
        prompt: "Where should your family emergency meeting point be?",
        choices: [
            "At home only",
            "Near your workplace",
            "Two places: one near home, one outside neighborhood",
            "School parking lot",
        ],
        correct: 2,
    },
];

/// Final score of a completed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    /// Perfect scores trigger the celebration effect
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// One quiz attempt: answers accumulate, then a single scoring pass
///
/// Ephemeral, like all demo state: discarded with the session.
#[derive(Debug, Clone, Default)]
pub struct QuizAttempt {
    answers: [Option<usize>; QUESTION_COUNT],
    score: Option<QuizScore>,
}

impl QuizAttempt {
    /// Start a fresh attempt
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a question
    ///
    /// Returns the score when this answer completes the attempt; `None`
    /// otherwise. Out-of-range indices and answers after scoring are
    /// ignored. Re-answering before completion overwrites.
    pub fn record_answer(&mut self, question: usize, choice: usize) -> Option<QuizScore> {
        if self.score.is_some() || question >= QUESTION_COUNT || choice >= CHOICE_COUNT {
            return None;
        }

        self.answers[question] = Some(choice);

        if self.is_complete() {
            let correct = self
                .answers
                .iter()
                .zip(QUESTIONS.iter())
                .filter(|(answer, q)| **answer == Some(q.correct))
                .count();
            let score = QuizScore {
                correct,
                total: QUESTION_COUNT,
            };
            self.score = Some(score);
            return Some(score);
        }

        None
    }

    /// Whether every question has an answer
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// Score of the attempt, if it has been completed
    pub fn score(&self) -> Option<QuizScore> {
        self.score
    }

    /// Recorded answer for a question, if any
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    /// Number of questions answered so far
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Discard all answers and the score
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_bank_shape() {
        assert_eq!(QUESTIONS.len(), QUESTION_COUNT);
        for q in &QUESTIONS {
            assert!(q.correct < CHOICE_COUNT);
            assert!(!q.prompt.is_empty());
        }
    }

    #[test]
    fn test_fresh_attempt_unscored() {
        let attempt = QuizAttempt::new();
        assert!(!attempt.is_complete());
        assert_eq!(attempt.score(), None);
        assert_eq!(attempt.answered_count(), 0);
    }

    #[test]
    fn test_partial_attempt_produces_no_score() {
        let mut attempt = QuizAttempt::new();
        assert_eq!(attempt.record_answer(0, 1), None);
        assert_eq!(attempt.record_answer(1, 2), None);
        assert_eq!(attempt.record_answer(2, 1), None);
        assert!(!attempt.is_complete());
        assert_eq!(attempt.score(), None);
    }

    #[test]
    fn test_perfect_score() {
        let mut attempt = QuizAttempt::new();
        attempt.record_answer(0, 1);
        attempt.record_answer(1, 2);
        attempt.record_answer(2, 1);
        let score = attempt.record_answer(3, 2).expect("final answer scores");

        assert_eq!(score, QuizScore { correct: 4, total: 4 });
        assert!(score.is_perfect());
        assert_eq!(attempt.score(), Some(score));
    }

    #[test]
    fn test_zero_score() {
        let mut attempt = QuizAttempt::new();
        attempt.record_answer(0, 0);
        attempt.record_answer(1, 0);
        attempt.record_answer(2, 0);
        let score = attempt.record_answer(3, 0).unwrap();

        assert_eq!(score, QuizScore { correct: 0, total: 4 });
        assert!(!score.is_perfect());
    }

    #[test]
    fn test_overwrite_before_completion() {
        let mut attempt = QuizAttempt::new();
        attempt.record_answer(0, 0); // wrong
        attempt.record_answer(0, 1); // corrected before completion
        attempt.record_answer(1, 2);
        attempt.record_answer(2, 1);
        let score = attempt.record_answer(3, 2).unwrap();

        assert_eq!(score.correct, 4);
    }

    #[test]
    fn test_scoring_happens_exactly_once() {
        let mut attempt = QuizAttempt::new();
        for q in 0..QUESTION_COUNT {
            attempt.record_answer(q, 0);
        }
        let first = attempt.score().unwrap();

        // Further answers are ignored after scoring
        assert_eq!(attempt.record_answer(0, 1), None);
        assert_eq!(attempt.score(), Some(first));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut attempt = QuizAttempt::new();
        assert_eq!(attempt.record_answer(QUESTION_COUNT, 0), None);
        assert_eq!(attempt.record_answer(0, CHOICE_COUNT), None);
        assert_eq!(attempt.answered_count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut attempt = QuizAttempt::new();
        for q in 0..QUESTION_COUNT {
            attempt.record_answer(q, 1);
        }
        assert!(attempt.score().is_some());

        attempt.reset();
        assert_eq!(attempt.score(), None);
        assert_eq!(attempt.answered_count(), 0);
    }
}
