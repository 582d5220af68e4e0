//! ResQBot chat demo
//!
//! Append-only transcript plus canned bot replies. Reply selection is
//! uniform random over four fixed strings, independent of the message
//! content; the fixed typing delay simulates the bot "thinking". Not a
//! dialogue system.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Fixed delay before a bot reply appears
pub const TYPING_DELAY: Duration = Duration::from_millis(1000);

/// Greeting seeded into every new transcript
pub const GREETING: &str =
    "Hello! I'm ResQBot. How can I help you with disaster preparedness today?";

/// The four canned bot replies
pub const CANNED_REPLIES: [&str; 4] = [
    "That's a great question! For immediate emergency guidance, I recommend following your local emergency protocols.",
    "Based on AI analysis, here are some personalized safety recommendations for your situation...",
    "I can help you create a family emergency plan. Would you like me to guide you through the steps?",
    "Emergency supplies are crucial. Let me provide you with a customized checklist based on your location and family size.",
];

/// Message origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Append-only chat transcript, seeded with the ResQBot greeting
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// New transcript containing only the greeting
    pub fn new() -> Self {
        Transcript {
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            }],
        }
    }

    /// Submit user input
    ///
    /// Empty/whitespace input appends nothing and returns false. Otherwise
    /// exactly one user entry is appended; the caller is responsible for
    /// appending the bot reply after [`TYPING_DELAY`].
    pub fn submit(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: trimmed.to_string(),
        });
        true
    }

    /// Append a bot entry
    pub fn push_bot(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: text.to_string(),
        });
    }

    /// All entries, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Entry count (greeting included)
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// A transcript is never empty (the greeting is always present)
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Discard everything and re-seed the greeting
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick one canned reply uniformly at random
///
/// Selection ignores the user's message content entirely.
pub fn canned_reply<R: Rng>(rng: &mut R) -> &'static str {
    CANNED_REPLIES
        .choose(rng)
        .copied()
        .unwrap_or(CANNED_REPLIES[0])
}

/// Wait out the typing delay, then pick a reply
///
/// The delay is a parameter so configuration can shorten it; the demo
/// default is [`TYPING_DELAY`].
pub async fn reply_after_delay<R: Rng>(delay: Duration, rng: &mut R) -> &'static str {
    tokio::time::sleep(delay).await;
    canned_reply(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_transcript_has_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[test]
    fn test_blank_submit_appends_nothing() {
        let mut transcript = Transcript::new();
        assert!(!transcript.submit(""));
        assert!(!transcript.submit("   "));
        assert!(!transcript.submit("\t\n"));
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_submit_appends_one_user_entry() {
        let mut transcript = Transcript::new();
        assert!(transcript.submit("How do I prepare for a flood?"));
        assert_eq!(transcript.len(), 2);

        let last = transcript.messages().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "How do I prepare for a flood?");
    }

    #[test]
    fn test_submit_trims_input() {
        let mut transcript = Transcript::new();
        transcript.submit("  help  ");
        assert_eq!(transcript.messages().last().unwrap().text, "help");
    }

    #[test]
    fn test_canned_reply_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let reply = canned_reply(&mut rng);
            assert!(CANNED_REPLIES.contains(&reply));
        }
    }

    #[test]
    fn test_canned_reply_eventually_varies() {
        // Uniform over four strings: 200 draws hit more than one
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(canned_reply(&mut rng));
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_reset_reseeds_greeting() {
        let mut transcript = Transcript::new();
        transcript.submit("hello");
        transcript.push_bot("reply");
        assert_eq!(transcript.len(), 3);

        transcript.reset();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_full_typing_delay() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = tokio::time::Instant::now();
        let reply = reply_after_delay(TYPING_DELAY, &mut rng).await;
        assert!(start.elapsed() >= TYPING_DELAY);
        assert!(CANNED_REPLIES.contains(&reply));
    }
}
