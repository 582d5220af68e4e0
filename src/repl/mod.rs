//! Interactive demo session (Read-Eval-Print Loop)
//!
//! The terminal stand-in for the single-page site: chat is the default
//! input path, page sections are slash commands, news loads on startup.
//! Single-threaded event loop; the typing delay, counter animation and
//! news fetch are independent awaits with no shared mutable state.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::chat;
use crate::config::Config;
use crate::news::{NewsClient, FETCH_ERROR_MESSAGE};
use crate::quiz::{CHOICE_COUNT, QUESTIONS, QUESTION_COUNT};
use crate::risk::RiskInputs;
use crate::stats;
use crate::{advisor, repl::commands::is_command};

pub use crate::repl::commands::{Command, CommandHandler, CommandOutcome};
pub use crate::repl::display::Display;
pub use crate::repl::input::InputHandler;
pub use crate::repl::session::{NewsState, Session, SessionStats};

/// Prompt for the main loop
const PROMPT: &str = ">techresq: ";

/// Demo session coordinator
///
/// Wires together input handling, command processing, session state and
/// display for the interactive demo.
pub struct ReplSession {
    input: InputHandler,
    commands: CommandHandler,
    session: Session,
    display: Display,
    news_client: NewsClient,
    typing_delay: Duration,
}

impl ReplSession {
    /// Create a session from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let input = InputHandler::new()?;
        Self::assemble(config, input)
    }

    /// Create a session with persistent command history
    pub fn with_history(config: &Config, history_path: PathBuf) -> Result<Self> {
        let input = InputHandler::with_history(history_path)?;
        Self::assemble(config, input)
    }

    fn assemble(config: &Config, input: InputHandler) -> Result<Self> {
        let news_client = NewsClient::with_config(config.news_endpoint(), config.news_page_size())?;

        Ok(ReplSession {
            input,
            commands: CommandHandler::new(),
            session: Session::new(),
            display: Display::new(),
            news_client,
            typing_delay: config.typing_delay(),
        })
    }

    /// Run the full interactive demo until exit
    pub async fn run(&mut self, version: &str, decorated: bool) -> Result<()> {
        if decorated {
            self.display.show_banner(version);
            let display = &self.display;
            stats::animate(|counters| display.show_counters(counters)).await;
            display.finish_counters();
        }

        // The site loads news on mount; the demo does the same
        self.refresh_news().await;

        loop {
            let line = match self.input.read_line(PROMPT)? {
                Some(line) => line,
                None => break, // Ctrl-D / Ctrl-C
            };

            if !self.handle_input(&line).await? {
                break;
            }
        }

        self.input.save_history()?;
        Ok(())
    }

    /// Handle one line of input (command or chat)
    ///
    /// Returns false when the session should end.
    pub async fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        if is_command(input) {
            let command = self.commands.parse(input);
            let outcome = self
                .commands
                .execute(command, &mut self.session, &self.display)?;

            match outcome {
                CommandOutcome::Exit => return Ok(false),
                CommandOutcome::Continue => {}
                CommandOutcome::RunQuiz => self.run_quiz()?,
                CommandOutcome::RunRisk => self.run_risk()?,
                CommandOutcome::RunAdvisor => self.run_advisor()?,
                CommandOutcome::RefreshNews => self.refresh_news().await,
            }
            return Ok(true);
        }

        self.chat_submit(input).await;
        Ok(true)
    }

    /// Chat path: append user message, wait out the typing delay, reply
    async fn chat_submit(&mut self, input: &str) {
        if !self.session.transcript_mut().submit(input) {
            return;
        }
        self.session.note_message_sent();

        let spinner = self.display.typing_spinner();
        let reply = chat::reply_after_delay(self.typing_delay, &mut rand::thread_rng()).await;
        spinner.finish_and_clear();

        self.session.transcript_mut().push_bot(reply);

        if let Some(message) = self.session.transcript().messages().last() {
            self.display.show_chat_message(message);
        }
    }

    /// Quiz section: ask all four questions, score once at the end
    fn run_quiz(&mut self) -> Result<()> {
        self.session.quiz_mut().reset();

        for (index, question) in QUESTIONS.iter().enumerate() {
            self.display
                .show_question(index + 1, QUESTION_COUNT, question);

            let choice = loop {
                let line = match self.input.read_line("  your answer (1-4): ")? {
                    Some(line) => line,
                    None => {
                        self.display.show_info("Quiz abandoned.");
                        return Ok(());
                    }
                };

                match line.trim().parse::<usize>() {
                    Ok(n) if (1..=CHOICE_COUNT).contains(&n) => break n - 1,
                    _ => self.display.show_error("Pick a number between 1 and 4."),
                }
            };

            if let Some(score) = self.session.quiz_mut().record_answer(index, choice) {
                self.display.show_quiz_score(&score);
                if score.is_perfect() {
                    self.display.show_celebration();
                }
                self.session.note_quiz_completed();
            }
        }

        Ok(())
    }

    /// Risk section: two counts in, one tier out
    fn run_risk(&mut self) -> Result<()> {
        let buildings = match self.input.read_line("  number of buildings: ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        let students = match self.input.read_line("  number of students: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let inputs = RiskInputs::parse(&buildings, &students);
        let tier = inputs.tier();
        self.display.show_risk(&inputs, tier);
        self.session.record_risk(inputs, tier);
        Ok(())
    }

    /// Advisor section: symptom text in, canned advice out
    fn run_advisor(&mut self) -> Result<()> {
        let symptoms = match self.input.read_line("  describe your symptoms: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let advice = advisor::advise(&symptoms);
        self.display.show_advice(advice.text());
        self.session.record_advice(advice);
        Ok(())
    }

    /// News section: fetch, relabel, render; one static message on failure
    async fn refresh_news(&mut self) {
        let spinner = self.display.news_spinner();
        let result = self.news_client.fetch_articles().await;
        spinner.finish_and_clear();

        match result {
            Ok(articles) => {
                self.display.show_news(&articles);
                self.session.set_news(NewsState::Loaded(articles));
            }
            Err(_) => {
                self.display.show_error(FETCH_ERROR_MESSAGE);
                self.session.set_news(NewsState::Failed(FETCH_ERROR_MESSAGE));
            }
        }
    }

    /// Session state (immutable)
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Session state (mutable)
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Display manager
    pub fn display(&self) -> &Display {
        &self.display
    }
}
