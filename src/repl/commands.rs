//! Command handler for the demo's slash commands
//!
//! The page sections of the original site become commands here: quiz, risk
//! calculator, symptom advisor, and news panel, plus session management.
//! Anything that is not a command is chat input for ResQBot.

use crate::repl::display::Display;
use crate::repl::session::{NewsState, Session};
use anyhow::Result;
use colored::*;

/// Demo commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quiz,
    Risk,
    Advise,
    News,
    Status,
    Reset,
    Clear,
    Exit,
    Unknown { input: String },
}

/// What the REPL loop should do after a command executes
///
/// Interactive and network-bound sections (quiz, risk, advisor, news) are
/// driven by the loop itself; local commands finish inside `execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
    RunQuiz,
    RunRisk,
    RunAdvisor,
    RefreshNews,
}

/// Command parser and executor
pub struct CommandHandler;

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    ///
    /// Complexity: O(1) string matching
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        // Not a command if doesn't start with /
        if !trimmed.starts_with('/') {
            return Command::Unknown { input: input.to_string() };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "quiz" => Command::Quiz,
            "risk" => Command::Risk,
            "advisor" | "advise" | "doctor" => Command::Advise,
            "news" | "refresh" => Command::News,
            "status" => Command::Status,
            "reset" => Command::Reset,
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command against the session
    pub fn execute(
        &mut self,
        command: Command,
        session: &mut Session,
        display: &Display,
    ) -> Result<CommandOutcome> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(CommandOutcome::Continue)
            }
            Command::Exit => {
                println!("{}", "Stay safe out there!".green());
                Ok(CommandOutcome::Exit)
            }
            Command::Quiz => Ok(CommandOutcome::RunQuiz),
            Command::Risk => Ok(CommandOutcome::RunRisk),
            Command::Advise => Ok(CommandOutcome::RunAdvisor),
            Command::News => Ok(CommandOutcome::RefreshNews),
            Command::Status => {
                self.show_status(session);
                Ok(CommandOutcome::Continue)
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Session reset. All demo state cleared.".yellow());
                Ok(CommandOutcome::Continue)
            }
            Command::Clear => {
                display.clear_screen()?;
                Ok(CommandOutcome::Continue)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(CommandOutcome::Continue)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/quiz", "Take the preparedness quiz"),
            ("/risk", "Calculate a campus risk tier"),
            ("/advisor, /doctor", "Get canned health advice for symptoms"),
            ("/news, /refresh", "Fetch the disaster news feed"),
            ("/status", "Show session status and statistics"),
            ("/reset", "Clear all demo state"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Leave the demo"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Type anything else to chat with {}", "ResQBot".cyan());
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display session status
    fn show_status(&self, session: &Session) {
        println!("\n{}", "Session Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let stats = session.stats();
        let duration = session.session_duration();
        let minutes = duration / 60;
        let seconds = duration % 60;

        let duration_str = if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        };

        println!("  Chat Messages:    {}", stats.messages_sent.to_string().green());
        println!("  Quizzes Done:     {}", stats.quizzes_completed.to_string().green());
        println!("  Advisor Queries:  {}", stats.advisor_queries.to_string().green());
        println!("  News Refreshes:   {}", stats.news_refreshes.to_string().green());
        println!("  Session Duration: {}", duration_str.green());

        if let Some((inputs, tier)) = session.last_risk() {
            println!(
                "  Last Risk:        {} (buildings: {}, students: {})",
                tier.to_string().green(),
                inputs.buildings,
                inputs.students
            );
        }

        let news_line = match session.news() {
            NewsState::NotLoaded => "not loaded".yellow(),
            NewsState::Loaded(articles) => format!("{} articles", articles.len()).green(),
            NewsState::Failed(_) => "failed".red(),
        };
        println!("  News Feed:        {}", news_line);
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_command() {
        assert!(is_command("/help"));
        assert!(is_command(" /quiz"));
        assert!(!is_command("quiz"));
        assert!(!is_command("how do I prepare for a flood"));
    }

    #[test]
    fn test_parse_help() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/help"), Command::Help);
        assert_eq!(handler.parse("/h"), Command::Help);
    }

    #[test]
    fn test_parse_exit() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/exit"), Command::Exit);
        assert_eq!(handler.parse("/quit"), Command::Exit);
        assert_eq!(handler.parse("/q"), Command::Exit);
    }

    #[test]
    fn test_parse_sections() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/quiz"), Command::Quiz);
        assert_eq!(handler.parse("/risk"), Command::Risk);
        assert_eq!(handler.parse("/advisor"), Command::Advise);
        assert_eq!(handler.parse("/doctor"), Command::Advise);
        assert_eq!(handler.parse("/news"), Command::News);
        assert_eq!(handler.parse("/refresh"), Command::News);
    }

    #[test]
    fn test_parse_session_commands() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/status"), Command::Status);
        assert_eq!(handler.parse("/reset"), Command::Reset);
        assert_eq!(handler.parse("/clear"), Command::Clear);
        assert_eq!(handler.parse("/cls"), Command::Clear);
    }

    #[test]
    fn test_parse_case_insensitive() {
        let handler = CommandHandler::new();
        assert_eq!(handler.parse("/QUIZ"), Command::Quiz);
        assert_eq!(handler.parse("/Help"), Command::Help);
    }

    #[test]
    fn test_parse_unknown() {
        let handler = CommandHandler::new();
        match handler.parse("/confetti") {
            Command::Unknown { input } => assert!(input.contains("confetti")),
            _ => panic!("Expected Unknown command"),
        }
    }

    #[test]
    fn test_parse_non_command() {
        let handler = CommandHandler::new();
        match handler.parse("tell me about floods") {
            Command::Unknown { .. } => {}
            _ => panic!("Expected Unknown command for non-command input"),
        }
    }

    #[test]
    fn test_execute_exit() {
        let mut handler = CommandHandler::new();
        let mut session = Session::new();
        let display = Display::new();

        let outcome = handler
            .execute(Command::Exit, &mut session, &display)
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Exit);
    }

    #[test]
    fn test_execute_sections_defer_to_loop() {
        let mut handler = CommandHandler::new();
        let mut session = Session::new();
        let display = Display::new();

        let cases = [
            (Command::Quiz, CommandOutcome::RunQuiz),
            (Command::Risk, CommandOutcome::RunRisk),
            (Command::Advise, CommandOutcome::RunAdvisor),
            (Command::News, CommandOutcome::RefreshNews),
        ];
        for (command, expected) in cases {
            let outcome = handler.execute(command, &mut session, &display).unwrap();
            assert_eq!(outcome, expected);
        }
    }

    #[test]
    fn test_execute_reset_clears_session() {
        let mut handler = CommandHandler::new();
        let mut session = Session::new();
        let display = Display::new();

        session.transcript_mut().submit("hello");
        session.note_message_sent();
        assert_eq!(session.stats().messages_sent, 1);

        handler
            .execute(Command::Reset, &mut session, &display)
            .unwrap();
        assert_eq!(session.stats().messages_sent, 0);
    }

    #[test]
    fn test_execute_help_continues() {
        let mut handler = CommandHandler::new();
        let mut session = Session::new();
        let display = Display::new();

        let outcome = handler
            .execute(Command::Help, &mut session, &display)
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Continue);
    }
}
