//! Display manager for the demo terminal UI
//!
//! Renders the banner, chat bubbles, quiz questions, risk gauge, news
//! listing, and the celebration burst that stands in for the website's
//! confetti. All user-facing output funnels through here.

use crate::chat::{ChatMessage, Sender};
use crate::news::NewsArticle;
use crate::quiz::{Question, QuizScore};
use crate::risk::{RiskInputs, RiskTier};
use crate::stats::Counters;
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Spinner tick rate for typing/loading indicators
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Display manager for the demo UI
pub struct Display;

impl Display {
    /// Create new display manager
    pub fn new() -> Self {
        Display
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  TechResQ {} - A Proactive Approach to Safety", version);
        let info = "  Chat: ResQBot | Sections: /quiz /risk /advisor /news";
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
        println!(
            "Type a message for ResQBot (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Render one frame of the impact counters, in place
    pub fn show_counters(&self, counters: &Counters) {
        print!(
            "\r  {} schools protected | {} students covered | {}% incidents resolved",
            group_digits(counters.schools).bold().cyan(),
            group_digits(counters.students).bold().cyan(),
            counters.incidents.to_string().bold().cyan(),
        );
        let _ = io::stdout().flush();
    }

    /// End the counter animation line
    pub fn finish_counters(&self) {
        println!("\n");
    }

    /// Display prompt for user input
    pub fn show_prompt(&self) -> io::Result<()> {
        print!("{}", ">techresq: ".green().bold());
        io::stdout().flush()
    }

    /// Render a chat transcript entry
    pub fn show_chat_message(&self, message: &ChatMessage) {
        match message.sender {
            Sender::Bot => println!("{} {}", "ResQBot:".cyan().bold(), message.text),
            Sender::User => println!("{} {}", "You:".green().bold(), message.text),
        }
    }

    /// Spinner shown while ResQBot "types"
    pub fn typing_spinner(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("ResQBot is typing...");
        pb.enable_steady_tick(SPINNER_INTERVAL);
        pb
    }

    /// Spinner shown while the news feed loads
    pub fn news_spinner(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Fetching disaster news...");
        pb.enable_steady_tick(SPINNER_INTERVAL);
        pb
    }

    /// Render a quiz question with its numbered choices
    pub fn show_question(&self, number: usize, total: usize, question: &Question) {
        println!(
            "\n{} {}",
            format!("Question {}/{}:", number, total).bold().cyan(),
            question.prompt
        );
        for (i, choice) in question.choices.iter().enumerate() {
            println!("  {}. {}", (i + 1).to_string().cyan(), choice);
        }
    }

    /// Render the final quiz score
    pub fn show_quiz_score(&self, score: &QuizScore) {
        println!();
        let line = format!("You scored {}/{}", score.correct, score.total);
        if score.is_perfect() {
            println!("{} {}", "★".yellow().bold(), line.green().bold());
        } else {
            println!("{} {}", "•".cyan(), line.bold());
        }
    }

    /// Celebration burst for a perfect score (the terminal's confetti)
    pub fn show_celebration(&self) {
        println!();
        println!("  {}", "*  .  🎉  .  *  .  🎉  .  *".yellow().bold());
        println!("  {}", "  Perfect score! Preparedness pro!".green().bold());
        println!("  {}", "*  .  🎉  .  *  .  🎉  .  *".yellow().bold());
        println!();
    }

    /// Render a risk result, colored by tier
    pub fn show_risk(&self, inputs: &RiskInputs, tier: RiskTier) {
        let label = match tier {
            RiskTier::High => "HIGH RISK".red().bold(),
            RiskTier::Medium => "MEDIUM RISK".yellow().bold(),
            RiskTier::Low => "LOW RISK".green().bold(),
        };
        println!(
            "\n  {} (buildings: {}, students: {})",
            label, inputs.buildings, inputs.students
        );
        let note = match tier {
            RiskTier::High => "Immediate preparedness planning recommended.",
            RiskTier::Medium => "Review your emergency protocols this quarter.",
            RiskTier::Low => "Keep up the regular drills.",
        };
        println!("  {}\n", note.dimmed());
    }

    /// Render advisor output
    pub fn show_advice(&self, text: &str) {
        println!("\n{} {}\n", "Advisor:".cyan().bold(), text);
    }

    /// Render the news listing
    pub fn show_news(&self, articles: &[NewsArticle]) {
        println!("\n{}", "Disaster News:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        for (i, article) in articles.iter().enumerate() {
            println!("  {}. {}", (i + 1).to_string().cyan(), article.title.bold());
            println!("     {}", article.description.dimmed());
            println!(
                "     {} | {}",
                article.source.yellow(),
                article.published_at.to_rfc3339().dimmed()
            );
        }
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators (2500 -> "2,500")
fn group_digits(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
