//! TechResQ v0.1.0 - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use techresq::{
    advisor,
    cli::{Args, Commands},
    config::Config,
    news::{NewsClient, FETCH_ERROR_MESSAGE},
    repl::{Display, ReplSession},
    risk::RiskInputs,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load().unwrap_or_default();

    match &args.command {
        None | Some(Commands::Start) => run_interactive(&args, &config).await,
        Some(Commands::Quiz) => run_quiz(&config).await,
        Some(Commands::Risk { buildings, students }) => run_risk(buildings, students),
        Some(Commands::Advise { symptoms }) => run_advise(symptoms),
        Some(Commands::News) => run_news(&config).await,
        Some(Commands::Config) => show_config(&config),
    }
}

/// Interactive demo session (the default)
async fn run_interactive(args: &Args, config: &Config) -> Result<()> {
    let mut repl = match history_path() {
        Some(path) => ReplSession::with_history(config, path)?,
        None => ReplSession::new(config)?,
    };

    repl.run(VERSION, args.verbosity().show_decoration()).await
}

/// One-shot quiz run
async fn run_quiz(config: &Config) -> Result<()> {
    let mut repl = ReplSession::new(config)?;
    repl.handle_input("/quiz").await?;
    Ok(())
}

/// One-shot risk tier computation
fn run_risk(buildings: &str, students: &str) -> Result<()> {
    let inputs = RiskInputs::parse(buildings, students);
    Display::new().show_risk(&inputs, inputs.tier());
    Ok(())
}

/// One-shot symptom advice
fn run_advise(symptoms: &[String]) -> Result<()> {
    let text = symptoms.join(" ");
    let advice = advisor::advise(&text);
    Display::new().show_advice(advice.text());
    Ok(())
}

/// One-shot news fetch
async fn run_news(config: &Config) -> Result<()> {
    let display = Display::new();
    let client = NewsClient::with_config(config.news_endpoint(), config.news_page_size())?;

    let spinner = display.news_spinner();
    let result = client.fetch_articles().await;
    spinner.finish_and_clear();

    match result {
        Ok(articles) => display.show_news(&articles),
        Err(_) => display.show_error(FETCH_ERROR_MESSAGE),
    }
    Ok(())
}

/// Print the effective configuration
fn show_config(config: &Config) -> Result<()> {
    println!("\n{}", "Configuration:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    if let Ok(path) = Config::config_path() {
        println!("  File:          {}", path.display());
    }
    println!("  News endpoint: {}", config.news_endpoint().green());
    println!("  Page size:     {}", config.news_page_size().to_string().green());
    println!(
        "  Typing delay:  {}ms",
        config.typing_delay().as_millis().to_string().green()
    );
    println!();
    Ok(())
}

/// Command history lives next to the config file
fn history_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(".techresq").join("history"))
}
