use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILE};
use crate::core::engine::Engine;
use crate::games::hangman::{GameEngine, GameView, GuessOutcome, HangmanGame};

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "Hangman in the terminal")]
#[command(version)]
pub struct Cli {
    /// Word list file, one word per line
    #[arg(long, global = true, env = "HANGTERM_WORDS")]
    pub words: Option<PathBuf>,

    /// Seed for word selection
    #[arg(long, global = true, env = "HANGTERM_SEED")]
    pub seed: Option<u64>,

    /// Where interactive sessions write their log
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Play a scripted game and print the view after every guess as JSON
    Script {
        /// Secret word; otherwise one is drawn from the word list
        #[arg(short, long)]
        word: Option<String>,

        /// Letters to guess, in order
        guesses: String,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        let fixed_word = match &self.command {
            Some(Commands::Script { word, .. }) => word.clone(),
            _ => None,
        };
        Config {
            words: self.words.clone(),
            seed: self.seed,
            fixed_word,
            log_file: self.log_file.clone(),
        }
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Some(Commands::Script { guesses, .. }) => {
            init_tracing(None)?;
            let mut engine = GameEngine::from_boxed(config.word_provider()?);
            run_script(&mut engine, &guesses, io::stdout().lock())
        }
        Some(Commands::Play) | None => {
            init_tracing(Some(&config))?;
            run_play(&config)
        }
    }
}

/// Interactive session. The first word is fetched before the terminal is
/// taken over so a broken word source is reported on a normal screen.
fn run_play(config: &Config) -> Result<()> {
    let mut engine = GameEngine::from_boxed(config.word_provider()?);
    engine.start_new_game().context("could not start the first game")?;

    let mut terminal = ratatui::init();
    let result = Engine::new(HangmanGame::new(engine)).run(&mut terminal);
    ratatui::restore();

    let game = result?;
    info!(status = ?game.engine().status(), "session ended");
    Ok(())
}

#[derive(Serialize)]
struct ScriptStep {
    guess: char,
    result: GuessOutcome,
    view: GameView,
}

/// Starts a game and submits every char of `guesses`, writing one JSON
/// line per guess.
pub fn run_script(engine: &mut GameEngine, guesses: &str, mut out: impl Write) -> Result<()> {
    engine.start_new_game().context("could not start the game")?;

    for guess in guesses.chars() {
        let result = engine.submit_guess(guess);
        let view = engine
            .current_view()
            .context("game vanished after a successful start")?;
        serde_json::to_writer(&mut out, &ScriptStep { guess, result, view })?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Logs go to a file while the TUI owns the screen, otherwise to stderr.
fn init_tracing(config: Option<&Config>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match config {
        Some(config) => {
            let log_file = std::fs::File::create(&config.log_file)
                .with_context(|| format!("could not create log file {}", config.log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };
    installed.map_err(|e| anyhow!("could not install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::FixedWord;

    #[test]
    fn test_cli_parses_script() {
        let cli = Cli::try_parse_from(["hangterm", "script", "--word", "cat", "cat"]).unwrap();
        let config = cli.config();
        assert_eq!(config.fixed_word.as_deref(), Some("cat"));
        assert!(matches!(cli.command, Some(Commands::Script { ref guesses, .. }) if guesses == "cat"));
    }

    #[test]
    fn test_cli_defaults_to_play() {
        let cli = Cli::try_parse_from(["hangterm", "--seed", "3"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.config();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.fixed_word, None);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_script_emits_one_line_per_guess() {
        let mut engine = GameEngine::new(FixedWord("dog".into()));
        let mut out = Vec::new();
        run_script(&mut engine, "doxg", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);

        assert_eq!(lines[0]["guess"], "d");
        assert_eq!(lines[0]["result"]["outcome"], "hit");
        assert!(lines[0]["view"]["slots"].is_array());
        assert_eq!(lines[2]["result"]["outcome"], "miss");
        assert_eq!(lines[2]["view"]["incorrect_guesses"], 1);
        assert_eq!(lines[3]["view"]["status"], "won");
        assert_eq!(lines[3]["view"]["answer"], "dog");
    }

    #[test]
    fn test_second_tracing_init_is_an_error() {
        // The first call may lose to a subscriber installed elsewhere in the
        // test binary; the second must always fail loudly.
        let _ = init_tracing(None);
        let err = init_tracing(None).unwrap_err();
        assert!(err.to_string().contains("could not install log subscriber"));
    }

    #[test]
    fn test_script_reports_bad_word() {
        let mut engine = GameEngine::new(FixedWord("".into()));
        let err = run_script(&mut engine, "abc", Vec::new()).unwrap_err();
        assert!(err.to_string().contains("could not start the game"));
    }
}
