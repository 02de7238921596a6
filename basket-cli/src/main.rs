//! Basket - multilingual shopping list assistant
//!
//! Terminal front end over `basket-core`

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use basket_core::{parser, Language, LanguageDetector, Session, Settings};

mod display;
mod repl;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "basket",
    about = "Manage a shopping list with short commands in English, Spanish or French",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Configuration file (default: .basket/config.yml, then the user config dir)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog YAML file, overriding the configured one
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Read commands from stdin interactively
    Repl,

    /// Apply commands in order to a fresh list
    Exec {
        /// Commands, e.g. "add 2 milk" "añadir pan"
        #[clap(required = true)]
        commands: Vec<String>,

        /// Print the final list as JSON
        #[clap(long)]
        json: bool,

        /// Exit non-zero if any command failed
        #[clap(long)]
        strict: bool,
    },

    /// Show catalog items
    Catalog {
        /// Show the seasonal items instead
        #[clap(long)]
        seasonal: bool,

        /// Output as JSON
        #[clap(long)]
        json: bool,

        /// Language for item names
        #[clap(long, default_value = "en")]
        lang: Language,
    },

    /// Show seasonal and random item suggestions
    Suggest {
        /// Number of random items (default from config)
        #[clap(long)]
        count: Option<usize>,

        /// Seed for reproducible picks
        #[clap(long)]
        seed: Option<u64>,

        /// Language for item names
        #[clap(long, default_value = "en")]
        lang: Language,
    },

    /// Detect the language of a command
    Detect {
        text: Vec<String>,

        /// Show per-language scores
        #[clap(short, long)]
        verbose: bool,
    },

    /// Parse a command without applying it
    Parse {
        text: Vec<String>,

        /// Parse as this language instead of detecting it
        #[clap(long)]
        lang: Option<Language>,
    },
}

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Keywords")]
    lexicon_hits: usize,
    #[tabled(rename = "Trigram Overlap")]
    trigram_overlap: String,
    #[tabled(rename = "Score")]
    score: String,
}

/// Initialize tracing with CLI flags
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        debug!("Catalog override: {}", catalog.display());
        settings.catalog_path = Some(catalog);
    }

    match cli.command {
        Command::Repl => repl_command(&settings),
        Command::Exec {
            commands,
            json,
            strict,
        } => exec_command(&settings, &commands, json, strict),
        Command::Catalog {
            seasonal,
            json,
            lang,
        } => catalog_command(&settings, seasonal, json, lang),
        Command::Suggest { count, seed, lang } => suggest_command(&settings, count, seed, lang),
        Command::Detect { text, verbose } => detect_command(&settings, &text.join(" "), verbose),
        Command::Parse { text, lang } => parse_command(&settings, &text.join(" "), lang),
    }
}

fn new_session(settings: &Settings) -> Result<Session> {
    let catalog = settings.catalog()?;
    info!("Loaded catalog with {} items", catalog.len());
    Ok(Session::new(Arc::new(catalog), settings))
}

fn repl_command(settings: &Settings) -> Result<()> {
    let mut session = new_session(settings)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout)
}

fn exec_command(settings: &Settings, commands: &[String], json: bool, strict: bool) -> Result<()> {
    let mut session = new_session(settings)?;
    let mut stdout = io::stdout();
    let mut failures = 0;

    for command in commands {
        let result = session.handle_command(command).map(|_| ());
        if result.is_err() {
            failures += 1;
        }
        if !json {
            display::write_outcome(&mut stdout, session.language(), command, &result)?;
        }
    }

    if json {
        let output = serde_json::json!({
            "language": session.language(),
            "list": session.list(),
            "total": session.total(),
            "failures": failures,
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        display::write_list(&mut stdout, &session)?;
    }

    if strict && failures > 0 {
        eprintln!("{failures} of {} commands failed", commands.len());
        std::process::exit(1);
    }
    Ok(())
}

fn catalog_command(settings: &Settings, seasonal: bool, json: bool, lang: Language) -> Result<()> {
    let catalog = settings.catalog()?;
    let items = if seasonal {
        catalog.seasonal_items()
    } else {
        catalog.items()
    };

    let mut stdout = io::stdout();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(items)?)?;
    } else {
        display::write_catalog(&mut stdout, items, lang)?;
    }
    Ok(())
}

fn suggest_command(
    settings: &Settings,
    count: Option<usize>,
    seed: Option<u64>,
    lang: Language,
) -> Result<()> {
    let catalog = settings.catalog()?;
    let count = count.unwrap_or(settings.suggestion_count);

    let suggestions = match seed {
        Some(seed) => basket_core::suggestions::suggest(
            &catalog,
            lang,
            count,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => basket_core::suggestions::suggest(&catalog, lang, count, &mut rand::thread_rng()),
    };

    display::write_suggestions(&mut io::stdout(), &suggestions, lang)
}

fn detect_command(settings: &Settings, text: &str, verbose: bool) -> Result<()> {
    let detector = LanguageDetector::from_settings(settings);
    println!("{}", detector.detect(text));

    if verbose {
        let rows: Vec<ScoreRow> = detector
            .scores(text)
            .into_iter()
            .map(|score| ScoreRow {
                language: score.language.to_string(),
                lexicon_hits: score.lexicon_hits,
                trigram_overlap: format!("{:.3}", score.trigram_overlap),
                score: format!("{:.3}", score.score),
            })
            .collect();
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();
        println!("{table}");
    }
    Ok(())
}

fn parse_command(settings: &Settings, text: &str, lang: Option<Language>) -> Result<()> {
    let language = match lang {
        Some(language) => language,
        None => LanguageDetector::from_settings(settings).detect(text),
    };
    let command = parser::parse(text, language);
    let output =
        serde_json::to_string_pretty(&command).context("Failed to serialize parsed command")?;
    println!("{output}");
    Ok(())
}
