mod repl;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use zhesi_core::ThoughtEngine;
use zhesi_store::{Config, export_all, load_export};

#[derive(Parser)]
#[command(
    name = "zhesi",
    about = "Philosophy black box: depth-evolving answers with a traceable thought log"
)]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive question loop (the default)
    Repl {
        /// TOML config file (falls back to $ZHESI_CONFIG, then built-in defaults)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Ask one or more questions in a fresh session
    Ask {
        /// Questions, asked in order
        #[arg(required = true)]
        questions: Vec<String>,

        /// Export the session's trace to this file afterwards
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Print the contents of an exported trace file
    Inspect {
        /// Export file path
        path: PathBuf,
    },
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = explicit
        .map(PathBuf::from)
        .or_else(|| std::env::var("ZHESI_CONFIG").ok().map(PathBuf::from));
    Config::load_or_default(path.as_deref()).context("failed to load config")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        None => cmd_repl(None),
        Some(Commands::Repl { config }) => cmd_repl(config.as_deref()),
        Some(Commands::Ask { questions, export }) => cmd_ask(questions, export.as_deref()),
        Some(Commands::Inspect { path }) => cmd_inspect(path),
    }
}

fn cmd_repl(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut engine = ThoughtEngine::new();
    tracing::info!("session {} started", engine.session_id());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut engine, &config, stdin.lock(), &mut stdout)?;

    tracing::info!(
        "session {} ended after {} records",
        engine.session_id(),
        engine.trace().len()
    );
    Ok(())
}

fn cmd_ask(questions: &[String], export: Option<&Path>) -> Result<()> {
    let mut engine = ThoughtEngine::new();
    let mut stdout = io::stdout();

    for question in questions {
        match engine.ask(question) {
            Ok(result) => repl::print_answer(&mut stdout, &result)?,
            Err(e) => {
                tracing::debug!("rejected {question:?}: {e}");
                writeln!(stdout, "error: {e}")?;
            }
        }
    }

    if let Some(path) = export {
        let summary = export_all(&engine, path)
            .with_context(|| format!("failed to export to {}", path.display()))?;
        println!(
            "exported {} records to {}",
            summary.record_count,
            summary.destination.display()
        );
    }
    Ok(())
}

fn cmd_inspect(path: &Path) -> Result<()> {
    let doc = load_export(path).with_context(|| format!("failed to read {}", path.display()))?;

    println!("session:   {}", doc.session.session_id);
    println!("started:   {}", doc.session.started_at);
    println!("exported:  {}", doc.session.exported_at);
    println!("records:   {}", doc.session.record_count);
    println!("depth:     {}", doc.session.cognitive_depth);
    for (i, record) in doc.records.iter().enumerate() {
        println!(
            "[{}] {} depth={} {}",
            i + 1,
            record.id,
            record.depth,
            record.question
        );
    }
    Ok(())
}
