//! headergen — insert author/email/date headers into C, C++, Python and Java sources.
//!
//! Each file is loaded into an in-memory document and handed to the header
//! generator, exactly as an editor would hand over its open buffer:
//!
//! - no header yet → a first-time header is inserted at the top
//! - header present and `allow_rev` set → a dated revision block is appended,
//!   with a comment taken from `--comment` or read from stdin
//!
//! Settings come from `--config`, `$HEADERGEN_CONFIG` or
//! `<config dir>/headergen/settings.json`.

mod files;
mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use headergen_core::config::{self, Config, JsonSettings};
use headergen_core::{Buffer, HeaderGenerator, Outcome};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HEADERGEN_LOG";

#[derive(Parser)]
#[command(
    name = "headergen",
    about = "Insert or revise author/email/date comment headers in source files"
)]
struct Cli {
    /// Files to process (glob patterns and directories supported)
    #[arg(required = true)]
    files: Vec<String>,

    /// Settings file (JSON object)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Override the `author` setting
    #[arg(long)]
    author: Option<String>,

    /// Override the `email` setting
    #[arg(long)]
    email: Option<String>,

    /// Override the `date_format` setting (strftime pattern)
    #[arg(long)]
    date_format: Option<String>,

    /// Revision comment; skips the stdin prompt
    #[arg(short = 'm', long)]
    comment: Option<String>,

    /// Print the resulting documents to stdout instead of writing them back
    #[arg(long)]
    dry_run: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(&cli)?;
    let generator = HeaderGenerator::new(Config::load(&settings));

    let paths = files::expand(&cli.files)?;
    let stdin = io::stdin();
    let mut answers = prompt::Answers::new(cli.comment.clone(), stdin.lock());

    for path in &paths {
        process_file(&generator, path, &mut answers, cli.dry_run)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Resolve the settings file and apply command-line overrides.
fn load_settings(cli: &Cli) -> Result<JsonSettings> {
    let path = cli.config.clone().or_else(config::default_settings_path);
    let mut settings = match path {
        Some(path) => JsonSettings::from_path(&path)?,
        None => {
            tracing::debug!("no settings file, using defaults");
            JsonSettings::default()
        }
    };

    if let Some(ref author) = cli.author {
        settings.set("author", author.as_str());
    }
    if let Some(ref email) = cli.email {
        settings.set("email", email.as_str());
    }
    if let Some(ref format) = cli.date_format {
        settings.set("date_format", format.as_str());
    }
    Ok(settings)
}

/// Run one invocation against `path` and write the result back if it changed.
fn process_file<R: io::BufRead>(
    generator: &HeaderGenerator,
    path: &Path,
    answers: &mut prompt::Answers<R>,
    dry_run: bool,
) -> Result<()> {
    let original = if path.exists() {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let mut buffer = Buffer::new(Some(path.to_path_buf()), original.clone());
    if let Outcome::AwaitingComment(pending) = generator.run(&mut buffer) {
        let answer = answers
            .answer(path, pending.request())
            .context("failed to read revision comment")?;
        pending.resume(&mut buffer, answer.as_deref());
    }

    for message in buffer.messages() {
        eprintln!("{}: {}", path.display(), message);
    }

    let text = buffer.into_text();
    if dry_run {
        print!("{}", text);
    } else if text != original {
        fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
