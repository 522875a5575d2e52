//! Fuzzy Trie - command line entrypoint.
//!
//! Loads a JSON object of `key -> value` entries into a trie and runs one
//! query against it. Results are printed as `path<TAB>value` lines.

use clap::{Parser, Subcommand};
use fuzzy_trie_lib::config::{ConfigLoader, FuzzyTrieAppConfig, LogConfig, ENV_PREFIX};
use fuzzy_trie_lib::data_structures::fuzzy_trie::{FuzzyTrie, FuzzyTrieConfig, SegmenterKind};
use fuzzy_trie_lib::error::{ErrorContext, ErrorReporter, FuzzyError, FuzzyResult, TracingErrorReporter};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

type JsonTrie = FuzzyTrie<Value, SegmenterKind>;

/// Command line arguments for the Fuzzy Trie tool.
#[derive(Parser, Debug)]
#[clap(name = "fuzzy_trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// JSON file holding an object of key/value entries
    #[clap(short, long, value_parser)]
    data: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value stored at exactly KEY
    Get {
        /// Literal key
        key: String,
    },

    /// Print every stored entry
    Walk,

    /// Print the entries along PATTERN, which may end in a wildcard segment
    WalkPath {
        /// Path, optionally ending in `/*` or `prefix*`
        pattern: String,
    },

    /// Delete by key or wildcard pattern, then print what remains
    Delete {
        /// Key, optionally ending in `/*` or `prefix*`
        pattern: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr; stdout carries results.
fn init_logging(log: &LogConfig) -> FuzzyResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| FuzzyError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Build a trie from the JSON object stored at `path`.
fn load_trie(path: &Path, trie_config: FuzzyTrieConfig) -> FuzzyResult<JsonTrie> {
    let contents = std::fs::read_to_string(path)?;
    let entries: Map<String, Value> = serde_json::from_str(&contents)?;

    let mut trie = FuzzyTrie::with_config(trie_config);
    for (key, value) in entries {
        trie.try_put(&key, value)?;
    }
    info!(entries = trie.len(), path = %path.display(), "Loaded trie");
    Ok(trie)
}

fn print_entry(out: &mut impl Write, path: &str, value: &Value) -> std::io::Result<()> {
    writeln!(out, "{path}\t{value}")
}

fn run(command: Command, data: Option<&Path>, app_config: &FuzzyTrieAppConfig) -> FuzzyResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut trie = match &command {
        Command::Validate => {
            info!("Configuration validated successfully");
            return Ok(());
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&FuzzyTrieAppConfig::default())
                .map_err(|e| FuzzyError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;
            info!("Default configuration written to {:?}", output);
            return Ok(());
        }
        _ => {
            let path = data.ok_or_else(|| FuzzyError::Custom("--data is required".to_string()))?;
            load_trie(path, app_config.trie)?
        }
    };

    match command {
        Command::Get { key } => match trie.get(&key) {
            Some(value) => print_entry(&mut out, &key, value)?,
            None => return Err(FuzzyError::Custom(format!("No value stored at '{key}'"))),
        },
        Command::Walk => trie.walk(|path, value| print_entry(&mut out, path, value))?,
        Command::WalkPath { pattern } => {
            trie.walk_path(&pattern, |path, value| print_entry(&mut out, path, value))?
        }
        Command::Delete { pattern } => {
            let found = trie.delete(&pattern);
            info!(pattern = %pattern, found, remaining = trie.len(), "Deleted");
            trie.walk(|path, value| print_entry(&mut out, path, value))?;
        }
        Command::Validate | Command::GenConfig { .. } => {}
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> FuzzyResult<()> {
    let args = <Args as clap::Parser>::parse();
    let reporter = TracingErrorReporter;

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let app_config = match config_loader.load() {
        Ok(app_config) => app_config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            reporter.report(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    init_logging(&app_config.log)?;

    if let Err(e) = run(args.command, args.data.as_deref(), &app_config) {
        let details = args.data.map(|p| p.display().to_string()).unwrap_or_default();
        reporter.report(ErrorContext::new(e, "cli").with_details(details));
        process::exit(1);
    }
    Ok(())
}
