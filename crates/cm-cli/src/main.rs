//! CLI entry point for the converge-migrate generator.
//!
//! Migrates converged packages of a workspace onto the new package
//! conventions, or reports how far the migration has come.
//!
//! # Usage
//!
//! ```bash
//! # Migrate one package
//! converge-migrate --name @fluentui/react-button
//!
//! # Migrate every converged package, showing what would change
//! converge-migrate --all --dry-run
//!
//! # Report migration coverage
//! converge-migrate --stats --root /path/to/workspace
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::{IsTerminal, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use cm_core::{MigrationConfig, MigrationSchema, UserLog};
use cm_generator::{MigrateError, MigrationOutcome, MigrationSummary, Prompt, StatsReport, migrate};
use cm_workspace::{FileChange, FsTree};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Migrates converged packages onto the new workspace conventions.
///
/// Exactly one of `--name`, `--all` or `--stats` selects the mode. With none
/// of them, the package name is asked for interactively.
#[derive(Parser)]
#[command(name = "converge-migrate", version, about, long_about = None)]
struct Cli {
    /// Package to migrate.
    #[arg(short, long)]
    name: Option<String>,

    /// Migrate every converged package.
    #[arg(long)]
    all: bool,

    /// Report migration coverage without changing anything.
    #[arg(long)]
    stats: bool,

    /// Workspace root directory.
    #[arg(short, long, env = "CONVERGE_MIGRATE_ROOT", default_value = ".")]
    root: Utf8PathBuf,

    /// JSON file overriding the workspace conventions.
    #[arg(short, long, env = "CONVERGE_MIGRATE_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Show the changes without writing them.
    #[arg(long)]
    dry_run: bool,

    /// Never prompt for a package name.
    #[arg(long)]
    no_interactive: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// The request as the generator sees it. Mode conflicts are left to the
    /// generator's validation so they are reported the same way everywhere.
    fn schema(&self) -> MigrationSchema {
        MigrationSchema {
            name: self.name.clone(),
            all: self.all,
            stats: self.stats,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `no_color` - Disable ANSI colors in output
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Loads the workspace conventions, falling back to the built-in defaults.
///
/// # Errors
///
/// Returns an error if the config file is missing, malformed or invalid.
fn load_config(path: Option<&Utf8Path>) -> color_eyre::Result<MigrationConfig> {
    match path {
        Some(path) => Ok(MigrationConfig::load(path)?),
        None => {
            debug!("Using default configuration");
            Ok(MigrationConfig::default())
        }
    }
}

/// Reads the package name from the terminal.
struct TerminalPrompt {
    editor: DefaultEditor,
}

impl TerminalPrompt {
    /// Returns a prompt if stdin is an interactive terminal.
    fn open() -> color_eyre::Result<Option<Self>> {
        if !std::io::stdin().is_terminal() {
            debug!("stdin is not a terminal, prompting disabled");
            return Ok(None);
        }
        Ok(Some(Self {
            editor: DefaultEditor::new()?,
        }))
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String, MigrateError> {
        match self.editor.readline(&format!("{question} ")) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                Err(MigrateError::Prompt("no package name given".to_owned()))
            }
            Err(err) => Err(MigrateError::Prompt(err.to_string())),
        }
    }
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// Runs the generator against the workspace.
///
/// Changes are staged in an [`FsTree`] and committed only when the whole run
/// succeeded and this is not a dry run. The user log is flushed last, or
/// right away when the run fails.
///
/// # Errors
///
/// Returns validation, tree and I/O errors.
fn run(cli: &Cli) -> color_eyre::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let mut tree = FsTree::new(&cli.root)?;
    info!(root = %tree.root(), "Opened workspace");

    let mut prompt = if cli.no_interactive {
        None
    } else {
        TerminalPrompt::open()?
    };

    let mut log = UserLog::new();
    let result = migrate(
        &mut tree,
        &config,
        &cli.schema(),
        prompt.as_mut().map(|p| p as &mut dyn Prompt),
        &mut log,
    );

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            log.flush();
            return Err(err.into());
        }
    };

    match outcome {
        MigrationOutcome::Stats(report) => print_stats_report(&report),
        MigrationOutcome::Migrated(summary) => {
            if cli.dry_run {
                print_changes("Dry run, nothing written", &tree.changes());
            } else {
                let changes = tree.commit()?;
                print_changes("Changes", &changes);
            }
            print_summary(&summary);
        }
    }

    log.flush();
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints the coverage counts.
fn print_stats_report(report: &StatsReport) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let stats = &report.stats;

    let _ = writeln!(handle);
    let _ = writeln!(handle, "Migration Status Summary");
    let _ = writeln!(handle, "========================");
    let _ = writeln!(handle);
    let _ = writeln!(handle, "Total projects:     {}", stats.total);
    let _ = writeln!(handle, "  Migrated:         {}", stats.migrated);
    let _ = writeln!(handle, "  Not migrated:     {}", stats.not_migrated);
    let _ = writeln!(handle, "  Not converged:    {} (ignored)", stats.not_converged);
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "Migration progress: {:.1}%",
        stats.progress_percent()
    );
}

/// Prints one line per changed file.
fn print_changes(title: &str, changes: &[FileChange]) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle);
    let _ = writeln!(handle, "{title} ({}):", changes.len());
    for change in changes {
        let _ = writeln!(handle, "  {:<6} {}", change.kind.label(), change.path);
    }
}

/// Prints which projects were migrated and skipped.
fn print_summary(summary: &MigrationSummary) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle);
    let _ = writeln!(handle, "Migrated: {}", summary.migrated.len());
    for name in &summary.migrated {
        let _ = writeln!(handle, "  {name}");
    }
    if !summary.skipped.is_empty() {
        let _ = writeln!(handle, "Skipped (not converged): {}", summary.skipped.len());
        for name in &summary.skipped {
            let _ = writeln!(handle, "  {name}");
        }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Run the generator
    run(&cli)
}
