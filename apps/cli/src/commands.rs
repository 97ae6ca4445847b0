//! CLI argument definitions, tracing setup, and dispatch.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use wikidex_core::{DEFAULT_HEADING_DEPTH, MAX_HEADING_DEPTH};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// wikidex — generate a wiki navigation index.
#[derive(Parser)]
#[command(
    name = "wikidex",
    version,
    about = "Generate a _Sidebar.md navigation index for a directory of wiki pages.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Directory containing the wiki's Markdown pages.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Deepest heading level to include in the outline (clamped to 6;
    /// level-1 headings are page titles, not outline entries).
    #[arg(default_value_t = DEFAULT_HEADING_DEPTH)]
    pub max_depth: u8,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so the stdout
/// confirmation line stays machine-readable.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "wikidex_core=info,wikidex_cli=info",
        1 => "wikidex_core=debug,wikidex_cli=debug",
        _ => "wikidex_core=trace,wikidex_cli=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run the index build and report the written path.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let max_depth = cli.max_depth.min(MAX_HEADING_DEPTH);

    info!(
        dir = %cli.dir.display(),
        max_depth,
        "building wiki index"
    );

    let path = wikidex_core::write_index(&cli.dir, max_depth)?;
    println!("Wrote {}", path.display());

    Ok(())
}
