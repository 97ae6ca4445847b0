//! wikidex CLI — wiki navigation index generator.
//!
//! Scans a directory of Markdown wiki pages and writes a `_Sidebar.md`
//! navigation index of page titles and heading outlines.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
