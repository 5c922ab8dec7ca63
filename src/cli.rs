//! CLI command dispatch — thin layer over the library's `parse` function.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use scene_release_parser::parse;

#[derive(Parser)]
#[command(
    name = "scene-release-parser",
    about = "Parse media release names into structured metadata",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a filename or directory name and print the result as YAML.
    Parse {
        /// The release name to parse.
        input: String,
    },
}

pub fn run(args: Cli) -> Result<()> {
    match args.command {
        Command::Parse { input } => run_parse(&input),
    }
}

fn run_parse(input: &str) -> Result<()> {
    info!(input, "parsing release name");
    let info = parse(input);
    let rendered = serde_yaml::to_string(&info).context("serializing parse result as YAML")?;
    print!("{rendered}");
    Ok(())
}
