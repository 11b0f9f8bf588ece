//! Slugmap CLI - slug lookup indexes for lobbying disclosure records
//!
//! Usage: slugmap <COMMAND>
//!
//! Commands:
//!   build      Build and write <kind>-lookup.json for each entity kind
//!   resolve    Resolve a name or slug to a canonical slug
//!   check      Report unparseable records, alias collisions and odd file names
//!   normalize  Print the slug form of each input

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = slugmap::Config::discover(cli.config.as_deref(), &cwd)?;
    slugmap::logging::init(config.output.verbosity.with_flag_count(cli.verbose));
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Build {
            data_dir,
            kinds,
            dry_run,
        } => commands::build::cmd_build(&config, data_dir, kinds, dry_run, cli.json),
        Commands::Resolve {
            query,
            kind,
            data_dir,
            prebuilt,
        } => commands::resolve::cmd_resolve(&config, &query, kind, data_dir, prebuilt, cli.json),
        Commands::Check {
            data_dir,
            kinds,
            strict,
        } => commands::check::cmd_check(&config, data_dir, kinds, strict, cli.json),
        Commands::Normalize { inputs } => commands::normalize::cmd_normalize(&inputs, cli.json),
    }
}
