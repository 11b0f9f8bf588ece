use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slugmap::EntityKind;

/// Slugmap - slug lookup indexes for lobbying disclosure records
#[derive(Parser, Debug)]
#[command(name = "slugmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./slugmap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and write <kind>-lookup.json for each entity kind
    Build {
        /// Directory holding clients/, firms/ and lobbyists/
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Entity kinds to build (default: all)
        #[arg(short, long, value_delimiter = ',')]
        kinds: Option<Vec<EntityKind>>,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve a name or slug to a canonical slug
    Resolve {
        /// Display name, legacy slug, or canonical slug
        query: String,

        /// Entity kind to resolve against
        #[arg(short, long, default_value = "clients")]
        kind: EntityKind,

        /// Directory holding clients/, firms/ and lobbyists/
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Use the prebuilt <kind>-lookup.json when present
        #[arg(long)]
        prebuilt: bool,
    },

    /// Report unparseable records, alias collisions and odd file names
    Check {
        /// Directory holding clients/, firms/ and lobbyists/
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Entity kinds to check (default: all)
        #[arg(short, long, value_delimiter = ',')]
        kinds: Option<Vec<EntityKind>>,

        /// Exit non-zero when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Print the slug form of each input
    Normalize {
        /// Strings to normalize
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}
