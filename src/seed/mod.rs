//! Seed command handlers.
//!
//! Each store backend is a `seed` subcommand carrying its own arguments,
//! all of which flatten [`CommonSeedArgs`].

pub mod logging;
pub mod run;

pub use logging::mask_connection_password;
pub use run::{format_summary, run_seed};

use clap::Subcommand;
use hookseed_populate::CommonSeedArgs;
use hookseed_populate_jsonl::JsonlSeedArgs;
use hookseed_populate_postgresql::PostgreSQLSeedArgs;

/// Where a seed run writes its records.
#[derive(Subcommand, Clone, Debug)]
pub enum SeedStore {
    /// Replace the rows of a PostgreSQL table
    #[command(name = "postgresql")]
    PostgreSQL {
        #[command(flatten)]
        args: PostgreSQLSeedArgs,
    },
    /// Replace the contents of a JSON Lines file
    #[command(name = "jsonl")]
    Jsonl {
        #[command(flatten)]
        args: JsonlSeedArgs,
    },
    /// Generate into process memory and only print the summary
    #[command(name = "memory")]
    Memory {
        #[command(flatten)]
        args: CommonSeedArgs,
    },
}

impl SeedStore {
    pub fn common(&self) -> &CommonSeedArgs {
        match self {
            SeedStore::PostgreSQL { args } => &args.common,
            SeedStore::Jsonl { args } => &args.common,
            SeedStore::Memory { args } => args,
        }
    }
}
