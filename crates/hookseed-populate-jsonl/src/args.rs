//! CLI argument definitions for the JSONL store.

use clap::Args;
use hookseed_populate::CommonSeedArgs;
use std::path::PathBuf;

/// JSONL-specific seed arguments.
#[derive(Args, Clone, Debug)]
pub struct JsonlSeedArgs {
    /// Output directory for JSONL files (one file per record kind)
    #[arg(long, short = 'o', env = "HOOKSEED_OUTPUT_DIR", default_value = "seed-data")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}
