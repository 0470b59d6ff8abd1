//! Common CLI argument definitions shared by all seed subcommands.

use clap::Args;
use hookseed_core::DEFAULT_RECORD_KIND;

/// Number of records generated when `--count` is not given.
pub const DEFAULT_BATCH_COUNT: u64 = 55;

/// Common arguments shared by all seed subcommands.
///
/// This struct is flattened into every store-specific argument set
/// (PostgreSQL, JSONL, memory) so the CLI stays consistent.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Number of webhook records to generate
    #[arg(long, default_value_t = DEFAULT_BATCH_COUNT)]
    pub count: u64,

    /// Random seed for deterministic generation (omit for a fresh dataset each run)
    #[arg(long, env = "HOOKSEED_SEED")]
    pub seed: Option<u64>,

    /// Collection the records are written to (table name or file stem)
    #[arg(long, default_value = DEFAULT_RECORD_KIND)]
    pub record_kind: String,

    /// Dry-run mode: generate and summarize without touching the store
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for CommonSeedArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_BATCH_COUNT,
            seed: None,
            record_kind: DEFAULT_RECORD_KIND.to_string(),
            dry_run: false,
        }
    }
}
