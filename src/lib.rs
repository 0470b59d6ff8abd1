//! hookseed: seed a request log with realistic synthetic Stripe webhooks.
//!
//! The binary wires the workspace crates together:
//!
//! - `hookseed-core`: event and request-log record types
//! - `hookseed-generator`: deterministic event and record generation
//! - `hookseed-populate`: the seeder and the `RecordStore` trait
//! - `hookseed-populate-postgresql` / `hookseed-populate-jsonl`: store backends
//! - `hookseed-code-view`: highlighted rendering of event bodies
//!
//! See [`seed`] for the `seed` subcommands and [`preview`] for single-event output.

pub mod preview;
pub mod seed;

pub use preview::{run_preview, PreviewArgs, PreviewFormat};
pub use seed::{format_summary, run_seed, SeedStore};
