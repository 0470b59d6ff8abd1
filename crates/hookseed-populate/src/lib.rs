//! Record stores and the batch seeder for hookseed.
//!
//! This crate provides the pieces shared by every store backend:
//!
//! - [`RecordStore`] - the bulk delete/insert contract a backend implements
//! - [`MemoryStore`] - an in-process store, used for dry runs and tests
//! - [`Seeder`] - generates a batch, replaces the store contents, reports a histogram
//! - [`CommonSeedArgs`] - CLI arguments shared by all `seed` subcommands
//!
//! # Example
//!
//! ```rust
//! use hookseed_generator::EventGenerator;
//! use hookseed_populate::{MemoryStore, Seeder};
//!
//! # tokio_test::block_on(async {
//! let mut seeder = Seeder::new(MemoryStore::new(), EventGenerator::new(42));
//! let result = seeder.seed_batch(55).await.unwrap();
//! assert_eq!(result.records_inserted, 55);
//! assert_eq!(result.histogram.total(), 55);
//! # });
//! ```

pub mod args;
pub mod error;
pub mod histogram;
pub mod memory;
pub mod seeder;
pub mod store;

pub use args::{CommonSeedArgs, DEFAULT_BATCH_COUNT};
pub use error::SeedError;
pub use histogram::EventHistogram;
pub use memory::MemoryStore;
pub use seeder::{BatchResult, SeedMetrics, Seeder};
pub use store::RecordStore;
