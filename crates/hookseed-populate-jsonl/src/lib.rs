//! JSON Lines record store for hookseed.
//!
//! Each record kind maps to `<output_dir>/<record_kind>.jsonl`, one record
//! per line in the camelCase wire shape.
//!
//! # Example
//!
//! ```ignore
//! use hookseed_populate::Seeder;
//! use hookseed_populate_jsonl::JsonlStore;
//!
//! let store = JsonlStore::new("seed-data");
//! let result = Seeder::new(store, generator).seed_batch(55).await?;
//! println!("Wrote {} records", result.records_inserted);
//! ```

pub mod args;
pub mod error;
pub mod store;

pub use args::JsonlSeedArgs;
pub use error::JsonlStoreError;
pub use store::JsonlStore;
