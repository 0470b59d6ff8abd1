//! Synthetic webhook generator for hookseed.
//!
//! This crate provides the [`EventGenerator`], which produces Stripe-shaped
//! event bodies and wraps them into [`RequestLogRecord`]s. All randomness
//! flows through an injected RNG, so a seeded generator with a fixed
//! reference time is fully deterministic.
//!
//! # Architecture
//!
//! ```text
//!   SamplingPlan (kinds + status weights)
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │   EventGenerator    │
//! │                     │
//! │  - rng (StdRng)     │
//! │  - reference time   │
//! │  - index            │
//! └──────────┬──────────┘
//!            │ pick_uniform(kind), pick_weighted(status)
//!            ▼
//!   generate_event(kind) ──► build_record(event, status)
//!            │
//!            ▼
//!     RequestLogRecord { body, contentLength, headers, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use hookseed_generator::{EventGenerator, SamplingPlan};
//!
//! let mut generator = EventGenerator::new(42);
//! let event = generator.generate("charge.refunded");
//! assert!(event.object().id().starts_with("ch_"));
//!
//! let plan = SamplingPlan::stripe();
//! let record = generator.next_record(&plan).unwrap();
//! assert_eq!(record.content_length, record.body.len());
//! ```
//!
//! [`RequestLogRecord`]: hookseed_core::RequestLogRecord

pub mod event;
pub mod generator;
pub mod generators;
pub mod request;

// Re-exports for convenience
pub use event::generate_event;
pub use generator::{EventGenerator, GeneratorError, RecordIterator, SamplingPlan};
pub use generators::sampling::{pick_uniform, pick_weighted};
pub use generators::status::derive_status;
pub use request::build_record;
