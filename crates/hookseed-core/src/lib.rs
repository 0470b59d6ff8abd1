//! Core types for hookseed.
//!
//! This crate provides the data model shared by the generator and every
//! record store:
//!
//! - [`Family`] - Payload shape an event kind belongs to
//! - [`Status`] / [`DerivedStatus`] - Status fields carried by some payloads
//! - [`SyntheticEvent`] - Stripe-shaped event body
//! - [`RequestLogRecord`] - Simulated inbound HTTP request carrying an event
//!
//! # Architecture
//!
//! ```text
//! hookseed-core (this crate)
//!    │
//!    ├─── hookseed-generator           (builds events and records)
//!    │
//!    ├─── hookseed-populate            (RecordStore trait, Seeder, memory store)
//!    ├─── hookseed-populate-postgresql (PostgreSQL store)
//!    └─── hookseed-populate-jsonl      (JSON Lines store)
//! ```

pub mod event;
pub mod kind;
pub mod record;
pub mod status;

// Re-exports for convenience
pub use event::{
    ChargeObject, CheckoutSessionObject, CustomerObject, EventData, EventObject,
    GenericObject, InvoiceObject, PaymentIntentObject, SubscriptionObject, SyntheticEvent,
    API_VERSION,
};
pub use kind::{Family, STRIPE_EVENT_KINDS};
pub use record::{
    RequestLogRecord, DEFAULT_RECORD_KIND, JSON_CONTENT_TYPE, STATUS_CODE_WEIGHTS,
    STRIPE_USER_AGENT, WEBHOOK_METHOD, WEBHOOK_PATHNAME,
};
pub use status::{DerivedStatus, Status};
