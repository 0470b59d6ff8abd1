//! Wrapping events into request log records.

use crate::generator::GeneratorError;
use crate::generators::{identifier, internet, timestamp};
use chrono::{DateTime, Utc};
use hookseed_core::{RequestLogRecord, SyntheticEvent};
use rand::Rng;

/// Records are received within this many days before the reference time.
pub const RECEIVED_RECENT_DAYS: i64 = 30;

/// Serialize `event` and wrap it into a record with fabricated network metadata.
pub fn build_record<R: Rng>(
    event: &SyntheticEvent,
    status_code: u16,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<RequestLogRecord, GeneratorError> {
    let body = serde_json::to_string_pretty(event)?;
    let ip = internet::generate_ip(rng);
    let signature = identifier::generate_signature(rng, now);
    let created_at = timestamp::generate_recent(rng, now, RECEIVED_RECENT_DAYS);

    Ok(RequestLogRecord::new(
        body,
        status_code,
        ip,
        signature,
        created_at,
    ))
}
