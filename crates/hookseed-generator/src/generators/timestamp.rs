//! Timestamp value generators.
//!
//! All generators are relative to a caller-supplied reference time.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const DAYS_PER_YEAR: i64 = 365;

/// Generate a timestamp within the last `days` days.
pub fn generate_recent<R: Rng>(rng: &mut R, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - random_offset(rng, days * MILLIS_PER_DAY)
}

/// Generate a timestamp within the last `years` years.
pub fn generate_past<R: Rng>(rng: &mut R, now: DateTime<Utc>, years: i64) -> DateTime<Utc> {
    now - random_offset(rng, years * DAYS_PER_YEAR * MILLIS_PER_DAY)
}

/// Generate a timestamp within the next `years` years.
pub fn generate_future<R: Rng>(rng: &mut R, now: DateTime<Utc>, years: i64) -> DateTime<Utc> {
    now + random_offset(rng, years * DAYS_PER_YEAR * MILLIS_PER_DAY)
}

/// Unix seconds with millisecond precision, as Stripe-style payloads carry them.
pub fn unix_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / 1000.0
}

/// A random offset in `1..=span_millis` milliseconds.
fn random_offset<R: Rng>(rng: &mut R, span_millis: i64) -> Duration {
    if span_millis <= 1 {
        return Duration::milliseconds(span_millis.max(0));
    }
    Duration::milliseconds(rng.random_range(1..=span_millis))
}
