//! Identifier generators.

use chrono::{DateTime, Utc};
use hookseed_core::Family;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of the `v1` part of a fabricated signature header.
const SIGNATURE_LENGTH: usize = 64;

/// Generate `len` random ASCII letters and digits.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Generate `prefix` followed by `len` alphanumeric characters.
pub fn generate_prefixed_id<R: Rng>(rng: &mut R, prefix: &str, len: usize) -> String {
    let mut id = String::with_capacity(prefix.len() + len);
    id.push_str(prefix);
    id.push_str(&generate_alphanumeric(rng, len));
    id
}

/// Generate an event id (`evt_` + 24).
pub fn generate_event_id<R: Rng>(rng: &mut R) -> String {
    generate_prefixed_id(rng, "evt_", 24)
}

/// Generate a customer reference (`cus_` + 14).
pub fn generate_customer_ref<R: Rng>(rng: &mut R) -> String {
    generate_object_id(rng, Family::Customer)
}

/// Generate the id of a payload object for the given family.
///
/// Generic payloads get a bare alphanumeric id.
pub fn generate_object_id<R: Rng>(rng: &mut R, family: Family) -> String {
    generate_prefixed_id(rng, family.id_prefix().unwrap_or(""), family.id_length())
}

/// Generate a `stripe-signature` header value: `t=<unix millis>,v1=<64 chars>`.
pub fn generate_signature<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    format!(
        "t={},v1={}",
        now.timestamp_millis(),
        generate_alphanumeric(rng, SIGNATURE_LENGTH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_alphanumeric(&mut rng, 24);

        assert_eq!(value.len(), 24);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_object_ids_per_family() {
        let mut rng = StdRng::seed_from_u64(42);

        let charge = generate_object_id(&mut rng, Family::Charge);
        assert!(charge.starts_with("ch_"));
        assert_eq!(charge.len(), 3 + 24);

        let customer = generate_customer_ref(&mut rng);
        assert!(customer.starts_with("cus_"));
        assert_eq!(customer.len(), 4 + 14);

        let generic = generate_object_id(&mut rng, Family::Generic);
        assert_eq!(generic.len(), 24);
    }

    #[test]
    fn test_generate_signature() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let signature = generate_signature(&mut rng, now);

        let (timestamp, v1) = signature.split_once(',').unwrap();
        assert_eq!(timestamp, "t=1700000000123");
        assert!(v1.starts_with("v1="));
        assert_eq!(v1.len(), 3 + 64);
    }

    #[test]
    fn test_deterministic_ids() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(generate_event_id(&mut rng1), generate_event_id(&mut rng2));
    }
}
