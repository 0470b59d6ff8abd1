//! Event kinds and the payload families they map to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The Stripe event kinds sampled by the seeder.
pub const STRIPE_EVENT_KINDS: [&str; 21] = [
    "charge.succeeded",
    "charge.failed",
    "charge.refunded",
    "payment_intent.succeeded",
    "payment_intent.payment_failed",
    "payment_intent.canceled",
    "invoice.paid",
    "invoice.payment_failed",
    "invoice.created",
    "customer.created",
    "customer.updated",
    "customer.deleted",
    "customer.subscription.created",
    "customer.subscription.updated",
    "customer.subscription.deleted",
    "checkout.session.completed",
    "checkout.session.expired",
    "payment_method.attached",
    "payment_method.detached",
    "payout.paid",
    "payout.failed",
];

/// Payload shape shared by a group of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Charge,
    PaymentIntent,
    Invoice,
    Customer,
    Subscription,
    CheckoutSession,
    /// Any kind without a dedicated payload shape.
    Generic,
}

impl Family {
    /// Classify an event kind by its prefix.
    ///
    /// `customer.subscription.*` is checked before `customer.*`.
    /// Unknown kinds never fail, they classify as [`Family::Generic`].
    pub fn classify(kind: &str) -> Self {
        if kind.starts_with("charge.") {
            Family::Charge
        } else if kind.starts_with("payment_intent.") {
            Family::PaymentIntent
        } else if kind.starts_with("invoice.") {
            Family::Invoice
        } else if kind.starts_with("customer.subscription.") {
            Family::Subscription
        } else if kind.starts_with("customer.") {
            Family::Customer
        } else if kind.starts_with("checkout.session.") {
            Family::CheckoutSession
        } else {
            Family::Generic
        }
    }

    /// Prefix of the object id for this family, `None` for generic payloads.
    pub fn id_prefix(&self) -> Option<&'static str> {
        match self {
            Family::Charge => Some("ch_"),
            Family::PaymentIntent => Some("pi_"),
            Family::Invoice => Some("in_"),
            Family::Customer => Some("cus_"),
            Family::Subscription => Some("sub_"),
            Family::CheckoutSession => Some("cs_"),
            Family::Generic => None,
        }
    }

    /// Number of random alphanumeric characters after the prefix.
    pub fn id_length(&self) -> usize {
        match self {
            Family::Customer => 14,
            _ => 24,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Charge => "charge",
            Family::PaymentIntent => "payment_intent",
            Family::Invoice => "invoice",
            Family::Customer => "customer",
            Family::Subscription => "subscription",
            Family::CheckoutSession => "checkout_session",
            Family::Generic => "generic",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_kinds() {
        assert_eq!(Family::classify("charge.refunded"), Family::Charge);
        assert_eq!(
            Family::classify("payment_intent.payment_failed"),
            Family::PaymentIntent
        );
        assert_eq!(Family::classify("invoice.created"), Family::Invoice);
        assert_eq!(Family::classify("customer.deleted"), Family::Customer);
        assert_eq!(
            Family::classify("customer.subscription.deleted"),
            Family::Subscription
        );
        assert_eq!(
            Family::classify("checkout.session.expired"),
            Family::CheckoutSession
        );
    }

    #[test]
    fn test_classify_generic_kinds() {
        assert_eq!(Family::classify("payment_method.attached"), Family::Generic);
        assert_eq!(Family::classify("payout.paid"), Family::Generic);
        assert_eq!(Family::classify(""), Family::Generic);
        assert_eq!(Family::classify("charge"), Family::Generic);
    }

    #[test]
    fn test_every_kind_is_unique() {
        let mut kinds = STRIPE_EVENT_KINDS.to_vec();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), STRIPE_EVENT_KINDS.len());
    }

    #[test]
    fn test_id_prefixes() {
        assert_eq!(Family::Charge.id_prefix(), Some("ch_"));
        assert_eq!(Family::Customer.id_prefix(), Some("cus_"));
        assert_eq!(Family::Generic.id_prefix(), None);
        assert_eq!(Family::Customer.id_length(), 14);
        assert_eq!(Family::Invoice.id_length(), 24);
    }
}
