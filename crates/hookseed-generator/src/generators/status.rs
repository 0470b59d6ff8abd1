//! Status derivation from event kinds.
//!
//! Statuses come from literal substring checks on the kind string, not from
//! a per-kind table. `charge.refunded` therefore yields `failed`, and
//! unknown kinds inside a family still get a status.

use hookseed_core::{DerivedStatus, Family, Status};

/// Derive the status fields for `kind` within `family`.
///
/// Returns `None` for families without a status (customers, generic).
pub fn derive_status(kind: &str, family: Family) -> Option<DerivedStatus> {
    match family {
        Family::Charge => Some(DerivedStatus::new(charge_status(kind))),
        Family::PaymentIntent => Some(DerivedStatus::new(payment_intent_status(kind))),
        Family::Invoice => Some(DerivedStatus::new(invoice_status(kind))),
        Family::Subscription => Some(DerivedStatus::new(subscription_status(kind))),
        Family::CheckoutSession => {
            let (status, payment_status) = checkout_session_status(kind);
            Some(DerivedStatus::with_payment_status(status, payment_status))
        }
        Family::Customer | Family::Generic => None,
    }
}

fn charge_status(kind: &str) -> Status {
    if kind.contains("succeeded") {
        Status::Succeeded
    } else {
        Status::Failed
    }
}

fn payment_intent_status(kind: &str) -> Status {
    if kind.contains("succeeded") {
        Status::Succeeded
    } else if kind.contains("failed") {
        Status::RequiresPaymentMethod
    } else {
        Status::Canceled
    }
}

fn invoice_status(kind: &str) -> Status {
    if kind.contains("paid") {
        Status::Paid
    } else {
        Status::Open
    }
}

fn subscription_status(kind: &str) -> Status {
    if kind.contains("deleted") {
        Status::Canceled
    } else {
        Status::Active
    }
}

/// `(status, payment_status)` for a checkout session.
fn checkout_session_status(kind: &str) -> (Status, Status) {
    if kind.contains("completed") {
        (Status::Complete, Status::Paid)
    } else {
        (Status::Expired, Status::Unpaid)
    }
}
