//! Status values carried by event payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A status string as it appears in a Stripe object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Succeeded,
    Failed,
    RequiresPaymentMethod,
    Canceled,
    Paid,
    Open,
    Active,
    Complete,
    Expired,
    Unpaid,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Succeeded => "succeeded",
            Status::Failed => "failed",
            Status::RequiresPaymentMethod => "requires_payment_method",
            Status::Canceled => "canceled",
            Status::Paid => "paid",
            Status::Open => "open",
            Status::Active => "active",
            Status::Complete => "complete",
            Status::Expired => "expired",
            Status::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status fields derived from an event kind.
///
/// `payment_status` is only set for checkout sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStatus {
    pub status: Status,
    pub payment_status: Option<Status>,
}

impl DerivedStatus {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            payment_status: None,
        }
    }

    pub fn with_payment_status(status: Status, payment_status: Status) -> Self {
        Self {
            status,
            payment_status: Some(payment_status),
        }
    }
}
