//! Stripe-shaped event bodies.

use crate::kind::Family;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// API version stamped on every generated event.
pub const API_VERSION: &str = "2023-10-16";

/// A synthetic webhook event, serialized as the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticEvent {
    /// `evt_` followed by 24 alphanumeric characters.
    pub id: String,
    /// Always `"event"`.
    pub object: String,
    pub api_version: String,
    /// Unix seconds with millisecond precision.
    pub created: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub livemode: bool,
    pub data: EventData,
}

impl SyntheticEvent {
    /// The nested payload object.
    pub fn object(&self) -> &EventObject {
        &self.data.object
    }

    /// Family of this event's kind.
    pub fn family(&self) -> Family {
        Family::classify(&self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub object: EventObject,
}

/// Family-specific payload.
///
/// Variants are tried in declaration order when deserializing, so shapes
/// with more required fields come first and [`GenericObject`] comes last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventObject {
    Charge(ChargeObject),
    Invoice(InvoiceObject),
    CheckoutSession(CheckoutSessionObject),
    Subscription(SubscriptionObject),
    Customer(CustomerObject),
    PaymentIntent(PaymentIntentObject),
    Generic(GenericObject),
}

impl EventObject {
    pub fn id(&self) -> &str {
        match self {
            EventObject::Charge(o) => &o.id,
            EventObject::Invoice(o) => &o.id,
            EventObject::CheckoutSession(o) => &o.id,
            EventObject::Subscription(o) => &o.id,
            EventObject::Customer(o) => &o.id,
            EventObject::PaymentIntent(o) => &o.id,
            EventObject::Generic(o) => &o.id,
        }
    }

    /// The `status` field, if this payload carries one.
    pub fn status(&self) -> Option<Status> {
        match self {
            EventObject::Charge(o) => Some(o.status),
            EventObject::Invoice(o) => Some(o.status),
            EventObject::CheckoutSession(o) => Some(o.status),
            EventObject::Subscription(o) => Some(o.status),
            EventObject::PaymentIntent(o) => Some(o.status),
            EventObject::Customer(_) | EventObject::Generic(_) => None,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            EventObject::Charge(_) => Family::Charge,
            EventObject::Invoice(_) => Family::Invoice,
            EventObject::CheckoutSession(_) => Family::CheckoutSession,
            EventObject::Subscription(_) => Family::Subscription,
            EventObject::Customer(_) => Family::Customer,
            EventObject::PaymentIntent(_) => Family::PaymentIntent,
            EventObject::Generic(_) => Family::Generic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeObject {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub customer: String,
    pub status: Status,
    pub receipt_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentObject {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub customer: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceObject {
    pub id: String,
    pub customer: String,
    pub amount_due: i64,
    pub currency: String,
    pub status: Status,
    pub hosted_invoice_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerObject {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionObject {
    pub id: String,
    pub customer: String,
    pub status: Status,
    pub current_period_start: f64,
    pub current_period_end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionObject {
    pub id: String,
    pub customer: String,
    pub amount_total: i64,
    pub currency: String,
    pub status: Status,
    pub payment_status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericObject {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with(kind: &str, object: EventObject) -> SyntheticEvent {
        SyntheticEvent {
            id: "evt_123".to_string(),
            object: "event".to_string(),
            api_version: API_VERSION.to_string(),
            created: 1_700_000_000.5,
            kind: kind.to_string(),
            livemode: false,
            data: EventData { object },
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let event = event_with(
            "payout.paid",
            EventObject::Generic(GenericObject {
                id: "abc".to_string(),
            }),
        );
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "payout.paid");
        assert_eq!(value["object"], "event");
        assert_eq!(value["api_version"], "2023-10-16");
        assert_eq!(value["data"]["object"], serde_json::json!({ "id": "abc" }));
    }

    #[test]
    fn test_untagged_payloads_parse_back_to_their_family() {
        let payment_intent = event_with(
            "payment_intent.canceled",
            EventObject::PaymentIntent(PaymentIntentObject {
                id: "pi_1".to_string(),
                amount: 1200,
                currency: "usd".to_string(),
                customer: "cus_1".to_string(),
                status: Status::Canceled,
            }),
        );
        let customer = event_with(
            "customer.created",
            EventObject::Customer(CustomerObject {
                id: "cus_1".to_string(),
                email: "a@example.com".to_string(),
                name: "Ada Lovelace".to_string(),
                created: 1_690_000_000.0,
            }),
        );

        for event in [payment_intent, customer] {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: SyntheticEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.object().family(), event.family());
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_object_accessors() {
        let object = EventObject::Subscription(SubscriptionObject {
            id: "sub_1".to_string(),
            customer: "cus_1".to_string(),
            status: Status::Active,
            current_period_start: 1.0,
            current_period_end: 2.0,
        });
        assert_eq!(object.id(), "sub_1");
        assert_eq!(object.status(), Some(Status::Active));
        assert_eq!(object.family(), Family::Subscription);
    }
}
