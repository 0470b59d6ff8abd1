//! Synthetic event generation.

use crate::generators::status::derive_status;
use crate::generators::{identifier, internet, numeric, person, timestamp};
use chrono::{DateTime, Utc};
use hookseed_core::{
    ChargeObject, CheckoutSessionObject, CustomerObject, DerivedStatus, EventData, EventObject,
    Family, GenericObject, InvoiceObject, PaymentIntentObject, SubscriptionObject, SyntheticEvent,
    API_VERSION,
};
use rand::Rng;

/// Events are created within this many days before the reference time.
pub const EVENT_RECENT_DAYS: i64 = 30;

const CURRENCY: &str = "usd";

/// Generate a synthetic event for `kind`.
///
/// Never fails: kinds outside every known family get a payload holding
/// only an `id`.
pub fn generate_event<R: Rng>(kind: &str, rng: &mut R, now: DateTime<Utc>) -> SyntheticEvent {
    let id = identifier::generate_event_id(rng);
    let created = timestamp::unix_seconds(timestamp::generate_recent(rng, now, EVENT_RECENT_DAYS));
    let livemode = rng.random_bool(0.5);
    let object = generate_object(kind, Family::classify(kind), rng, now);

    SyntheticEvent {
        id,
        object: "event".to_string(),
        api_version: API_VERSION.to_string(),
        created,
        kind: kind.to_string(),
        livemode,
        data: EventData { object },
    }
}

/// Generate the family payload for `kind`.
///
/// Status fields come from [`derive_status`]; a family without a status
/// (or a mismatched `family` argument) falls back to the id-only payload.
pub fn generate_object<R: Rng>(
    kind: &str,
    family: Family,
    rng: &mut R,
    now: DateTime<Utc>,
) -> EventObject {
    let id = identifier::generate_object_id(rng, family);

    match (family, derive_status(kind, family)) {
        (Family::Charge, Some(DerivedStatus { status, .. })) => EventObject::Charge(ChargeObject {
            id,
            amount: numeric::generate_amount(rng),
            currency: CURRENCY.to_string(),
            customer: identifier::generate_customer_ref(rng),
            status,
            receipt_email: internet::generate_email(rng),
        }),

        (Family::PaymentIntent, Some(DerivedStatus { status, .. })) => {
            EventObject::PaymentIntent(PaymentIntentObject {
                id,
                amount: numeric::generate_amount(rng),
                currency: CURRENCY.to_string(),
                customer: identifier::generate_customer_ref(rng),
                status,
            })
        }

        (Family::Invoice, Some(DerivedStatus { status, .. })) => {
            EventObject::Invoice(InvoiceObject {
                id,
                customer: identifier::generate_customer_ref(rng),
                amount_due: numeric::generate_amount(rng),
                currency: CURRENCY.to_string(),
                status,
                hosted_invoice_url: internet::generate_url(rng),
            })
        }

        (Family::Customer, _) => EventObject::Customer(CustomerObject {
            id,
            email: internet::generate_email(rng),
            name: person::generate_full_name(rng),
            created: timestamp::unix_seconds(timestamp::generate_past(rng, now, 1)),
        }),

        (Family::Subscription, Some(DerivedStatus { status, .. })) => {
            EventObject::Subscription(SubscriptionObject {
                id,
                customer: identifier::generate_customer_ref(rng),
                status,
                current_period_start: timestamp::unix_seconds(timestamp::generate_recent(
                    rng, now, 1,
                )),
                current_period_end: timestamp::unix_seconds(timestamp::generate_future(
                    rng, now, 1,
                )),
            })
        }

        (
            Family::CheckoutSession,
            Some(DerivedStatus {
                status,
                payment_status: Some(payment_status),
            }),
        ) => EventObject::CheckoutSession(CheckoutSessionObject {
            id,
            customer: identifier::generate_customer_ref(rng),
            amount_total: numeric::generate_amount(rng),
            currency: CURRENCY.to_string(),
            status,
            payment_status,
        }),

        _ => EventObject::Generic(GenericObject { id }),
    }
}
