//! Request log records, the shape persisted by every record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const WEBHOOK_METHOD: &str = "POST";
pub const WEBHOOK_PATHNAME: &str = "/api/webhooks/stripe";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const STRIPE_USER_AGENT: &str = "Stripe/1.0 (+https://stripe.com/docs/webhooks)";

/// Store-side collection the seeder writes to by default.
pub const DEFAULT_RECORD_KIND: &str = "webhooks";

/// HTTP status codes and their sampling weights.
pub const STATUS_CODE_WEIGHTS: [(u32, u16); 3] = [(85, 200), (10, 400), (5, 500)];

/// A simulated inbound webhook request.
///
/// Records are built once through [`RequestLogRecord::new`], which keeps
/// `content_length` equal to the byte length of `body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLogRecord {
    pub method: String,
    pub pathname: String,
    pub ip: String,
    pub status_code: u16,
    pub content_type: String,
    pub content_length: usize,
    pub query_params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl RequestLogRecord {
    /// Build a record around a serialized event body.
    pub fn new(
        body: String,
        status_code: u16,
        ip: String,
        signature: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        headers.insert("stripe-signature".to_string(), signature);
        headers.insert("user-agent".to_string(), STRIPE_USER_AGENT.to_string());

        Self {
            method: WEBHOOK_METHOD.to_string(),
            pathname: WEBHOOK_PATHNAME.to_string(),
            ip,
            status_code,
            content_type: JSON_CONTENT_TYPE.to_string(),
            content_length: body.len(),
            query_params: BTreeMap::new(),
            headers,
            body,
            created_at,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_length_counts_bytes() {
        let body = "{\n  \"name\": \"Zoë\"\n}".to_string();
        let record = RequestLogRecord::new(
            body.clone(),
            200,
            "127.0.0.1".to_string(),
            "t=1,v1=abc".to_string(),
            Utc::now(),
        );

        assert_eq!(record.content_length, body.len());
        assert_ne!(record.content_length, body.chars().count());
    }

    #[test]
    fn test_wire_shape() {
        let record = RequestLogRecord::new(
            "{}".to_string(),
            400,
            "10.0.0.1".to_string(),
            "t=1,v1=abc".to_string(),
            Utc::now(),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["method"], "POST");
        assert_eq!(value["pathname"], "/api/webhooks/stripe");
        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["contentType"], "application/json");
        assert_eq!(value["contentLength"], 2);
        assert_eq!(value["queryParams"], serde_json::json!({}));
        assert_eq!(value["headers"]["stripe-signature"], "t=1,v1=abc");
        assert_eq!(value["headers"]["user-agent"], STRIPE_USER_AGENT);
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_status_weights_sum_to_one_hundred() {
        let total: u32 = STATUS_CODE_WEIGHTS.iter().map(|(w, _)| w).sum();
        assert_eq!(total, 100);
    }
}
