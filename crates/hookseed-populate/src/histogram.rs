//! Event kind frequency summary.

use hookseed_core::RequestLogRecord;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Only the field the histogram needs from a record body.
#[derive(Deserialize)]
struct KindProbe {
    #[serde(rename = "type")]
    kind: String,
}

/// Event kind counts, sorted by descending count.
///
/// Kinds with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventHistogram {
    entries: Vec<(String, usize)>,
}

impl EventHistogram {
    /// Count kinds in the order given.
    pub fn from_kinds<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for kind in kinds {
            let kind = kind.as_ref();
            match positions.get(kind) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    positions.insert(kind.to_string(), entries.len());
                    entries.push((kind.to_string(), 1));
                }
            }
        }

        // Stable sort keeps first-appearance order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Count the `type` of each record body.
    pub fn from_records(records: &[RequestLogRecord]) -> Result<Self, serde_json::Error> {
        let kinds = records
            .iter()
            .map(|record| serde_json::from_str::<KindProbe>(&record.body).map(|p| p.kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_kinds(kinds))
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, kind: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, count)| *count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for EventHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, count) in &self.entries {
            writeln!(f, "  {kind}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sorted_by_count_descending() {
        let histogram = EventHistogram::from_kinds([
            "invoice.paid",
            "charge.failed",
            "charge.failed",
            "payout.paid",
            "charge.failed",
            "payout.paid",
        ]);

        assert_eq!(
            histogram.entries(),
            &[
                ("charge.failed".to_string(), 3),
                ("payout.paid".to_string(), 2),
                ("invoice.paid".to_string(), 1),
            ]
        );
        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.len(), 3);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let histogram = EventHistogram::from_kinds(["b", "a", "c", "a", "b", "c"]);
        let kinds: Vec<_> = histogram.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(kinds, ["b", "a", "c"]);
    }

    #[test]
    fn test_display() {
        let histogram = EventHistogram::from_kinds(["x", "y", "y"]);
        assert_eq!(histogram.to_string(), "  y: 2\n  x: 1\n");
    }

    #[test]
    fn test_from_records_reads_body_type() {
        let record = RequestLogRecord::new(
            r#"{"id":"evt_1","type":"checkout.session.expired"}"#.to_string(),
            200,
            "::1".to_string(),
            "t=0,v1=x".to_string(),
            Utc::now(),
        );

        let histogram = EventHistogram::from_records(&[record.clone(), record]).unwrap();
        assert_eq!(histogram.get("checkout.session.expired"), Some(2));
        assert_eq!(histogram.get("charge.failed"), None);
    }

    #[test]
    fn test_from_records_rejects_bodies_without_type() {
        let record = RequestLogRecord::new(
            "{}".to_string(),
            200,
            "::1".to_string(),
            "t=0,v1=x".to_string(),
            Utc::now(),
        );
        assert!(EventHistogram::from_records(&[record]).is_err());
    }

    #[test]
    fn test_empty() {
        let histogram = EventHistogram::from_kinds(Vec::<String>::new());
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.to_string(), "");
    }
}
