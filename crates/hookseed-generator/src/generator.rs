//! Main generator for producing synthetic webhook records.

use crate::event::generate_event;
use crate::generators::sampling::{pick_uniform, pick_weighted};
use crate::request::build_record;
use chrono::{DateTime, Utc};
use hookseed_core::{RequestLogRecord, SyntheticEvent, STATUS_CODE_WEIGHTS, STRIPE_EVENT_KINDS};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The sampling plan has no event kinds to choose from
    #[error("Sampling plan has no event kinds")]
    NoEventKinds,

    /// The status code weights are empty or all zero
    #[error("Sampling plan has no usable status code weights")]
    InvalidStatusWeights,

    /// Event body serialization failed
    #[error("Failed to serialize event body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What the generator samples from: event kinds (uniform) and status codes (weighted).
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingPlan {
    kinds: Vec<String>,
    status_weights: Vec<(u32, u16)>,
}

impl SamplingPlan {
    /// Create a plan, rejecting empty kind lists and unusable weights.
    pub fn new(
        kinds: Vec<String>,
        status_weights: Vec<(u32, u16)>,
    ) -> Result<Self, GeneratorError> {
        if kinds.is_empty() {
            return Err(GeneratorError::NoEventKinds);
        }
        if status_weights.iter().all(|(weight, _)| *weight == 0) {
            return Err(GeneratorError::InvalidStatusWeights);
        }
        Ok(Self {
            kinds,
            status_weights,
        })
    }

    /// The 21 Stripe event kinds with the 85/10/5 status split.
    pub fn stripe() -> Self {
        Self {
            kinds: STRIPE_EVENT_KINDS.iter().map(|k| k.to_string()).collect(),
            status_weights: STATUS_CODE_WEIGHTS.to_vec(),
        }
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    pub fn status_weights(&self) -> &[(u32, u16)] {
        &self.status_weights
    }
}

impl Default for SamplingPlan {
    fn default() -> Self {
        Self::stripe()
    }
}

/// Generator that produces synthetic webhook records.
///
/// A generator created with [`EventGenerator::new`] and a fixed reference
/// time produces the same records on every run.
pub struct EventGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// "Now" for every relative timestamp
    now: DateTime<Utc>,
    /// Number of records produced so far
    index: u64,
}

impl EventGenerator {
    /// Create a generator seeded with `seed`, using the current time as reference.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now(),
            index: 0,
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            now: Utc::now(),
            index: 0,
        }
    }

    /// Pin the reference time used for every relative timestamp.
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.now
    }

    /// Get the number of records produced so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate a single event for `kind`. Never fails.
    pub fn generate(&mut self, kind: &str) -> SyntheticEvent {
        generate_event(kind, &mut self.rng, self.now)
    }

    /// Sample one event kind uniformly from `plan`.
    pub fn pick_kind<'a>(&mut self, plan: &'a SamplingPlan) -> Result<&'a str, GeneratorError> {
        pick_uniform(&mut self.rng, plan.kinds())
            .map(String::as_str)
            .ok_or(GeneratorError::NoEventKinds)
    }

    /// Sample a kind and a status code from `plan` and build one record.
    pub fn next_record(&mut self, plan: &SamplingPlan) -> Result<RequestLogRecord, GeneratorError> {
        let kind = self.pick_kind(plan)?;
        let status_code = *pick_weighted(&mut self.rng, plan.status_weights())
            .ok_or(GeneratorError::InvalidStatusWeights)?;

        let event = generate_event(kind, &mut self.rng, self.now);
        let record = build_record(&event, status_code, &mut self.rng, self.now)?;

        self.index += 1;
        Ok(record)
    }

    /// Generate `count` records lazily.
    pub fn records<'a>(&'a mut self, plan: &'a SamplingPlan, count: u64) -> RecordIterator<'a> {
        RecordIterator {
            generator: self,
            plan,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut EventGenerator,
    plan: &'a SamplingPlan,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<RequestLogRecord, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record(self.plan))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
