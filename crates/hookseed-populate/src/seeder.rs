//! Batch seeder: generate, replace, summarize.

use crate::error::SeedError;
use crate::histogram::EventHistogram;
use crate::store::RecordStore;
use hookseed_core::{RequestLogRecord, DEFAULT_RECORD_KIND};
use hookseed_generator::{EventGenerator, SamplingPlan};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a seed run.
#[derive(Debug, Clone, Default)]
pub struct SeedMetrics {
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent in the store.
    pub persist_duration: Duration,
}

impl SeedMetrics {
    /// Calculate records per second for `records` records.
    pub fn records_per_second(&self, records: u64) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            records as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Outcome of one seed run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Number of records generated.
    pub records_generated: u64,
    /// Number of records the store reported as written (0 for dry runs).
    pub records_inserted: u64,
    /// Event kinds across the batch.
    pub histogram: EventHistogram,
    pub metrics: SeedMetrics,
    pub dry_run: bool,
}

/// Seeder that fills a record store with one freshly generated batch.
pub struct Seeder<S> {
    store: S,
    generator: EventGenerator,
    plan: SamplingPlan,
    record_kind: String,
}

impl<S: RecordStore> Seeder<S> {
    /// Create a seeder using the Stripe sampling plan and the default record kind.
    pub fn new(store: S, generator: EventGenerator) -> Self {
        Self {
            store,
            generator,
            plan: SamplingPlan::stripe(),
            record_kind: DEFAULT_RECORD_KIND.to_string(),
        }
    }

    pub fn with_plan(mut self, plan: SamplingPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn with_record_kind(mut self, record_kind: impl Into<String>) -> Self {
        self.record_kind = record_kind.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn record_kind(&self) -> &str {
        &self.record_kind
    }

    /// Generate `count` records without touching the store.
    pub fn generate_batch(&mut self, count: u64) -> Result<Vec<RequestLogRecord>, SeedError> {
        let records = self
            .generator
            .records(&self.plan, count)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Generate `count` records and replace the store's contents with them.
    ///
    /// Generation finishes before the store is touched. Any store failure
    /// aborts the run; there is no retry and no partial result.
    pub async fn seed_batch(&mut self, count: u64) -> Result<BatchResult, SeedError> {
        let start_time = Instant::now();
        let mut metrics = SeedMetrics::default();

        info!(
            "Seeding {} '{}' records into {} store",
            count,
            self.record_kind,
            self.store.name()
        );

        let gen_start = Instant::now();
        let records = self.generate_batch(count)?;
        metrics.generation_duration = gen_start.elapsed();
        debug!(
            "Generated {} records in {:?}",
            records.len(),
            metrics.generation_duration
        );

        let persist_start = Instant::now();
        let inserted = self
            .store
            .replace_all(&self.record_kind, &records)
            .await
            .map_err(|e| SeedError::store(self.store.name(), e))?;
        metrics.persist_duration = persist_start.elapsed();

        let histogram = EventHistogram::from_records(&records)?;
        metrics.total_duration = start_time.elapsed();

        info!(
            "Seed complete: {} records in {:?} ({:.2} records/sec)",
            inserted,
            metrics.total_duration,
            metrics.records_per_second(inserted)
        );

        Ok(BatchResult {
            records_generated: records.len() as u64,
            records_inserted: inserted,
            histogram,
            metrics,
            dry_run: false,
        })
    }

    /// Generate `count` records and summarize them, leaving the store untouched.
    pub fn seed_dry_run(&mut self, count: u64) -> Result<BatchResult, SeedError> {
        let start_time = Instant::now();

        info!(
            "[DRY-RUN] Generating {} '{}' records without writing them",
            count, self.record_kind
        );

        let records = self.generate_batch(count)?;
        let histogram = EventHistogram::from_records(&records)?;
        let elapsed = start_time.elapsed();

        Ok(BatchResult {
            records_generated: records.len() as u64,
            records_inserted: 0,
            histogram,
            metrics: SeedMetrics {
                total_duration: elapsed,
                generation_duration: elapsed,
                persist_duration: Duration::ZERO,
            },
            dry_run: true,
        })
    }
}
