//! Seed command runner.

use anyhow::Context;
use hookseed_generator::EventGenerator;
use hookseed_populate::{BatchResult, CommonSeedArgs, MemoryStore, RecordStore, Seeder};
use hookseed_populate_jsonl::JsonlStore;
use hookseed_populate_postgresql::PostgreSQLStore;

use super::{mask_connection_password, SeedStore};

/// Run a seed: generate one batch and replace the store's records with it.
pub async fn run_seed(store: SeedStore) -> anyhow::Result<BatchResult> {
    let common = store.common().clone();

    match store {
        SeedStore::PostgreSQL { args } => {
            tracing::info!(
                "Target: PostgreSQL {} (table '{}')",
                mask_connection_password(&args.database_url),
                common.record_kind
            );
            if common.dry_run {
                return dry_run(&common);
            }

            let store = PostgreSQLStore::new(&args.database_url)
                .await
                .context("Failed to connect to PostgreSQL")?
                .with_batch_size(args.batch_size);

            if args.create_table {
                store
                    .ensure_table(&common.record_kind)
                    .await
                    .with_context(|| format!("Failed to create table '{}'", common.record_kind))?;
            }

            seed_into(store, &common).await
        }
        SeedStore::Jsonl { args } => {
            let store = JsonlStore::new(&args.output_dir);
            let path = store
                .path_for(&common.record_kind)
                .context("Unusable --record-kind for the JSONL store")?;
            tracing::info!("Target: JSONL file {}", path.display());
            if common.dry_run {
                return dry_run(&common);
            }

            seed_into(store, &common).await
        }
        SeedStore::Memory { .. } => {
            tracing::info!("Target: in-memory store (records are discarded on exit)");
            if common.dry_run {
                return dry_run(&common);
            }

            seed_into(MemoryStore::new(), &common).await
        }
    }
}

fn generator_for(common: &CommonSeedArgs) -> EventGenerator {
    match common.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            EventGenerator::new(seed)
        }
        None => EventGenerator::from_entropy(),
    }
}

async fn seed_into<S: RecordStore>(store: S, common: &CommonSeedArgs) -> anyhow::Result<BatchResult> {
    let mut seeder =
        Seeder::new(store, generator_for(common)).with_record_kind(common.record_kind.clone());

    seeder
        .seed_batch(common.count)
        .await
        .context("Failed to seed webhooks")
}

fn dry_run(common: &CommonSeedArgs) -> anyhow::Result<BatchResult> {
    let mut seeder =
        Seeder::new(MemoryStore::new(), generator_for(common)).with_record_kind(common.record_kind.clone());

    seeder
        .seed_dry_run(common.count)
        .context("Failed to generate webhooks")
}

/// Human-readable summary printed after a run.
pub fn format_summary(result: &BatchResult) -> String {
    let mut out = if result.dry_run {
        format!(
            "[DRY-RUN] {} webhooks generated, nothing written\n",
            result.records_generated
        )
    } else {
        format!("{} webhooks inserted successfully\n", result.records_inserted)
    };

    out.push_str("\nEvent distribution:\n");
    out.push_str(&result.histogram.to_string());
    out
}
