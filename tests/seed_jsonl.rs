//! JSONL seeding integration test.
//!
//! Runs the `seed jsonl` path end to end:
//! 1. Seed a temp directory with a fixed seed
//! 2. Read the file back and check the records against the summary
//! 3. Seed again and check the file was replaced, not appended to

use chrono::{TimeZone, Utc};
use hookseed::{format_summary, run_seed, SeedStore};
use hookseed_core::{STRIPE_EVENT_KINDS, WEBHOOK_PATHNAME};
use hookseed_generator::EventGenerator;
use hookseed_populate::{CommonSeedArgs, EventHistogram, RecordStore, Seeder};
use hookseed_populate_jsonl::{JsonlSeedArgs, JsonlStore};
use tempfile::TempDir;

const SEED: u64 = 42;

fn jsonl_args(dir: &TempDir) -> SeedStore {
    SeedStore::Jsonl {
        args: JsonlSeedArgs {
            output_dir: dir.path().to_path_buf(),
            common: CommonSeedArgs {
                seed: Some(SEED),
                ..CommonSeedArgs::default()
            },
        },
    }
}

#[tokio::test]
async fn test_jsonl_seed_default_batch() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("hookseed=info")
        .try_init()
        .ok();

    let temp_dir = TempDir::new()?;
    let result = run_seed(jsonl_args(&temp_dir)).await?;

    assert_eq!(result.records_inserted, 55);
    assert_eq!(result.histogram.total(), 55);

    let store = JsonlStore::new(temp_dir.path());
    let records = store.read_all("webhooks").await?;
    assert_eq!(records.len(), 55);

    for record in &records {
        assert_eq!(record.method, "POST");
        assert_eq!(record.pathname, WEBHOOK_PATHNAME);
        assert!([200, 400, 500].contains(&record.status_code));
        assert_eq!(record.content_length, record.body.len());

        let body: serde_json::Value = serde_json::from_str(&record.body)?;
        let kind = body["type"].as_str().unwrap();
        assert!(STRIPE_EVENT_KINDS.contains(&kind));
    }

    // The histogram printed to the user matches what landed on disk.
    assert_eq!(EventHistogram::from_records(&records)?, result.histogram);
    assert!(format_summary(&result).starts_with("55 webhooks inserted"));

    Ok(())
}

#[tokio::test]
async fn test_jsonl_seed_replaces_previous_batch() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    run_seed(jsonl_args(&temp_dir)).await?;
    run_seed(jsonl_args(&temp_dir)).await?;

    let store = JsonlStore::new(temp_dir.path());
    assert_eq!(store.count("webhooks").await?, 55);

    Ok(())
}

#[tokio::test]
async fn test_same_seed_and_time_give_identical_files() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    for dir in [&first, &second] {
        let generator = EventGenerator::new(SEED).with_reference_time(now);
        let mut seeder = Seeder::new(JsonlStore::new(dir.path()), generator);
        seeder.seed_batch(20).await?;
    }

    let a = std::fs::read_to_string(first.path().join("webhooks.jsonl"))?;
    let b = std::fs::read_to_string(second.path().join("webhooks.jsonl"))?;
    assert_eq!(a, b);
    assert_eq!(a.lines().count(), 20);

    Ok(())
}
