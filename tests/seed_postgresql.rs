//! PostgreSQL seeding integration test.
//!
//! Needs a reachable server in `DATABASE_URL`; run with `cargo test -- --ignored`.

use hookseed::{run_seed, SeedStore};
use hookseed_populate::{CommonSeedArgs, RecordStore};
use hookseed_populate_postgresql::{PostgreSQLSeedArgs, PostgreSQLStore};

const TABLE: &str = "hookseed_it_webhooks";

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn test_postgresql_seed_replaces_table() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")?;

    let args = || SeedStore::PostgreSQL {
        args: PostgreSQLSeedArgs {
            database_url: database_url.clone(),
            batch_size: 10,
            create_table: true,
            common: CommonSeedArgs {
                seed: Some(42),
                record_kind: TABLE.to_string(),
                ..CommonSeedArgs::default()
            },
        },
    };

    let first = run_seed(args()).await?;
    assert_eq!(first.records_inserted, 55);

    let second = run_seed(args()).await?;
    assert_eq!(second.records_inserted, 55);

    let store = PostgreSQLStore::new(&database_url).await?;
    assert_eq!(store.count(TABLE).await?, 55);

    store.drop_table(TABLE).await?;
    Ok(())
}
