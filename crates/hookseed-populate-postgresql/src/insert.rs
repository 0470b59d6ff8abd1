//! SQL generation and batched INSERT logic for PostgreSQL.

use crate::error::PostgreSQLStoreError;
use hookseed_core::RequestLogRecord;
use serde_json::{Map, Value};
use tokio_postgres::types::ToSql;
use tokio_postgres::GenericClient;

/// Default number of rows per INSERT statement.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Insert columns, in parameter order. `id` is filled by the table default.
pub const COLUMNS: [&str; 10] = [
    "method",
    "pathname",
    "ip",
    "status_code",
    "content_type",
    "content_length",
    "query_params",
    "headers",
    "body",
    "created_at",
];

/// Largest batch whose parameters fit PostgreSQL's 65535 bind-parameter limit.
pub const MAX_BATCH_SIZE: usize = u16::MAX as usize / COLUMNS.len();

/// Clamp a requested batch size into `1..=MAX_BATCH_SIZE`.
pub fn clamp_batch_size(batch_size: usize) -> usize {
    batch_size.clamp(1, MAX_BATCH_SIZE)
}

/// Quote an identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build a multi-row INSERT statement for `row_count` records.
pub fn generate_insert_sql(table: &str, row_count: usize) -> String {
    let col_count = COLUMNS.len();
    let mut param_idx = 1;

    let placeholders: Vec<String> = (0..row_count)
        .map(|_| {
            let row: Vec<String> = (0..col_count)
                .map(|_| {
                    let p = format!("${param_idx}");
                    param_idx += 1;
                    p
                })
                .collect();
            format!("({})", row.join(", "))
        })
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        quote_ident(table),
        COLUMNS
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

/// Insert a batch of records with a single statement.
pub async fn insert_batch<C: GenericClient>(
    client: &C,
    table: &str,
    records: &[RequestLogRecord],
) -> Result<u64, PostgreSQLStoreError> {
    if records.is_empty() {
        return Ok(0);
    }

    let sql = generate_insert_sql(table, records.len());

    let mut params: Vec<Box<dyn ToSql + Sync + Send>> =
        Vec::with_capacity(records.len() * COLUMNS.len());
    for record in records {
        push_record_params(&mut params, record)?;
    }

    let param_refs: Vec<&(dyn ToSql + Sync)> = params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect();

    let inserted = client.execute(sql.as_str(), &param_refs).await?;
    Ok(inserted)
}

/// Append one record's values in [`COLUMNS`] order.
fn push_record_params(
    params: &mut Vec<Box<dyn ToSql + Sync + Send>>,
    record: &RequestLogRecord,
) -> Result<(), PostgreSQLStoreError> {
    let content_length =
        i32::try_from(record.content_length).map_err(|_| PostgreSQLStoreError::OutOfRange {
            column: "content_length",
            value: record.content_length as u64,
        })?;

    params.push(Box::new(record.method.clone()));
    params.push(Box::new(record.pathname.clone()));
    params.push(Box::new(record.ip.clone()));
    params.push(Box::new(i32::from(record.status_code)));
    params.push(Box::new(record.content_type.clone()));
    params.push(Box::new(content_length));
    params.push(Box::new(string_map_to_json(&record.query_params)));
    params.push(Box::new(string_map_to_json(&record.headers)));
    params.push(Box::new(record.body.clone()));
    params.push(Box::new(record.created_at));
    Ok(())
}

fn string_map_to_json<'a, I>(entries: I) -> Value
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect::<Map<String, Value>>(),
    )
}

/// Generate the CREATE TABLE statement for a record table.
pub fn generate_create_table(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n\
         \x20   \"id\" UUID PRIMARY KEY DEFAULT gen_random_uuid(),\n\
         \x20   \"method\" TEXT NOT NULL,\n\
         \x20   \"pathname\" TEXT NOT NULL,\n\
         \x20   \"ip\" TEXT NOT NULL,\n\
         \x20   \"status_code\" INTEGER NOT NULL,\n\
         \x20   \"content_type\" TEXT,\n\
         \x20   \"content_length\" INTEGER,\n\
         \x20   \"query_params\" JSONB,\n\
         \x20   \"headers\" JSONB,\n\
         \x20   \"body\" TEXT,\n\
         \x20   \"created_at\" TIMESTAMPTZ NOT NULL DEFAULT now()\n\
         )",
        quote_ident(table)
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", quote_ident(table))
}

/// Generate the statement that empties a record table.
pub fn generate_delete_all(table: &str) -> String {
    format!("DELETE FROM {}", quote_ident(table))
}

pub fn generate_count(table: &str) -> String {
    format!("SELECT COUNT(*) FROM {}", quote_ident(table))
}
