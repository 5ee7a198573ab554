//! SQL DDL for initializing the key-value storage.

/// SQLite schema with:
/// - `key` TEXT PRIMARY KEY, so `set` can upsert on conflict
/// - `value` TEXT NOT NULL
/// - `updated_at` RFC3339 timestamp of the last write
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL -- RFC3339
);
"#;
