//! SQLite-backed document store.
//!
//! Each collection is a table holding one JSON document per row, in
//! insertion order.

use std::path::Path;

use osm_model::Record;
use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::sink::{RecordSink, SinkReport};

/// Collection used when none is configured.
pub const DEFAULT_COLLECTION: &str = "orangecounty";

/// Document collection that inserts each record as it arrives.
#[derive(Debug)]
pub struct DocumentStore {
    conn: Connection,
    collection: String,
    destination: String,
    inserted: usize,
}

impl DocumentStore {
    /// Opens (or creates) a store file and its collection.
    pub fn open(path: &Path, collection: &str) -> Result<Self> {
        validate_collection(collection)?;
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), collection, "opened document store");
        Self::with_connection(
            conn,
            collection,
            format!("{}#{collection}", path.display()),
        )
    }

    pub fn open_in_memory(collection: &str) -> Result<Self> {
        validate_collection(collection)?;
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, collection, format!(":memory:#{collection}"))
    }

    fn with_connection(conn: Connection, collection: &str, destination: String) -> Result<Self> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{collection}\" (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                doc_id TEXT,
                kind TEXT NOT NULL,
                document TEXT NOT NULL
            );"
        ))?;
        Ok(Self {
            conn,
            collection: collection.to_string(),
            destination,
            inserted: 0,
        })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Number of documents in the collection, including earlier runs.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", self.collection),
            [],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Reads every document back in insertion order.
    pub fn documents(&self) -> Result<Vec<serde_json::Value>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT document FROM \"{}\" ORDER BY seq",
            self.collection
        ))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut documents = Vec::new();
        for row in rows {
            documents.push(serde_json::from_str(&row?)?);
        }
        Ok(documents)
    }
}

impl RecordSink for DocumentStore {
    fn insert(&mut self, record: Record) -> Result<()> {
        let document = serde_json::to_string(&record)?;
        self.conn.execute(
            &format!(
                "INSERT INTO \"{}\" (doc_id, kind, document) VALUES (?1, ?2, ?3)",
                self.collection
            ),
            params![record.id, record.kind.as_str(), document],
        )?;
        self.inserted += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<SinkReport> {
        info!(
            records = self.inserted,
            collection = %self.collection,
            "Inserted records into document store"
        );
        Ok(SinkReport {
            records: self.inserted,
            destination: self.destination.clone(),
        })
    }
}

/// Collection names become table names, so only plain identifiers pass.
fn validate_collection(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(OutputError::InvalidCollection {
            name: name.to_string(),
        })
    }
}
