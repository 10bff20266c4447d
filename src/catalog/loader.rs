use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use thiserror::Error;

/// Failure reported by the external catalog source. The loader logs and
/// skips the update; nothing downstream ever sees an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to list tables: {0}")]
    TableListing(String),
    #[error("failed to list columns for {table}: {reason}")]
    ColumnListing { table: String, reason: String },
}

/// External supplier of schema metadata: one call lists the tables, one call
/// per table lists its columns. Calls may be slow or fail independently.
pub trait CatalogSource: Send + Sync {
    fn list_tables(&self) -> Result<Vec<String>, CatalogError>;
    fn list_columns(&self, table: &str) -> Result<Vec<String>, CatalogError>;
}

/// A single increment of catalog state, sent as each response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogUpdate {
    Tables(Vec<String>),
    Columns {
        table: String,
        columns: Vec<String>,
    },
}

/// Kicks off the startup population: the table listing first, then one
/// concurrent column request per listed table. Updates land on `sender` in
/// arrival order; the host drains them from its event thread. There are no
/// retries; a failed fetch is logged and skipped.
pub fn spawn_initial_load(source: Arc<dyn CatalogSource>, sender: Sender<CatalogUpdate>) {
    thread::spawn(move || {
        let tables = match source.list_tables() {
            Ok(tables) => tables,
            Err(err) => {
                log::warn!("catalog load skipped: {err}");
                return;
            }
        };
        if sender.send(CatalogUpdate::Tables(tables.clone())).is_err() {
            return;
        }
        for table in tables {
            spawn_column_load(Arc::clone(&source), table, sender.clone());
        }
    });
}

/// Fetches one table's columns on a worker thread and reports the result.
/// Also used on demand after a new data source is registered.
pub fn spawn_column_load(source: Arc<dyn CatalogSource>, table: String, sender: Sender<CatalogUpdate>) {
    thread::spawn(move || match source.list_columns(&table) {
        Ok(columns) => {
            let _ = sender.send(CatalogUpdate::Columns { table, columns });
        }
        Err(err) => log::warn!("column load skipped: {err}"),
    });
}
