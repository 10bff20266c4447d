use std::collections::HashMap;
use std::sync::mpsc::Receiver;

pub mod loader;

pub use loader::{spawn_column_load, spawn_initial_load, CatalogError, CatalogSource, CatalogUpdate};

/// The engine's view of known tables and their columns, populated externally.
///
/// Table names keep their registration order and exact spelling as received.
/// A table may be present without a column list while its metadata is still
/// in flight; readers treat that as an empty set until a later merge fills
/// it in. The catalog only grows during a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Vec<String>,
    columns: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            columns: HashMap::new(),
        }
    }

    /// Known table names, in registration order.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Column list for `table`, or `None` while it is unknown or not yet
    /// loaded.
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.columns.get(table).map(|cols| cols.as_slice())
    }

    pub fn is_known_table(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Appends a table name; an already-known name is left untouched.
    pub fn add_table(&mut self, name: &str) {
        if !self.is_known_table(name) {
            self.tables.push(name.to_string());
        }
    }

    /// Attaches a column list to `table`, appending the table first if the
    /// catalog has not seen it yet. Replaces any previously merged list.
    pub fn merge_columns(&mut self, table: &str, columns: Vec<String>) {
        self.add_table(table);
        self.columns.insert(table.to_string(), columns);
    }

    /// Registers a new data source in one step, making the table and its
    /// columns visible to the next generation run.
    pub fn register(&mut self, table: &str, columns: Vec<String>) {
        self.merge_columns(table, columns);
    }

    pub fn apply(&mut self, update: CatalogUpdate) {
        match update {
            CatalogUpdate::Tables(names) => {
                for name in names {
                    self.add_table(&name);
                }
            }
            CatalogUpdate::Columns { table, columns } => {
                log::debug!("catalog: merged {} columns for {table}", columns.len());
                self.merge_columns(&table, columns);
            }
        }
    }

    /// Applies every update currently queued on `receiver` and returns how
    /// many landed. Must be called from the single event thread that owns
    /// this catalog.
    pub fn drain_updates(&mut self, receiver: &Receiver<CatalogUpdate>) -> usize {
        let mut applied = 0;
        while let Ok(update) = receiver.try_recv() {
            self.apply(update);
            applied += 1;
        }
        applied
    }
}
