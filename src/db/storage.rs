//! redb-based storage for the drinks catalog
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `drinks` | `id: u64` | JSON-serialized `Drink` | Catalog entries |
//! | `meta` | `&str` | `u64` | Id counter |
//!
//! Tables are created eagerly on open so read transactions never see a
//! missing table.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use thiserror::Error;

use super::models::{Drink, Ingredient};
use crate::utils::AppError;

const DRINKS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("drinks");
const META_TABLE: TableDefinition<&str, u64> = TableDefinition::new("meta");

const NEXT_ID_KEY: &str = "next_id";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Drinks catalog backed by redb
#[derive(Clone)]
pub struct DrinkStorage {
    db: Arc<Database>,
}

impl DrinkStorage {
    /// Open (or create) the database at `path` and ensure tables exist.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        {
            txn.open_table(DRINKS_TABLE)?;
            txn.open_table(META_TABLE)?;
        }
        txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// All drinks, ordered by id.
    pub fn list(&self) -> StorageResult<Vec<Drink>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(DRINKS_TABLE)?;

        let mut drinks = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            drinks.push(serde_json::from_slice(value.value())?);
        }
        Ok(drinks)
    }

    pub fn get(&self, id: u64) -> StorageResult<Option<Drink>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(DRINKS_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Insert a new drink under a freshly allocated id.
    pub fn insert(&self, title: String, recipe: Vec<Ingredient>) -> StorageResult<Drink> {
        let txn = self.db.begin_write()?;
        let drink;
        {
            let mut meta = txn.open_table(META_TABLE)?;
            let id = meta.get(NEXT_ID_KEY)?.map(|v| v.value()).unwrap_or(1);
            meta.insert(NEXT_ID_KEY, id + 1)?;

            drink = Drink { id, title, recipe };
            let mut table = txn.open_table(DRINKS_TABLE)?;
            table.insert(id, serde_json::to_vec(&drink)?.as_slice())?;
        }
        txn.commit()?;
        Ok(drink)
    }

    /// Update an existing drink. Returns `None` when the id is unknown.
    pub fn update(
        &self,
        id: u64,
        title: String,
        recipe: Option<Vec<Ingredient>>,
    ) -> StorageResult<Option<Drink>> {
        let txn = self.db.begin_write()?;
        let updated;
        {
            let mut table = txn.open_table(DRINKS_TABLE)?;

            let mut drink: Drink = match table.get(id)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Ok(None),
            };

            drink.title = title;
            if let Some(recipe) = recipe {
                drink.recipe = recipe;
            }

            table.insert(id, serde_json::to_vec(&drink)?.as_slice())?;
            updated = drink;
        }
        txn.commit()?;
        Ok(Some(updated))
    }

    /// Remove a drink. Returns whether an entry existed.
    pub fn delete(&self, id: u64) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed;
        {
            let mut table = txn.open_table(DRINKS_TABLE)?;
            removed = table.remove(id)?.is_some();
        }
        txn.commit()?;
        Ok(removed)
    }
}
