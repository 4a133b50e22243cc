//! Embedded storage layer

pub mod models;
pub mod storage;

pub use models::{Drink, DrinkCreate, DrinkSummary, DrinkUpdate, Ingredient};
pub use storage::{DrinkStorage, StorageError, StorageResult};
