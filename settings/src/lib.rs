mod sqlite_store;
mod store;

pub use sqlite_store::SqliteSettingsStore;
pub use store::{SettingsStore, StoreError};
