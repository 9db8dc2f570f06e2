pub mod error;
pub mod snapshot;
pub mod sqlite;
pub mod store;

pub use error::StoreError;
pub use snapshot::SnapshotCache;
pub use sqlite::SqliteStore;
pub use store::TradeStore;
