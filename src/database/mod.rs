mod columns;
pub mod connection;
pub mod games;
pub mod players;
pub mod rank_changes;
pub mod setup;

pub use connection::{DbConn, DbPool, create_memory_pool, create_pool, get_connection};
pub use rank_changes::SqliteTransitionLog;
