pub mod history;
pub mod models;

pub use history::{HistoryFilter, filter_history};
pub use models::*;
