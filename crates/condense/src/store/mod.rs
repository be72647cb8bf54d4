//! Summary record persistence
pub mod summary_store;

pub use summary_store::{SqliteSummaryStore, SummaryStore};
