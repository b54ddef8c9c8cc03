//! Trending search terms.
//!
//! Every non-empty search that returns at least one movie bumps a counter for
//! its term in a [`TrendingStore`]; the most frequent terms are loaded once at
//! startup and shown above the results.

mod error;
mod memory;
mod remote;
mod store;
mod types;
mod worker;

pub use error::TrendingError;
pub use memory::MemoryTrendingStore;
pub use remote::{RemoteTrendingStore, term_document_id};
pub use store::TrendingStore;
pub use types::{MovieSnapshot, SearchHit, TrendingRecord};
pub use worker::{TrendingCommand, TrendingUpdate, spawn};
