pub mod handlers;
pub mod models;
pub mod repository;
pub mod resolver;
pub mod service;

pub use models::{H2HRecord, H2HSyncSummary, Tally};
pub use repository::{H2HRepository, InMemoryH2HRepository, PostgresH2HRepository, WriteBatch};
pub use resolver::{AccountResolver, InMemoryAccountResolver, PostgresAccountResolver};
pub use service::H2HService;

/// Largest number of pair documents committed in one atomic batch
pub const DEFAULT_BATCH_CAP: usize = 400;
