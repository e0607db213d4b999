use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Resolver error: {0}")]
    Resolver(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
