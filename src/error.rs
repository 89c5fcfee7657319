use thiserror::Error;

pub type PaginateResult<T> = std::result::Result<T, PaginateError>;

#[derive(Debug, Error)]
/// The unified error type for paginated reads.
pub enum PaginateError {
    /// A generic underlying error from the mongodb driver functions.
    #[error("Database driver error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Raised when an aggregation result document does not decode into the
    /// requested model type.
    #[error("Error decoding document: {0}")]
    Decode(#[from] bson::de::Error),

    /// Pagination setup error (missing database handle, etc).
    #[error("Pagination config error: {0}")]
    Config(String),
}
