use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The type name handed to [`propose`](crate::NameProposer::propose) was
    /// empty or all-whitespace. Every other input is total and produces a
    /// (possibly empty) candidate list.
    #[error("type name cannot be empty or whitespace")]
    EmptyTypeName,
}
