//! Error types shared by the query builders, the search client, and the
//! service layer.

/// Errors that can occur while building queries or executing searches.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request parameter failed validation before any query was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A single-entity lookup matched no indexed documents.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    /// The search request failed in transit (connection, timeout, body read).
    #[error("search request failed")]
    RequestFailed(#[source] reqwest::Error),
    /// The search engine answered with a non-success status and a body snippet.
    #[error("search engine returned status {status}")]
    HttpStatus { status: u16, body: String },
    /// The engine response did not match the expected shape for the query
    /// that was sent.
    #[error("failed to decode search response")]
    Decode(#[source] serde_json::Error),
}
