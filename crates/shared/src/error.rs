use thiserror::Error;

/// Failure reported by a fact source. Consumers are expected to collapse all
/// variants into one user-facing outcome; the variants carry detail for logs.
#[derive(Debug, Error)]
pub enum FactFetchError {
    #[error("fact endpoint returned status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("fact request failed: {0}")]
    Transport(String),
    #[error("invalid fact payload: {0}")]
    InvalidPayload(String),
}
