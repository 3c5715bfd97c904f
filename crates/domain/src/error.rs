//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`DashError`]
//! via `#[from]` (or an explicit `From` impl for boxed adapter errors).

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    /// The caller did not present the expected bearer credential.
    #[error("unauthorized")]
    Unauthorized,

    /// The write body could not be turned into a snapshot.
    #[error("malformed payload")]
    MalformedPayload(#[from] PayloadError),

    /// Durable storage failed to read or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a pushed payload is rejected before it reaches storage.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The body is not valid JSON.
    #[error("invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// The body is valid JSON but not an object at the top level.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl DashError {
    /// Render the error followed by its whole source chain, joined by `: `.
    ///
    /// Used when the message is reported back to the caller.
    #[must_use]
    pub fn detail(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}
