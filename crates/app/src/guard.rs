//! Ingress guard — shared-secret bearer check for writes.
//!
//! This is a static shared secret, not a token protocol: there is no
//! expiry, no replay protection and no rate limiting.

use std::fmt;

use dashpush_domain::error::DashError;

/// Compares an `Authorization` header value against `Bearer <secret>`.
#[derive(Clone)]
pub struct IngressGuard {
    expected: String,
}

impl IngressGuard {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            expected: format!("Bearer {secret}"),
        }
    }

    /// Accept the credential only if it matches exactly (case-sensitive,
    /// no trimming).
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Unauthorized`] when the credential is absent or
    /// differs from the expected value.
    pub fn check(&self, credential: Option<&str>) -> Result<(), DashError> {
        match credential {
            Some(value) if value == self.expected => Ok(()),
            _ => Err(DashError::Unauthorized),
        }
    }
}

impl fmt::Debug for IngressGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngressGuard")
            .field("expected", &"Bearer ***")
            .finish()
    }
}
