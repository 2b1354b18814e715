//! Credential value object

use crate::core::error::DomainError;

/// Secret token authorizing calls to the hosted model (Value Object)
///
/// Always non-empty. The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Create a credential, rejecting empty or whitespace-only values
    pub fn new(secret: impl Into<String>) -> Result<Self, DomainError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self { secret })
    }

    /// Try to create a credential, returning None if invalid
    pub fn try_new(secret: impl Into<String>) -> Option<Self> {
        Self::new(secret).ok()
    }

    /// Expose the secret for building the authorization header
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
