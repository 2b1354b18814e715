//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Credential cannot be empty")]
    EmptyCredential,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid temperature: {0} (expected 0.0 to 2.0)")]
    InvalidTemperature(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptyCredential.to_string(),
            "Credential cannot be empty"
        );
        assert_eq!(
            DomainError::InvalidEndpoint("http://localhost".to_string()).to_string(),
            "Invalid endpoint: http://localhost"
        );
    }
}
