//! Core domain concepts shared across the crate.
//!
//! - [`model::Model`]: hosted models the answer generator can target
//! - [`credential::Credential`]: secret token for the hosted API
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod string;
