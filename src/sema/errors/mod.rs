//! Semantic error handling for permission statements
//!
//! This module provides:
//! - Categorized error codes surfaced to the client
//! - The located [`SemanticError`] every failed analysis produces
//! - Resolver-local [`NameError`]s, located once they reach the statement

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{NameError, SemanticError};
