//! Foundation types for the CQL semantic analyzer.
//!
//! This module provides:
//! - [`Position`], [`Span`] - Line/column locations of statement nodes
//! - Domain constants (reserved keyspace names, resource path roots)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod position;

pub use position::{Position, Span};
