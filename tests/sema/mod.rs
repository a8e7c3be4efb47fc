//! Semantic analysis tests
//!
//! - End-to-end GRANT/REVOKE scenarios
//! - Analysis invariants (ordering, all-or-nothing, re-entry)
//! - Parallel analysis over a shared catalog

mod tests_concurrent_analysis;
mod tests_grant_invariants;
