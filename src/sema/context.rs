//! Semantic context — what analysis may consult about the world.
//!
//! A [`SemContext`] is the per-statement view: the session's current keyspace
//! and a diagnostic collector, over a [`Catalog`] that is shared (read-mostly)
//! between every analysis running at the same time.

use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::diagnostics::DiagnosticCollector;
use super::errors::{ErrorCode, SemanticError};
use crate::base::Span;
use crate::base::constants::SYSTEM_REDIS_KEYSPACE;

/// Catalog lookups performed during analysis.
///
/// Implementations must tolerate concurrent readers; analysis never writes.
pub trait Catalog: Send + Sync {
    /// Whether a role with this exact name has been created.
    fn role_exists(&self, name: &str) -> bool;
}

/// An in-memory catalog of declared roles.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    roles: RwLock<IndexSet<SmolStr, FxBuildHasher>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog declaring the given roles.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let catalog = Self::new();
        {
            let mut set = catalog.roles.write();
            set.extend(roles.into_iter().map(|role| -> SmolStr { role.into() }));
        }
        catalog
    }

    /// Declare a role. Returns `false` if it already existed.
    pub fn create_role(&self, name: impl Into<SmolStr>) -> bool {
        self.roles.write().insert(name.into())
    }

    /// Remove a role. Returns `false` if it did not exist.
    pub fn drop_role(&self, name: &str) -> bool {
        self.roles.write().shift_remove(name)
    }

    /// All declared roles, in creation order.
    pub fn roles(&self) -> Vec<SmolStr> {
        self.roles.read().iter().cloned().collect()
    }
}

impl Catalog for MemoryCatalog {
    fn role_exists(&self, name: &str) -> bool {
        self.roles.read().contains(name)
    }
}

/// Per-statement semantic context.
pub struct SemContext {
    catalog: Arc<dyn Catalog>,
    current_keyspace: Option<SmolStr>,
    diagnostics: DiagnosticCollector,
}

impl SemContext {
    /// Create a context with no current keyspace.
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            current_keyspace: None,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Set the keyspace substituted into unqualified table names.
    pub fn with_current_keyspace(mut self, keyspace: impl Into<SmolStr>) -> Self {
        self.current_keyspace = Some(keyspace.into());
        self
    }

    pub fn current_keyspace(&self) -> Option<&str> {
        self.current_keyspace.as_deref()
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    /// The keyspace no permission may ever target.
    pub fn reserved_keyspace(&self) -> &'static str {
        SYSTEM_REDIS_KEYSPACE
    }

    /// Report an error at `span` and return it for propagation.
    pub fn error(
        &mut self,
        span: Span,
        message: impl Into<String>,
        code: ErrorCode,
    ) -> SemanticError {
        self.report(SemanticError::new(code, message, span))
    }

    /// Record an already-built error and return it for propagation.
    pub fn report(&mut self, error: SemanticError) -> SemanticError {
        tracing::debug!(code = %error.code, span = %error.span, "{}", error.message);
        self.diagnostics.add(error.clone());
        error
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    /// Take all reported errors, leaving the collector empty.
    pub fn take_diagnostics(&mut self) -> Vec<SemanticError> {
        self.diagnostics.take()
    }
}
