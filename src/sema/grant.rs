//! GRANT/REVOKE permission statements and their analysis.
//!
//! A [`GrantStatement`] is built by the parser with raw fields only. Calling
//! [`GrantStatement::analyze`] runs, in order:
//!
//! 1. permission lookup (`SYNTAX_ERROR` on an unknown keyword),
//! 2. role-name resolution (always, every statement targets a role),
//! 3. resource validation for the declared [`ResourceKind`].
//!
//! The first failure rejects the statement. On success the statement holds an
//! [`AnalyzedGrant`] in which every semantic field is set.

use std::fmt;

use rayon::prelude::*;
use smol_str::SmolStr;
use tracing::trace;

use super::context::SemContext;
use super::errors::{ErrorCode, SemanticError};
use super::name::{ObjectKind, RawName, ResolvedName};
use super::permission::PermissionKind;
use super::resource::{ResolvedResource, ResourceKind, resolve};
use crate::base::Span;

/// Whether the statement adds or removes a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionAction {
    Grant,
    Revoke,
}

impl PermissionAction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Grant => "GRANT",
            Self::Revoke => "REVOKE",
        }
    }

    /// Preposition introducing the role (`TO` / `FROM`).
    pub fn role_preposition(&self) -> &'static str {
        match self {
            Self::Grant => "TO",
            Self::Revoke => "FROM",
        }
    }
}

/// A GRANT or REVOKE statement node.
#[derive(Debug, Clone)]
pub struct GrantStatement {
    action: PermissionAction,
    permission_token: SmolStr,
    resource_kind: ResourceKind,
    resource_name: RawName,
    role_name: RawName,
    span: Span,
    /// `None` until analyzed; afterwards the terminal outcome.
    outcome: Option<Result<AnalyzedGrant, SemanticError>>,
}

impl GrantStatement {
    pub fn new(
        action: PermissionAction,
        permission_token: impl Into<SmolStr>,
        resource_kind: ResourceKind,
        resource_name: RawName,
        role_name: RawName,
        span: Span,
    ) -> Self {
        Self {
            action,
            permission_token: permission_token.into(),
            resource_kind,
            resource_name,
            role_name,
            span,
            outcome: None,
        }
    }

    /// `GRANT <permission> ON <resource> TO <role>`
    pub fn grant(
        permission_token: impl Into<SmolStr>,
        resource_kind: ResourceKind,
        resource_name: RawName,
        role_name: RawName,
        span: Span,
    ) -> Self {
        Self::new(
            PermissionAction::Grant,
            permission_token,
            resource_kind,
            resource_name,
            role_name,
            span,
        )
    }

    /// `REVOKE <permission> ON <resource> FROM <role>`
    pub fn revoke(
        permission_token: impl Into<SmolStr>,
        resource_kind: ResourceKind,
        resource_name: RawName,
        role_name: RawName,
        span: Span,
    ) -> Self {
        Self::new(
            PermissionAction::Revoke,
            permission_token,
            resource_kind,
            resource_name,
            role_name,
            span,
        )
    }

    pub fn action(&self) -> PermissionAction {
        self.action
    }

    pub fn permission_token(&self) -> &str {
        &self.permission_token
    }

    pub fn resource_kind(&self) -> ResourceKind {
        self.resource_kind
    }

    pub fn resource_name(&self) -> &RawName {
        &self.resource_name
    }

    pub fn role_name(&self) -> &RawName {
        &self.role_name
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether `analyze` has run, successfully or not.
    pub fn is_analyzed(&self) -> bool {
        self.outcome.is_some()
    }

    /// The analysis result, if analysis succeeded.
    pub fn analyzed(&self) -> Option<&AnalyzedGrant> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    /// The error that rejected the statement, if analysis failed.
    pub fn rejection(&self) -> Option<&SemanticError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err())
    }

    /// Analyze the statement.
    ///
    /// Analysis runs once. Calling this again returns the stored outcome
    /// without consulting `ctx`: the same [`AnalyzedGrant`], or the same
    /// error (which is not reported a second time).
    pub fn analyze(&mut self, ctx: &mut SemContext) -> Result<&AnalyzedGrant, SemanticError> {
        let outcome = match self.outcome.take() {
            Some(previous) => {
                trace!("[ANALYZE] {} already analyzed, reusing outcome", self.span);
                previous
            }
            None => self.run_analysis(ctx),
        };
        self.outcome.insert(outcome).as_ref().map_err(Clone::clone)
    }

    fn run_analysis(&self, ctx: &mut SemContext) -> Result<AnalyzedGrant, SemanticError> {
        let permission = PermissionKind::lookup(&self.permission_token).ok_or_else(|| {
            ctx.error(
                self.span,
                format!("Unknown Permission '{}'", self.permission_token),
                ErrorCode::SyntaxError,
            )
        })?;

        let role = resolve(&self.role_name, ObjectKind::Role, self.span, ctx)?;

        let resource = self
            .resource_kind
            .validate(&self.resource_name, self.span, ctx)?;

        let analyzed = AnalyzedGrant {
            action: self.action,
            permission,
            resource,
            role,
            span: self.span,
        };
        analyzed.trace_result();
        Ok(analyzed)
    }
}

impl fmt::Display for GrantStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ON {}",
            self.action.keyword(),
            self.permission_token.to_uppercase(),
            self.resource_kind
        )?;
        if self.resource_kind.is_named() {
            write!(f, " {}", self.resource_name)?;
        }
        write!(f, " {} {}", self.action.role_preposition(), self.role_name)
    }
}

/// A fully analyzed permission statement, ready for execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalyzedGrant {
    action: PermissionAction,
    permission: PermissionKind,
    resource: ResolvedResource,
    role: ResolvedName,
    span: Span,
}

impl AnalyzedGrant {
    pub fn action(&self) -> PermissionAction {
        self.action
    }

    pub fn permission(&self) -> PermissionKind {
        self.permission
    }

    pub fn resource(&self) -> &ResolvedResource {
        &self.resource
    }

    pub fn role(&self) -> &ResolvedName {
        &self.role
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Path of the resource in the permission store (`data/ks1/t1`, ...).
    pub fn canonical_resource(&self) -> String {
        self.resource.canonical_resource()
    }

    fn trace_result(&self) {
        let statement = match self.action {
            PermissionAction::Grant => "Grant Permission",
            PermissionAction::Revoke => "Revoke Permission",
        };
        trace!(
            statement,
            location = %self.span,
            permission = %self.permission,
            resource = %self.canonical_resource(),
            role = %self.role,
            "SEMANTIC ANALYSIS RESULT"
        );
    }
}

/// Analyze independent statements in parallel.
///
/// Each statement gets its own context from `make_context`; contexts typically
/// share one catalog. Results are returned in input order.
pub fn analyze_all<F>(
    statements: &mut [GrantStatement],
    make_context: F,
) -> Vec<Result<AnalyzedGrant, SemanticError>>
where
    F: Fn() -> SemContext + Sync + Send,
{
    statements
        .par_iter_mut()
        .map(|statement| {
            let mut ctx = make_context();
            statement.analyze(&mut ctx).cloned()
        })
        .collect()
}
