//! Resource kinds and the per-kind validation applied to resource names.

use std::fmt;

use super::context::SemContext;
use super::errors::{ErrorCode, SemanticError};
use super::name::{ObjectKind, RawName, ResolvedName, resolve_name};
use crate::base::Span;
use crate::base::constants::{DATA_RESOURCE_ROOT, ROLES_RESOURCE_ROOT};

/// The resource category named after `ON`, fixed by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Keyspace,
    Table,
    Role,
    AllKeyspaces,
    AllTables,
    AllRoles,
}

impl ResourceKind {
    /// Whether the resource is followed by a name.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Keyspace | Self::Table | Self::Role)
    }

    /// Keywords as written in a statement.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Keyspace => "KEYSPACE",
            Self::Table => "TABLE",
            Self::Role => "ROLE",
            Self::AllKeyspaces => "ALL KEYSPACES",
            Self::AllTables => "ALL TABLES",
            Self::AllRoles => "ALL ROLES",
        }
    }

    /// Validate the resource name for this kind.
    ///
    /// Keyspaces are checked against the reserved name and for shape only;
    /// keyspace and table existence is left to execution. Role resources are
    /// resolved against the catalog. Whole-category kinds have no name to
    /// check. Errors are reported to `ctx` at `span`.
    pub fn validate(
        &self,
        name: &RawName,
        span: Span,
        ctx: &mut SemContext,
    ) -> Result<ResolvedResource, SemanticError> {
        match self {
            Self::Keyspace => {
                let reserved = ctx.reserved_keyspace();
                if name.written() == reserved {
                    return Err(ctx.error(
                        span,
                        format!("{} is a reserved keyspace name", reserved),
                        ErrorCode::InvalidArguments,
                    ));
                }
                resolve(name, ObjectKind::Keyspace, span, ctx).map(ResolvedResource::Keyspace)
            }
            Self::Table => resolve(name, ObjectKind::Table, span, ctx).map(ResolvedResource::Table),
            Self::Role => resolve(name, ObjectKind::Role, span, ctx).map(ResolvedResource::Role),
            Self::AllKeyspaces => Ok(ResolvedResource::AllKeyspaces),
            Self::AllTables => Ok(ResolvedResource::AllTables),
            Self::AllRoles => Ok(ResolvedResource::AllRoles),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Resolve a name, reporting failure at the statement's span.
pub(crate) fn resolve(
    name: &RawName,
    kind: ObjectKind,
    span: Span,
    ctx: &mut SemContext,
) -> Result<ResolvedName, SemanticError> {
    resolve_name(name, kind, ctx).map_err(|err| ctx.report(err.at(span)))
}

/// A validated resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedResource {
    Keyspace(ResolvedName),
    Table(ResolvedName),
    Role(ResolvedName),
    AllKeyspaces,
    AllTables,
    AllRoles,
}

impl ResolvedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Keyspace(_) => ResourceKind::Keyspace,
            Self::Table(_) => ResourceKind::Table,
            Self::Role(_) => ResourceKind::Role,
            Self::AllKeyspaces => ResourceKind::AllKeyspaces,
            Self::AllTables => ResourceKind::AllTables,
            Self::AllRoles => ResourceKind::AllRoles,
        }
    }

    /// The resolved name, if the resource has one.
    pub fn name(&self) -> Option<&ResolvedName> {
        match self {
            Self::Keyspace(name) | Self::Table(name) | Self::Role(name) => Some(name),
            Self::AllKeyspaces | Self::AllTables | Self::AllRoles => None,
        }
    }

    /// Canonical name (`ks1.t1`) or the category keyword (`ALL KEYSPACES`).
    pub fn display_name(&self) -> String {
        match self.name() {
            Some(name) => name.canonical().to_string(),
            None => self.kind().keyword().to_string(),
        }
    }

    /// Path of the resource in the permission store.
    ///
    /// `data`, `data/<ks>`, `data/<ks>/<table>`, `roles`, `roles/<role>`.
    /// `ALL TABLES` covers the whole data tree, the same as `ALL KEYSPACES`.
    pub fn canonical_resource(&self) -> String {
        match self {
            Self::AllKeyspaces | Self::AllTables => DATA_RESOURCE_ROOT.to_string(),
            Self::Keyspace(ks) => format!("{}/{}", DATA_RESOURCE_ROOT, ks.name()),
            Self::Table(table) => format!(
                "{}/{}/{}",
                DATA_RESOURCE_ROOT,
                table.keyspace().unwrap_or_default(),
                table.name()
            ),
            Self::AllRoles => ROLES_RESOURCE_ROOT.to_string(),
            Self::Role(role) => format!("{}/{}", ROLES_RESOURCE_ROOT, role.name()),
        }
    }
}

impl fmt::Display for ResolvedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
