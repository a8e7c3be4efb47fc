//! Qualified names — raw as written, resolved after analysis.
//!
//! A [`RawName`] is the identifier parts the parser saw; a [`ResolvedName`]
//! only exists once [`resolve_name`] has checked the shape for an
//! [`ObjectKind`] and filled in anything implied by the session (the current
//! keyspace for unqualified tables).

use std::fmt;

use smol_str::SmolStr;
use tracing::trace;

use super::context::SemContext;
use super::errors::NameError;
use crate::base::constants::NAME_SEPARATOR;
use crate::core::quote_identifier;

/// The kind of schema object a name must denote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Keyspace,
    Table,
    Role,
}

impl ObjectKind {
    /// Most identifier parts a name of this kind may have.
    pub fn max_parts(&self) -> usize {
        match self {
            Self::Keyspace | Self::Role => 1,
            Self::Table => 2,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Keyspace => "keyspace",
            Self::Table => "table",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// A possibly-dotted name exactly as written in the statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawName {
    parts: Vec<SmolStr>,
}

impl RawName {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// The absent name of whole-category resources (`ALL KEYSPACES`, ...).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Split a dotted name. Only meaningful for identifiers without dots.
    pub fn from_dotted(text: &str) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        Self::new(text.split(NAME_SEPARATOR))
    }

    pub fn parts(&self) -> &[SmolStr] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The name as written, parts joined with `.`.
    pub fn written(&self) -> String {
        self.parts.join(".")
    }
}

/// Renders each part quoted where needed, so the output re-parses to the
/// same name.
impl fmt::Display for RawName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{NAME_SEPARATOR}")?;
            }
            f.write_str(&quote_identifier(part))?;
        }
        Ok(())
    }
}

/// A name checked against its object kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedName {
    kind: ObjectKind,
    keyspace: Option<SmolStr>,
    name: SmolStr,
    canonical: String,
}

impl ResolvedName {
    fn new(kind: ObjectKind, keyspace: Option<SmolStr>, name: SmolStr) -> Self {
        let canonical = match &keyspace {
            Some(ks) => format!("{}.{}", quote_identifier(ks), quote_identifier(&name)),
            None => quote_identifier(&name),
        };
        Self {
            kind,
            keyspace,
            name,
            canonical,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The owning keyspace; only tables have one.
    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    /// The object's own (last) name part.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical display form, e.g. `ks1.t1` or `"MyRole"`.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Resolve `name` as an object of kind `expected`.
///
/// Checks the part count, substitutes the current keyspace into unqualified
/// table names, and for roles requires the catalog to declare the role.
/// Keyspace and table existence is not checked here.
pub fn resolve_name(
    name: &RawName,
    expected: ObjectKind,
    ctx: &SemContext,
) -> Result<ResolvedName, NameError> {
    let parts = name.parts();
    if parts.is_empty() {
        return Err(NameError::Empty { kind: expected });
    }
    if parts.iter().any(|p| p.is_empty()) {
        return Err(NameError::EmptyPart {
            kind: expected,
            name: name.written(),
        });
    }

    let resolved = match (expected, parts) {
        (ObjectKind::Role, [role]) => {
            if !ctx.catalog().role_exists(role) {
                return Err(NameError::UndeclaredRole(role.clone()));
            }
            ResolvedName::new(ObjectKind::Role, None, role.clone())
        }
        (ObjectKind::Keyspace, [keyspace]) => {
            ResolvedName::new(ObjectKind::Keyspace, None, keyspace.clone())
        }
        (ObjectKind::Table, [table]) => {
            let keyspace = ctx
                .current_keyspace()
                .ok_or_else(|| NameError::NoKeyspace {
                    table: table.clone(),
                })?;
            ResolvedName::new(ObjectKind::Table, Some(keyspace.into()), table.clone())
        }
        (ObjectKind::Table, [keyspace, table]) => {
            ResolvedName::new(ObjectKind::Table, Some(keyspace.clone()), table.clone())
        }
        _ => {
            return Err(NameError::TooManyParts {
                kind: expected,
                name: name.written(),
                max: expected.max_parts(),
                found: parts.len(),
            });
        }
    };

    trace!(
        "[RESOLVE_NAME] {} '{}' -> {}",
        expected,
        name,
        resolved.canonical()
    );
    Ok(resolved)
}
