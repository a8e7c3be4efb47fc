//! Permission vocabulary — the keywords a GRANT/REVOKE may name.

use std::fmt;

/// The closed set of permissions.
///
/// A value is only ever produced from text by [`PermissionKind::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    All,
    Alter,
    Create,
    Drop,
    Select,
    Modify,
    Authorize,
    Describe,
}

/// Keyword table, matched case-sensitively.
const VOCABULARY: [(&str, PermissionKind); 8] = [
    ("all", PermissionKind::All),
    ("alter", PermissionKind::Alter),
    ("create", PermissionKind::Create),
    ("drop", PermissionKind::Drop),
    ("select", PermissionKind::Select),
    ("modify", PermissionKind::Modify),
    ("authorize", PermissionKind::Authorize),
    ("describe", PermissionKind::Describe),
];

impl PermissionKind {
    /// Every permission, in vocabulary order.
    pub const ALL: [PermissionKind; 8] = [
        Self::All,
        Self::Alter,
        Self::Create,
        Self::Drop,
        Self::Select,
        Self::Modify,
        Self::Authorize,
        Self::Describe,
    ];

    /// Look up a permission keyword.
    ///
    /// The match is exact: the caller is expected to have already folded
    /// unquoted keywords to lower case, so `"SELECT"` is not found.
    pub fn lookup(token: &str) -> Option<Self> {
        VOCABULARY
            .iter()
            .find(|(keyword, _)| *keyword == token)
            .map(|&(_, kind)| kind)
    }

    /// The vocabulary keyword for this permission.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Alter => "alter",
            Self::Create => "create",
            Self::Drop => "drop",
            Self::Select => "select",
            Self::Modify => "modify",
            Self::Authorize => "authorize",
            Self::Describe => "describe",
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword().to_ascii_uppercase())
    }
}
