//! Text utilities for CQL identifiers.
//!
//! Unquoted CQL identifiers are case-folded to lower case by the parser, and
//! reserved keywords cannot appear unquoted at all. An identifier only renders
//! bare when it is ASCII, already lower case, and not reserved.

/// Keywords the CQL grammar refuses as unquoted identifiers.
const RESERVED_KEYWORDS: &[&str] = &[
    "add", "allow", "alter", "and", "apply", "asc", "authorize", "batch", "begin", "by",
    "columnfamily", "create", "delete", "desc", "describe", "drop", "entries", "execute",
    "from", "full", "grant", "if", "in", "index", "infinity", "insert", "into", "keyspace",
    "limit", "modify", "nan", "norecursive", "not", "null", "of", "on", "or", "order",
    "primary", "rename", "replace", "revoke", "schema", "select", "set", "table", "to",
    "token", "truncate", "unlogged", "update", "use", "using", "where", "with",
];

/// Whether `word` is a reserved keyword (compared in folded, lower-case form).
pub fn is_reserved_keyword(word: &str) -> bool {
    RESERVED_KEYWORDS.contains(&word)
}

/// Check if `name` can be written without double quotes.
///
/// Unquoted identifiers match `[a-zA-Z][a-zA-Z0-9_]*`; since the parser folds
/// them, only the lower-case spelling survives a round trip.
///
/// # Example
/// ```
/// use cql_sema::core::text_utils::is_plain_identifier;
///
/// assert!(is_plain_identifier("ks1"));
/// assert!(!is_plain_identifier("MyTable"));
/// assert!(!is_plain_identifier("with space"));
/// assert!(!is_plain_identifier("select"));
/// ```
pub fn is_plain_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        && !is_reserved_keyword(name)
}

/// Render an identifier the way it must be written to denote the same name.
///
/// Plain identifiers are returned as-is; anything else is wrapped in double
/// quotes with embedded quotes doubled.
pub fn quote_identifier(name: &str) -> String {
    if is_plain_identifier(name) {
        return name.to_string();
    }
    format!("\"{}\"", name.replace('"', "\"\""))
}
