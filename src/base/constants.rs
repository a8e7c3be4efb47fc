//! Domain constants shared by the analyzer.

/// Keyspace reserved for the Redis-compatible API tables.
///
/// Permissions can never be granted or revoked on it.
pub const SYSTEM_REDIS_KEYSPACE: &str = "system_redis";

/// Root of the data resource hierarchy (`data`, `data/ks`, `data/ks/table`).
pub const DATA_RESOURCE_ROOT: &str = "data";

/// Root of the role resource hierarchy (`roles`, `roles/name`).
pub const ROLES_RESOURCE_ROOT: &str = "roles";

/// Separator between the parts of a qualified name as written.
pub const NAME_SEPARATOR: char = '.';
