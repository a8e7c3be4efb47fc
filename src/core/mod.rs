//! Identifier text utilities used when rendering canonical names.

pub mod text_utils;

pub use text_utils::{is_plain_identifier, is_reserved_keyword, quote_identifier};
