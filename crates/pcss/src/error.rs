//! Error types for the atomic CSS registry and token resolution.

use thiserror::Error;

/// Errors that can occur while registering rules or resolving tokens.
///
/// Token resolution is deliberately forgiving: unresolvable values fall
/// through the resolution chain and end up treated as literal CSS, so most
/// lookup paths return `Option` rather than an error. These variants cover
/// the cases where a caller asked for strictness or a host sink failed.
#[derive(Error, Debug)]
pub enum PcssError {
    /// A string did not match the token reference grammar
    /// (`$category.key` or `category.key`).
    #[error("invalid token reference: {0}")]
    InvalidTokenRef(String),

    /// A live style sink refused a rule insertion.
    ///
    /// The registry recovers by appending the rule as text, so this error
    /// surfaces to callers only through sink implementations themselves.
    #[error("style sink rejected rule at index {index}: {reason}")]
    SinkRejected { index: usize, reason: String },
}
