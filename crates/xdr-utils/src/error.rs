//! Error types for port type parsing.

use thiserror::Error;

/// Errors returned by the strict parsing APIs.
///
/// [`crate::build_filter`] never returns these; it logs and skips instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unsupported port type '{name}', it should be one of {supported:?}")]
    UnsupportedPortType {
        /// The rejected token as supplied by the caller.
        name: String,
        /// Lower-case names of all supported port types.
        supported: Vec<&'static str>,
    },

    #[error("filter '{0}' does not start with 'port_type__in__'")]
    MissingPrefix(String),

    #[error("unknown port type code: {0}")]
    UnknownCode(String),
}
