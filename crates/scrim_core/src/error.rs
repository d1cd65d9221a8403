//! Error types for the scrim dialog stack

use thiserror::Error;

/// Errors raised by dialog configuration and resource access
///
/// Both variants indicate programmer error rather than runtime conditions,
/// so callers hit them as panics at the offending call site instead of
/// receiving them through a `Result` chain.
#[derive(Error, Debug)]
pub enum DialogError {
    /// A one-of parameter pair was given neither a resource id nor a literal
    #[error("You must specify a resource ID or literal value.")]
    MissingRequiredInput,

    /// A resource id was not registered with the resource accessor
    #[error("Unknown resource id: {0:#x}")]
    UnknownResource(u32),
}

/// Result type for scrim operations
pub type Result<T> = std::result::Result<T, DialogError>;
