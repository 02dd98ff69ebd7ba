use crate::common::error::GopinError;

/// Result alias used across the crate.
pub type GopinResult<T> = Result<T, GopinError>;
