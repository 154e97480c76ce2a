//! Errors returned by `range_dict`.

use thiserror::Error;

/// Errors produced by lookups and checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// No stored interval matches the requested key.
    #[error("key not found: no stored interval matches the query")]
    KeyNotFound,
    /// The lower bound of an interval is greater than its upper bound.
    #[error("invalid interval: min is greater than max")]
    InvalidInterval,
    /// The lower bound of a slice sorts after its upper bound.
    #[error("invalid slice bounds: lower bound sorts after upper bound")]
    InvalidSliceBounds,
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
