//! Self-organizing maps: competitive learning on a fixed 2-D grid of prototype vectors.

pub mod calc;
pub mod cli;
pub mod data;
pub mod map;
pub mod proc;

use core::fmt;

/// Error type for failed parsing of `String`s to `enum`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError(String);

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ParseEnumError {}

/// Error type for invalid SOM configuration: zero-sized grid, bad iteration
/// count, or a dimension mismatch between map and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SomError(String);

impl fmt::Display for SomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for SomError {}
