//! Errors surfaced while decoding a combo path.

use thiserror::Error;

/// Reasons a combo path cannot be decoded.
///
/// Every variant aborts the whole decode; no partially decoded groups are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  /// The trailing pseudo-extension is missing or not a supported type.
  #[error("Encountered an invalid type while decoding: {found}")]
  InvalidType {
    /// Token found where the type was expected.
    found: String,
  },
  /// A named group does not resolve to any registered group kind.
  #[error("Unrecognized module group {name}")]
  UnrecognizedGroupName {
    /// Name token as it appeared in the path.
    name: String,
  },
  /// A group segment splits into an unsupported number of parts.
  #[error("Module group has unexpected format")]
  MalformedGroupToken {
    /// Offending group segment.
    segment: String,
    /// Number of parts found after splitting on the sub-delimiter.
    parts: usize,
  },
  /// The path lacks its leading separator while strict decoding is enabled.
  #[error("Path must start with '/': {path}")]
  MissingLeadingSlash {
    /// Path as received.
    path: String,
  },
}
