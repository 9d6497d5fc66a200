//! Delimiters and the filter table that define the combo path grammar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separates module groups within a path: `core+3.12.0+oop;gallery+...`.
pub const GROUP_DELIMITER: char = ';';
/// Separates the name, version and module list of a single group.
pub const GROUP_SUB_DELIMITER: char = '+';
/// Separates module names inside a group's module list.
pub const MODULE_DELIMITER: char = ',';
/// Separates the trailing filter and type metadata from the last group.
pub const METADATA_DELIMITER: char = '.';
/// Leading separator stripped from the path before decoding.
pub const PATH_SEPARATOR: char = '/';
/// Literal prefix applied to gallery versions and module names.
pub const GALLERY_PREFIX: &str = "gallery-";
/// Short identifier of this decoding dialect.
pub const NAMESPACE: &str = "p";

/// File type requested through the trailing pseudo-extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
  /// JavaScript bundle.
  Js,
  /// Stylesheet bundle.
  Css,
}

/// Build filter applied to the requested modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
  /// Unminified source without debug statements.
  Raw,
  /// Minified build.
  Min,
  /// Unminified build including debug statements.
  Debug,
}

impl Filter {
  /// Filter used when the path does not name a valid one.
  pub const DEFAULT: Filter = Filter::Min;

  /// Token form of the filter as it appears in a path.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Raw => "raw",
      Self::Min => "min",
      Self::Debug => "debug",
    }
  }
}

impl FileType {
  /// Every supported file type.
  pub const ALL: [FileType; 2] = [FileType::Js, FileType::Css];

  /// Token form of the type as it appears in a path.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Js => "js",
      Self::Css => "css",
    }
  }

  /// Filters that may be requested for this type.
  pub fn filters(self) -> &'static [Filter] {
    match self {
      Self::Js => &[Filter::Raw, Filter::Min, Filter::Debug],
      Self::Css => &[Filter::Raw, Filter::Min],
    }
  }

  /// Returns `true` when `filter` is valid for this type.
  pub fn accepts(self, filter: Filter) -> bool {
    self.filters().contains(&filter)
  }

  /// Interpret `token` as a filter, but only when it is valid for this type.
  pub fn filter_for(self, token: &str) -> Option<Filter> {
    token.parse::<Filter>().ok().filter(|filter| self.accepts(*filter))
  }
}

/// Raised when a token is not part of the closed filter or type sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown token '{}'", self.0)
  }
}

impl std::error::Error for UnknownToken {}

impl FromStr for FileType {
  type Err = UnknownToken;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|candidate| candidate.as_str() == value)
      .ok_or_else(|| UnknownToken(value.to_string()))
  }
}

impl FromStr for Filter {
  type Err = UnknownToken;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "raw" => Ok(Self::Raw),
      "min" => Ok(Self::Min),
      "debug" => Ok(Self::Debug),
      other => Err(UnknownToken(other.to_string())),
    }
  }
}

impl fmt::Display for FileType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for Filter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
