//! Data structures produced while decoding a combo path.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syntax::{FileType, Filter};

/// Kind of module group, listed in the fixed order used for short-name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
  /// Core library modules.
  Core,
  /// Gallery modules whose identifiers carry the gallery prefix.
  Gallery,
  /// Application modules sharing a root directory.
  Root,
  /// Application modules addressed by a plain path.
  Path,
}

impl GroupKind {
  /// Canonical kinds in registry order.
  pub const ALL: [GroupKind; 4] = [
    GroupKind::Core,
    GroupKind::Gallery,
    GroupKind::Root,
    GroupKind::Path,
  ];

  /// Canonical name of the kind.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Core => "core",
      Self::Gallery => "gallery",
      Self::Root => "root",
      Self::Path => "path",
    }
  }
}

impl fmt::Display for GroupKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Incoming combo request as handed over by the host router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComboRequest {
  /// Path segment, starting with `/`.
  pub path: String,
  /// Query parameters; carried along but not consulted by the decoder.
  #[serde(default)]
  pub query: BTreeMap<String, String>,
}

impl ComboRequest {
  /// Build a request for `path` without query parameters.
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      query: BTreeMap::new(),
    }
  }
}

/// One decoded module group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodedGroup {
  /// Kind of group that produced this record.
  pub name: GroupKind,
  /// Version, build or root path of the group. Empty for bare paths.
  pub version: String,
  /// Module names in request order.
  pub modules: Vec<String>,
}

/// Fully decoded combo path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecodeResult {
  /// Groups in the order they appeared in the path.
  pub groups: Vec<DecodedGroup>,
  /// Build filter, resolved for `file_type`.
  pub filter: Filter,
  /// Requested file type.
  #[serde(rename = "type")]
  pub file_type: FileType,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_query_defaults_to_empty() {
    let request: ComboRequest =
      serde_json::from_str(r#"{"path": "/core+3.12.0+oop.js"}"#).expect("request should parse");
    assert_eq!(request, ComboRequest::new("/core+3.12.0+oop.js"));
  }

  #[test]
  fn result_serialises_type_field() {
    let result = DecodeResult {
      groups: vec![DecodedGroup {
        name: GroupKind::Core,
        version: "3.12.0".into(),
        modules: vec!["oop".into()],
      }],
      filter: Filter::Debug,
      file_type: FileType::Js,
    };

    let value = serde_json::to_value(&result).expect("result should serialise");
    assert_eq!(
      value,
      serde_json::json!({
        "groups": [{"name": "core", "version": "3.12.0", "modules": ["oop"]}],
        "filter": "debug",
        "type": "js",
      })
    );
  }

  #[test]
  fn kinds_are_listed_in_registry_order() {
    let names: Vec<&str> = GroupKind::ALL.iter().map(|kind| kind.as_str()).collect();
    assert_eq!(names, vec!["core", "gallery", "root", "path"]);
  }
}
