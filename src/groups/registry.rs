use std::sync::OnceLock;

use tracing::trace;

use super::decoders::{GalleryDecoder, GroupDecoder, NamedDecoder};
use crate::models::GroupKind;

/// Immutable table mapping canonical group names to their decoders.
///
/// Entries keep a fixed order which doubles as the tie-break for short names: the first
/// canonical name starting with the requested token wins.
pub struct GroupDecoderRegistry {
  entries: Vec<(GroupKind, Box<dyn GroupDecoder>)>,
}

impl GroupDecoderRegistry {
  /// Registry containing the built-in decoders.
  pub fn new() -> Self {
    let entries = GroupKind::ALL
      .into_iter()
      .map(|kind| {
        let decoder: Box<dyn GroupDecoder> = match kind {
          GroupKind::Gallery => Box::new(GalleryDecoder),
          other => Box::new(NamedDecoder(other)),
        };
        (kind, decoder)
      })
      .collect();

    Self { entries }
  }

  /// Registry built from caller-supplied decoders, resolved in the given order.
  pub fn from_entries(entries: Vec<(GroupKind, Box<dyn GroupDecoder>)>) -> Self {
    Self { entries }
  }

  /// Process-wide registry shared by every decode call.
  pub fn global() -> &'static GroupDecoderRegistry {
    static REGISTRY: OnceLock<GroupDecoderRegistry> = OnceLock::new();
    REGISTRY.get_or_init(GroupDecoderRegistry::new)
  }

  /// Resolve a possibly abbreviated group name to its canonical kind.
  ///
  /// `g` resolves to `gallery`, `c` to `core` and so on. Matching is a plain prefix test
  /// in registry order, so an empty token resolves to the first entry.
  pub fn resolve(&self, candidate: &str) -> Option<GroupKind> {
    let resolved = self
      .entries
      .iter()
      .map(|(kind, _)| *kind)
      .find(|kind| kind.as_str().starts_with(candidate));
    trace!(candidate, resolved = ?resolved, "resolved group name");
    resolved
  }

  /// Decoder registered for `kind`.
  pub fn decoder(&self, kind: GroupKind) -> Option<&dyn GroupDecoder> {
    self
      .entries
      .iter()
      .find(|(entry, _)| *entry == kind)
      .map(|(_, decoder)| decoder.as_ref())
  }

  /// Canonical kinds in resolution order.
  pub fn kinds(&self) -> impl Iterator<Item = GroupKind> + '_ {
    self.entries.iter().map(|(kind, _)| *kind)
  }
}

impl Default for GroupDecoderRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for GroupDecoderRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.kinds()).finish()
  }
}
