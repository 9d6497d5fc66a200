use crate::error::DecodeError;
use crate::models::{DecodedGroup, GroupKind};
use crate::syntax::{GALLERY_PREFIX, MODULE_DELIMITER};

/// Turns the version and module list of one group into a [`DecodedGroup`].
///
/// Decoders receive the raw strings between sub-delimiters. Arity is checked by the
/// tokenizer beforehand, so any two strings are acceptable input.
pub trait GroupDecoder: Send + Sync {
  /// Decode a single group.
  fn decode(&self, version: &str, modules: &str) -> Result<DecodedGroup, DecodeError>;
}

/// Decoder that records the version verbatim and splits the module list.
#[derive(Debug, Clone, Copy)]
pub struct NamedDecoder(pub GroupKind);

impl GroupDecoder for NamedDecoder {
  fn decode(&self, version: &str, modules: &str) -> Result<DecodedGroup, DecodeError> {
    Ok(DecodedGroup {
      name: self.0,
      version: version.to_string(),
      modules: split_modules(modules).map(str::to_string).collect(),
    })
  }
}

/// Decoder for gallery groups, which prefixes the version and every module name.
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryDecoder;

impl GroupDecoder for GalleryDecoder {
  fn decode(&self, version: &str, modules: &str) -> Result<DecodedGroup, DecodeError> {
    // 2013.06.20-02-07 => gallery-2013.06.20-02-07
    let version = format!("{GALLERY_PREFIX}{version}");
    let modules = split_modules(modules)
      .map(|module| format!("{GALLERY_PREFIX}{module}"))
      .collect();

    Ok(DecodedGroup {
      name: GroupKind::Gallery,
      version,
      modules,
    })
  }
}

fn split_modules(modules: &str) -> impl Iterator<Item = &str> {
  modules.split(MODULE_DELIMITER)
}
