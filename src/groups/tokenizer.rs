use tracing::debug;

use super::registry::GroupDecoderRegistry;
use crate::decoder::DecodeOptions;
use crate::error::DecodeError;
use crate::models::{DecodedGroup, GroupKind};
use crate::syntax::GROUP_SUB_DELIMITER;

/// Decode one `;`-delimited group segment.
///
/// The segment is classified by how many `+`-delimited parts it has:
///
/// * `name+version+modules` dispatches to the decoder registered for `name`.
/// * `version+modules` is the legacy form and always decodes as a `root` group.
/// * `path` is an uncompressed module path and becomes a `path` group with no version.
pub fn decode_group(
  registry: &GroupDecoderRegistry,
  segment: &str,
  options: &DecodeOptions,
) -> Result<DecodedGroup, DecodeError> {
  let parts: Vec<&str> = segment.split(GROUP_SUB_DELIMITER).collect();

  match parts.as_slice() {
    [name, version, modules] => {
      let Some(kind) = registry.resolve(name) else {
        return Err(DecodeError::UnrecognizedGroupName {
          name: name.to_string(),
        });
      };
      dispatch(registry, kind, version, modules)
    }
    [version, modules] => dispatch(registry, GroupKind::Root, version, modules),
    [path] if options.allow_bare_paths => Ok(DecodedGroup {
      name: GroupKind::Path,
      version: String::new(),
      modules: vec![path.to_string()],
    }),
    _ => Err(DecodeError::MalformedGroupToken {
      segment: segment.to_string(),
      parts: parts.len(),
    }),
  }
}

fn dispatch(
  registry: &GroupDecoderRegistry,
  kind: GroupKind,
  version: &str,
  modules: &str,
) -> Result<DecodedGroup, DecodeError> {
  let Some(decoder) = registry.decoder(kind) else {
    return Err(DecodeError::UnrecognizedGroupName {
      name: kind.to_string(),
    });
  };

  let group = decoder.decode(version, modules)?;
  debug!(
    group = %group.name,
    version = %group.version,
    modules = group.modules.len(),
    "decoded module group"
  );
  Ok(group)
}
