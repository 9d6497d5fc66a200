//! Top-level combo path decoder.

use tracing::{debug, warn};

use crate::error::DecodeError;
use crate::groups::{GroupDecoderRegistry, decode_group};
use crate::models::{ComboRequest, DecodeResult};
use crate::syntax::{
  FileType, Filter, GROUP_DELIMITER, METADATA_DELIMITER, NAMESPACE, PATH_SEPARATOR,
};

/// Knobs for how permissive decoding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
  /// Accept groups without any sub-delimiter as bare `path` groups.
  pub allow_bare_paths: bool,
  /// Reject paths that do not start with `/`.
  pub require_leading_slash: bool,
}

impl Default for DecodeOptions {
  fn default() -> Self {
    Self {
      allow_bare_paths: true,
      require_leading_slash: false,
    }
  }
}

/// A decoding dialect a host can route combo requests to.
pub trait ComboStrategy {
  /// Short identifier of the dialect, used for routing and registration.
  fn namespace(&self) -> &str;

  /// Decode the request path.
  fn decode(&self, request: &ComboRequest) -> Result<DecodeResult, DecodeError>;
}

/// Decoder for the compact `/name+version+modules;...<.filter>.type` path format.
#[derive(Debug, Clone, Copy)]
pub struct PathDecoder<'a> {
  registry: &'a GroupDecoderRegistry,
  options: DecodeOptions,
}

impl PathDecoder<'static> {
  /// Decoder backed by the process-wide registry.
  pub fn new(options: DecodeOptions) -> Self {
    Self::with_registry(GroupDecoderRegistry::global(), options)
  }
}

impl Default for PathDecoder<'static> {
  fn default() -> Self {
    Self::new(DecodeOptions::default())
  }
}

impl<'a> PathDecoder<'a> {
  /// Decoder backed by a caller-supplied registry.
  pub fn with_registry(registry: &'a GroupDecoderRegistry, options: DecodeOptions) -> Self {
    Self { registry, options }
  }

  /// Options this decoder was created with.
  pub fn options(&self) -> DecodeOptions {
    self.options
  }

  /// Decode a raw path such as `/core+3.12.0+oop,node-base.debug.js`.
  ///
  /// The filter and type are read from the last group only; they apply to the whole
  /// request. Groups are decoded in order and the first failure aborts the decode.
  /// Input without a leading `/` is decoded as-is unless `require_leading_slash` is set.
  pub fn decode_path(&self, path: &str) -> Result<DecodeResult, DecodeError> {
    let body = match path.strip_prefix(PATH_SEPARATOR) {
      Some(body) => body,
      None if self.options.require_leading_slash => {
        return Err(DecodeError::MissingLeadingSlash {
          path: path.to_string(),
        });
      }
      None => path,
    };

    let mut segments: Vec<&str> = body.split(GROUP_DELIMITER).collect();
    let last = segments.pop().unwrap_or_default();
    let (last, filter, file_type) = split_metadata(last)?;
    segments.push(last);
    debug!(%file_type, %filter, groups = segments.len(), "decoded path metadata");

    let groups = segments
      .into_iter()
      .map(|segment| {
        decode_group(self.registry, segment, &self.options).inspect_err(|err| {
          warn!(segment, error = %err, "failed to decode module group");
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(DecodeResult {
      groups,
      filter,
      file_type,
    })
  }
}

impl ComboStrategy for PathDecoder<'_> {
  fn namespace(&self) -> &str {
    NAMESPACE
  }

  fn decode(&self, request: &ComboRequest) -> Result<DecodeResult, DecodeError> {
    self.decode_path(&request.path)
  }
}

/// Identifier of this decoding dialect.
pub fn namespace() -> &'static str {
  NAMESPACE
}

/// Decode a request with default options.
pub fn decode(request: &ComboRequest) -> Result<DecodeResult, DecodeError> {
  PathDecoder::default().decode(request)
}

/// Decode a request and hand the outcome to `callback`, which runs exactly once.
pub fn decode_with<F>(request: &ComboRequest, callback: F)
where
  F: FnOnce(Result<DecodeResult, DecodeError>),
{
  callback(decode(request));
}

/// Strip the trailing `.filter` (optional) and `.type` (required) from the last group.
fn split_metadata(segment: &str) -> Result<(&str, Filter, FileType), DecodeError> {
  let (rest, type_token) = split_last(segment);
  let file_type = type_token
    .parse::<FileType>()
    .map_err(|_| DecodeError::InvalidType {
      found: type_token.to_string(),
    })?;

  let (head, candidate) = split_last(rest);
  match file_type.filter_for(candidate) {
    Some(filter) => Ok((head, filter, file_type)),
    None => Ok((rest, Filter::DEFAULT, file_type)),
  }
}

fn split_last(value: &str) -> (&str, &str) {
  value
    .rsplit_once(METADATA_DELIMITER)
    .unwrap_or(("", value))
}
