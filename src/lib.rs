#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod groups;
pub mod models;
pub mod syntax;

pub use config::DecoderConfig;
pub use decoder::{ComboStrategy, DecodeOptions, PathDecoder, decode, decode_with, namespace};
pub use error::DecodeError;
pub use models::{ComboRequest, DecodeResult, DecodedGroup, GroupKind};
pub use syntax::{FileType, Filter};
