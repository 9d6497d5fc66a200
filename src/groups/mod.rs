//! Module group decoding: named decoders, short-name resolution and group tokenizing.
//!
//! Each `;`-delimited segment of a combo path is handled here. The tokenizer picks the
//! decoding rule from the segment's shape, the registry resolves abbreviated group names,
//! and the decoders normalise the version and module list.

mod decoders;
mod registry;
mod tokenizer;

pub use decoders::{GalleryDecoder, GroupDecoder, NamedDecoder};
pub use registry::GroupDecoderRegistry;
pub use tokenizer::decode_group;
