mod bytes;
mod class;
mod compression;
mod data;
mod data_type;
mod element;
mod error;
mod file;
mod header;
mod matrix;
mod options;
mod payload;
mod tag;

/// Position-tracking byte source.
pub use bytes::ByteReader;
/// Matrix class enumeration.
pub use class::MatrixClass;
/// Compressed element inflation.
pub use compression::inflate_element;
/// Decoded typed payload values.
pub use data::Data;
/// Element type table.
pub use data_type::DataType;
/// Element representation and stream reader.
pub use element::{Element, ElementReader, ElementValue, Primitive};
/// Error and result aliases.
pub use error::{ErrorCategory, MatError, Result};
/// File abstraction and variable registry.
pub use file::{MatFile, RegistryState};
/// File header representation.
pub use header::{Endianness, MatHeader};
/// Matrix representation and decoder entry point.
pub use matrix::{ArrayFlags, Matrix, MatrixValue, decode_matrix};
/// Decoder limits.
pub use options::DecodeOptions;
/// Typed payload decoding.
pub use payload::decode_payload;
/// Element tag parsing.
pub use tag::Tag;
