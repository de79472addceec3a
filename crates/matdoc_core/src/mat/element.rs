use std::io::Read;

use log::trace;

use crate::mat::bytes::pad_to_8;
use crate::mat::{ByteReader, Data, DataType, DecodeOptions, Endianness, MatError, Matrix, Result, Tag, decode_matrix, decode_payload, inflate_element};

/// Typed payload of a primitive element.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
	/// Element type from the tag.
	pub data_type: DataType,
	/// Decoded values.
	pub data: Data,
}

/// One decoded unit of the element stream.
///
/// `Small` and `Normal` differ only in how the payload was stored; both expose
/// the same type and value.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
	/// Payload was inline in the 8-byte tag.
	Small(Primitive),
	/// Payload followed the tag as a separate padded block.
	Normal(Primitive),
	/// Decoded `miMATRIX` element.
	Matrix(Matrix),
}

/// Borrowed view of an element's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementValue<'a> {
	/// Primitive values.
	Data(&'a Data),
	/// Nested matrix.
	Matrix(&'a Matrix),
}

impl Element {
	/// Element type; always [`DataType::Matrix`] for matrices.
	pub fn data_type(&self) -> DataType {
		match self {
			Self::Small(item) | Self::Normal(item) => item.data_type,
			Self::Matrix(_) => DataType::Matrix,
		}
	}

	/// Borrow the decoded value.
	pub fn value(&self) -> ElementValue<'_> {
		match self {
			Self::Small(item) | Self::Normal(item) => ElementValue::Data(&item.data),
			Self::Matrix(matrix) => ElementValue::Matrix(matrix),
		}
	}

	/// Return `true` when the payload was stored inline.
	pub fn is_small(&self) -> bool {
		matches!(self, Self::Small(_))
	}

	/// Borrow the matrix, if this is one.
	pub fn as_matrix(&self) -> Option<&Matrix> {
		match self {
			Self::Matrix(matrix) => Some(matrix),
			_ => None,
		}
	}

	/// Take the matrix, or hand the element back.
	pub fn into_matrix(self) -> std::result::Result<Matrix, Self> {
		match self {
			Self::Matrix(matrix) => Ok(matrix),
			other => Err(other),
		}
	}
}

/// Sequential element decoder over a byte source.
///
/// Used for the top-level file stream, inflated compressed payloads, and the
/// children of cell matrices. Iteration stops at clean end of input and after
/// the first error.
pub struct ElementReader<'o, R> {
	reader: ByteReader<R>,
	endianness: Endianness,
	options: &'o DecodeOptions,
	depth: u32,
	done: bool,
}

impl<'o, R: Read> ElementReader<'o, R> {
	/// Start a top-level reader.
	pub fn new(source: R, endianness: Endianness, options: &'o DecodeOptions) -> Self {
		Self::nested(ByteReader::new(source), endianness, options, 0)
	}

	/// Continue reading from an existing byte reader at nesting `depth`.
	pub fn nested(reader: ByteReader<R>, endianness: Endianness, options: &'o DecodeOptions, depth: u32) -> Self {
		Self {
			reader,
			endianness,
			options,
			depth,
			done: false,
		}
	}

	/// Bytes consumed from the source so far.
	pub fn pos(&self) -> u64 {
		self.reader.pos()
	}

	/// Decode every remaining element.
	pub fn read_all(self) -> Result<Vec<Element>> {
		self.collect()
	}

	/// Decode the next element, or `None` at clean end of input.
	pub fn next_element(&mut self) -> Result<Option<Element>> {
		let Some(tag) = Tag::read(&mut self.reader, self.endianness)? else {
			return Ok(None);
		};

		let (data_type, len) = match tag {
			Tag::Small(item) => return Ok(Some(Element::Small(item))),
			Tag::Normal { data_type, len } => (data_type, len as usize),
		};

		match data_type {
			DataType::Compressed => {
				let packed = self.reader.read_exact(len)?;
				inflate_element(&packed, self.endianness, self.options, self.depth + 1).map(Some)
			}
			DataType::Matrix => {
				let payload = self.reader.read_exact(len)?;
				decode_matrix(&payload, self.endianness, self.options, self.depth + 1).map(|matrix| Some(Element::Matrix(matrix)))
			}
			_ => {
				let block = self.reader.read_exact(pad_to_8(len))?;
				let data = decode_payload(data_type, &block[..len], self.endianness)?;
				trace!("primitive element: {data_type} x{}", data.len());
				Ok(Some(Element::Normal(Primitive { data_type, data })))
			}
		}
	}
}

impl<R: Read> Iterator for ElementReader<'_, R> {
	type Item = Result<Element>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		match self.next_element() {
			Ok(Some(element)) => Some(Ok(element)),
			Ok(None) => {
				self.done = true;
				None
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

/// Fail when `depth` exceeds the configured nesting limit.
pub(crate) fn check_depth(depth: u32, options: &DecodeOptions) -> Result<()> {
	if depth > options.max_depth {
		return Err(MatError::DecodeDepthExceeded { max_depth: options.max_depth });
	}
	Ok(())
}

#[cfg(test)]
mod tests;
