use std::io::Read;

use log::{trace, warn};

use crate::mat::bytes::{pad_to_8, u16_le, u32_at};
use crate::mat::element::check_depth;
use crate::mat::{ByteReader, Data, DataType, DecodeOptions, ElementReader, Endianness, MatError, MatrixClass, Primitive, Result, Tag, decode_payload};

/// Storage flags from the array flags sub-element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayFlags {
	/// Array holds logical (boolean) values.
	pub logical: bool,
	/// Array was a global variable.
	pub global: bool,
	/// Array has an imaginary part.
	pub complex: bool,
	/// Maximum nonzero count, only meaningful for sparse arrays.
	pub nonzero_max: u16,
}

impl ArrayFlags {
	const LOGICAL: u16 = 1 << 9;
	const GLOBAL: u16 = 1 << 10;
	const COMPLEX: u16 = 1 << 11;

	/// Split the flags/class half-word into flags and the raw class byte.
	pub fn from_words(flags_and_class: u16, nonzero_max: u16) -> (Self, u8) {
		let flags = Self {
			logical: flags_and_class & Self::LOGICAL != 0,
			global: flags_and_class & Self::GLOBAL != 0,
			complex: flags_and_class & Self::COMPLEX != 0,
			nonzero_max,
		};
		(flags, (flags_and_class & 0xFF) as u8)
	}
}

/// Decoded value of a matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixValue {
	/// Numeric or character data in storage order (column-major).
	Numeric(Data),
	/// Cell contents in storage order.
	Cell(Vec<Matrix>),
}

/// Decoded MATLAB array.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
	/// Variable name; empty for cell children and anonymous arrays.
	pub name: String,
	/// Dimension sizes, at least two.
	pub dimensions: Vec<i32>,
	/// Array class.
	pub class: MatrixClass,
	/// Storage flags.
	pub flags: ArrayFlags,
	/// Decoded value.
	pub value: MatrixValue,
}

impl Matrix {
	/// Product of all dimensions; `None` when the product overflows `usize`.
	pub fn element_count(&self) -> Option<usize> {
		self.dimensions.iter().try_fold(1_usize, |count, dim| count.checked_mul(usize::try_from(*dim).unwrap_or(0)))
	}

	/// Borrow numeric/char data.
	pub fn data(&self) -> Option<&Data> {
		match &self.value {
			MatrixValue::Numeric(data) => Some(data),
			MatrixValue::Cell(_) => None,
		}
	}

	/// Borrow cell contents.
	pub fn cells(&self) -> Option<&[Matrix]> {
		match &self.value {
			MatrixValue::Cell(items) => Some(items),
			MatrixValue::Numeric(_) => None,
		}
	}

	/// Cell at storage position `index`; `None` when out of range or not a cell.
	pub fn cell(&self, index: usize) -> Option<&Matrix> {
		self.cells()?.get(index)
	}

	/// Real part of a double/single matrix as `f64`.
	pub fn to_f64_vec(&self) -> Result<Vec<f64>> {
		if !self.class.is_float() {
			return Err(MatError::ClassMismatch {
				expected: "floating-point",
				class: self.class,
			});
		}
		self.numeric("floating-point")?.to_f64_vec()
	}

	/// Real part of an integer matrix as `i64`.
	pub fn to_i64_vec(&self) -> Result<Vec<i64>> {
		if !self.class.is_integer() {
			return Err(MatError::ClassMismatch {
				expected: "integer",
				class: self.class,
			});
		}
		self.numeric("integer")?.to_i64_vec()
	}

	/// Char matrix contents as text, in storage order.
	pub fn to_text(&self) -> Result<String> {
		if self.class != MatrixClass::Char {
			return Err(MatError::ClassMismatch {
				expected: "character",
				class: self.class,
			});
		}
		Ok(match self.numeric("character")? {
			Data::U16(units) => String::from_utf16_lossy(units),
			Data::U8(bytes) => bytes.iter().map(|b| char::from(*b)).collect(),
			Data::I8(bytes) => bytes.iter().map(|b| char::from(*b as u8)).collect(),
			Data::Utf8(chars) | Data::Utf16(chars) => chars.iter().collect(),
			other => {
				return Err(MatError::ValueOutOfRange {
					data_type: other.data_type(),
					target: "text",
				});
			}
		})
	}

	fn numeric(&self, expected: &'static str) -> Result<&Data> {
		self.data().ok_or(MatError::ClassMismatch { expected, class: self.class })
	}
}

/// Decode one `miMATRIX` payload (the bytes after its tag).
pub fn decode_matrix(payload: &[u8], endianness: Endianness, options: &DecodeOptions, depth: u32) -> Result<Matrix> {
	check_depth(depth, options)?;

	let mut reader = ByteReader::new(payload);
	let (flags, class_code) = read_array_flags(&mut reader, endianness)?;
	let class = MatrixClass::from_code(class_code)?;
	let dimensions = read_dimensions(&mut reader, endianness)?;
	let name = match read_name(&mut reader, endianness)? {
		Some(name) => name,
		None => {
			warn!("matrix payload ended before the name sub-element");
			String::new()
		}
	};

	let value = match class {
		MatrixClass::Struct | MatrixClass::Object | MatrixClass::Sparse => return Err(MatError::UnsupportedClass { class }),
		MatrixClass::Cell => MatrixValue::Cell(read_cells(reader, endianness, options, depth)?),
		_ => MatrixValue::Numeric(read_numeric(&mut reader, endianness, class, flags.complex)?),
	};

	trace!("decoded matrix {name:?}: {class} {dimensions:?}");
	Ok(Matrix {
		name,
		dimensions,
		class,
		flags,
		value,
	})
}

fn require_tag<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness) -> Result<Tag> {
	let at = reader.pos();
	Tag::read(reader, endianness)?.ok_or(MatError::UnexpectedEof { at, need: Tag::SIZE, got: 0 })
}

fn tag_label(tag: &Tag) -> String {
	match tag {
		Tag::Small(item) => format!("small {}", item.data_type),
		Tag::Normal { data_type, len } => format!("{data_type} len={len}"),
	}
}

fn read_array_flags<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness) -> Result<(ArrayFlags, u8)> {
	match require_tag(reader, endianness)? {
		Tag::Normal {
			data_type: DataType::UInt32,
			len: 8,
		} => {}
		Tag::Normal {
			data_type: DataType::UInt32,
			len,
		} => return Err(MatError::InvalidArrayFlagsSize { len }),
		other => {
			return Err(MatError::UnexpectedSubElement {
				field: "array flags",
				expected: "normal miUINT32 tag",
				got: tag_label(&other),
			});
		}
	}

	let buf = reader.read_exact(8)?;
	let (mut flags_and_class, mut nonzero_max) = (u16_le(&buf[0..2]), u16_le(&buf[4..6]));
	if endianness == Endianness::Big {
		(flags_and_class, nonzero_max) = (nonzero_max, flags_and_class);
	}
	Ok(ArrayFlags::from_words(flags_and_class, nonzero_max))
}

fn read_dimensions<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness) -> Result<Vec<i32>> {
	let len = match require_tag(reader, endianness)? {
		Tag::Normal {
			data_type: DataType::Int32,
			len,
		} => len as usize,
		other => {
			return Err(MatError::UnexpectedSubElement {
				field: "dimensions",
				expected: "normal miINT32 tag",
				got: tag_label(&other),
			});
		}
	};

	if len % 4 != 0 {
		return Err(MatError::MisalignedPayload {
			data_type: DataType::Int32,
			len,
			width: 4,
		});
	}
	let block = reader.read_exact(pad_to_8(len))?;
	let dims: Vec<i32> = block[..len].chunks_exact(4).map(|chunk| u32_at(chunk, endianness) as i32).collect();
	if dims.len() < 2 {
		return Err(MatError::UnexpectedSubElement {
			field: "dimensions",
			expected: "at least 2 dimensions",
			got: format!("{} dimensions", dims.len()),
		});
	}
	Ok(dims)
}

fn read_name<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness) -> Result<Option<String>> {
	let Some(tag) = Tag::read(reader, endianness)? else {
		return Ok(None);
	};

	match tag {
		Tag::Small(Primitive { data: Data::I8(bytes), .. }) => Ok(Some(bytes.iter().map(|b| char::from(*b as u8)).collect())),
		Tag::Normal {
			data_type: DataType::Int8,
			len,
		} => {
			let len = len as usize;
			let block = reader.read_exact(pad_to_8(len))?;
			Ok(Some(String::from_utf8_lossy(&block[..len]).into_owned()))
		}
		other => Err(MatError::UnexpectedSubElement {
			field: "name",
			expected: "miINT8 element",
			got: tag_label(&other),
		}),
	}
}

/// Read one real or imaginary part; `None` when the payload has ended.
fn read_part<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness) -> Result<Option<Data>> {
	let Some(tag) = Tag::read(reader, endianness)? else {
		return Ok(None);
	};

	let (data_type, len) = match tag {
		Tag::Small(item) => return Ok(Some(item.data)),
		Tag::Normal { data_type, len } if !data_type.is_container() => (data_type, len as usize),
		other => {
			return Err(MatError::UnexpectedSubElement {
				field: "numeric data",
				expected: "primitive element",
				got: tag_label(&other),
			});
		}
	};

	let bytes = reader.read_exact(len)?;
	let data = decode_payload(data_type, &bytes, endianness)?;
	let padding = pad_to_8(len) - len;
	if reader.skip_lenient(padding)? < padding {
		warn!("numeric sub-element is missing trailing padding");
	}
	Ok(Some(data))
}

fn read_numeric<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness, class: MatrixClass, complex: bool) -> Result<Data> {
	let real = match read_part(reader, endianness)? {
		Some(data) => data,
		None => {
			warn!("matrix payload ended before the real part; using an empty value");
			let data_type = class.native_data_type().ok_or(MatError::UnsupportedClass { class })?;
			return Data::empty(data_type);
		}
	};

	if complex && read_part(reader, endianness)?.is_none() {
		warn!("complex matrix is missing its imaginary part");
	}
	Ok(real)
}

fn read_cells<R: Read>(reader: ByteReader<R>, endianness: Endianness, options: &DecodeOptions, depth: u32) -> Result<Vec<Matrix>> {
	ElementReader::nested(reader, endianness, options, depth)
		.map(|element| element?.into_matrix().map_err(|other| MatError::CellChildNotMatrix { data_type: other.data_type() }))
		.collect()
}
