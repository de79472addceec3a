//! Shared test helpers for workspace crates.
//!
//! Fixtures are built in memory with [`MatrixBuilder`] and friends, then
//! materialised under `<target>/matdoc-fixtures` by [`write_fixture`].

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Output;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Header text written by [`header`].
pub const POSIX_HEADER_TEXT: &str = "MATLAB 5.0 MAT-file, Platform: posix, Created on: Mon Feb 18 17:12:08 2013";

/// Type codes.
pub mod mi {
	/// `miINT8`
	pub const INT8: u32 = 1;
	/// `miUINT8`
	pub const UINT8: u32 = 2;
	/// `miINT16`
	pub const INT16: u32 = 3;
	/// `miUINT16`
	pub const UINT16: u32 = 4;
	/// `miINT32`
	pub const INT32: u32 = 5;
	/// `miUINT32`
	pub const UINT32: u32 = 6;
	/// `miSINGLE`
	pub const SINGLE: u32 = 7;
	/// `miDOUBLE`
	pub const DOUBLE: u32 = 9;
	/// `miINT64`
	pub const INT64: u32 = 12;
	/// `miUINT64`
	pub const UINT64: u32 = 13;
	/// `miMATRIX`
	pub const MATRIX: u32 = 14;
	/// `miCOMPRESSED`
	pub const COMPRESSED: u32 = 15;
	/// `miUTF8`
	pub const UTF8: u32 = 16;
	/// `miUTF16`
	pub const UTF16: u32 = 17;
	/// `miUTF32`
	pub const UTF32: u32 = 18;
}

/// Class codes.
pub mod mx {
	/// Cell array.
	pub const CELL: u8 = 1;
	/// Structure.
	pub const STRUCT: u8 = 2;
	/// Object.
	pub const OBJECT: u8 = 3;
	/// Character array.
	pub const CHAR: u8 = 4;
	/// Sparse array.
	pub const SPARSE: u8 = 5;
	/// Double precision array.
	pub const DOUBLE: u8 = 6;
	/// Single precision array.
	pub const SINGLE: u8 = 7;
	/// 8-bit signed.
	pub const INT8: u8 = 8;
	/// 8-bit unsigned.
	pub const UINT8: u8 = 9;
	/// 16-bit signed.
	pub const INT16: u8 = 10;
	/// 16-bit unsigned.
	pub const UINT16: u8 = 11;
	/// 32-bit signed.
	pub const INT32: u8 = 12;
	/// 32-bit unsigned.
	pub const UINT32: u8 = 13;
	/// 64-bit signed.
	pub const INT64: u8 = 14;
	/// 64-bit unsigned.
	pub const UINT64: u8 = 15;
}

/// Byte order used when encoding fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
	/// `IM` marker.
	Little,
	/// `MI` marker.
	Big,
}

impl Order {
	/// Header marker bytes for this order.
	pub fn marker(self) -> [u8; 2] {
		match self {
			Self::Little => *b"IM",
			Self::Big => *b"MI",
		}
	}

	fn u16(self, value: u16) -> [u8; 2] {
		match self {
			Self::Little => value.to_le_bytes(),
			Self::Big => value.to_be_bytes(),
		}
	}

	fn u32(self, value: u32) -> [u8; 4] {
		match self {
			Self::Little => value.to_le_bytes(),
			Self::Big => value.to_be_bytes(),
		}
	}
}

/// Primitive that can be written as element payload.
pub trait Scalar: Copy {
	/// Type code of the element carrying this scalar.
	const CODE: u32;

	/// Append the encoded scalar.
	fn put(self, order: Order, out: &mut Vec<u8>);
}

macro_rules! impl_scalar {
	($($ty:ty => $code:expr),* $(,)?) => {
		$(
			impl Scalar for $ty {
				const CODE: u32 = $code;

				fn put(self, order: Order, out: &mut Vec<u8>) {
					match order {
						Order::Little => out.extend_from_slice(&self.to_le_bytes()),
						Order::Big => out.extend_from_slice(&self.to_be_bytes()),
					}
				}
			}
		)*
	};
}

impl_scalar! {
	i8 => mi::INT8,
	u8 => mi::UINT8,
	i16 => mi::INT16,
	u16 => mi::UINT16,
	i32 => mi::INT32,
	u32 => mi::UINT32,
	f32 => mi::SINGLE,
	f64 => mi::DOUBLE,
	i64 => mi::INT64,
	u64 => mi::UINT64,
}

/// Encode scalars back to back.
pub fn encode<T: Scalar>(order: Order, values: &[T]) -> Vec<u8> {
	let mut out = Vec::new();
	for value in values {
		value.put(order, &mut out);
	}
	out
}

/// Build a 128-byte header with arbitrary text and marker.
pub fn header_with(text: &str, marker: [u8; 2], order: Order) -> Vec<u8> {
	let mut out = text.as_bytes().to_vec();
	out.resize(116, b' ');
	out.extend_from_slice(&[0_u8; 8]);
	out.extend_from_slice(&order.u16(0x0100));
	out.extend_from_slice(&marker);
	out
}

/// Build a standard posix header for `order`.
pub fn header(order: Order) -> Vec<u8> {
	header_with(POSIX_HEADER_TEXT, order.marker(), order)
}

/// Encode a normal 8-byte tag.
pub fn tag(order: Order, code: u32, len: u32) -> Vec<u8> {
	let mut out = order.u32(code).to_vec();
	out.extend_from_slice(&order.u32(len));
	out
}

/// Encode a small data element (at most 4 payload bytes).
///
/// The two 16-bit halves are always little-endian; big-endian files swap
/// which half carries the type and which the length.
pub fn small_element(order: Order, code: u32, payload: &[u8]) -> Vec<u8> {
	assert!(!payload.is_empty() && payload.len() <= 4, "small element payload must be 1..=4 bytes");
	let code = u16::try_from(code).expect("small element code fits u16");
	let len = payload.len() as u16;
	let (first, second) = match order {
		Order::Little => (code, len),
		Order::Big => (len, code),
	};
	let mut out = first.to_le_bytes().to_vec();
	out.extend_from_slice(&second.to_le_bytes());
	out.extend_from_slice(payload);
	out.resize(8, 0);
	out
}

/// Encode a normal element with payload padded to 8 bytes.
pub fn element(order: Order, code: u32, payload: &[u8]) -> Vec<u8> {
	let mut out = tag(order, code, payload.len() as u32);
	out.extend_from_slice(payload);
	out.resize(8 + payload.len().div_ceil(8) * 8, 0);
	out
}

/// Encode values as a small element when they fit in 4 bytes, otherwise normal.
pub fn data_element<T: Scalar>(order: Order, values: &[T]) -> Vec<u8> {
	let payload = encode(order, values);
	if !payload.is_empty() && payload.len() <= 4 {
		small_element(order, T::CODE, &payload)
	} else {
		element(order, T::CODE, &payload)
	}
}

/// Wrap one encoded element in a zlib `miCOMPRESSED` element.
pub fn compressed(order: Order, inner: &[u8]) -> Vec<u8> {
	let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(inner).expect("zlib encode");
	let packed = encoder.finish().expect("zlib finish");
	let mut out = tag(order, mi::COMPRESSED, packed.len() as u32);
	out.extend_from_slice(&packed);
	out
}

/// Concatenate a header and top-level elements into file bytes.
pub fn mat_file(order: Order, elements: &[Vec<u8>]) -> Vec<u8> {
	let mut out = header(order);
	for item in elements {
		out.extend_from_slice(item);
	}
	out
}

/// Encode the 8-byte array flags payload.
pub fn array_flags_payload(order: Order, flags_and_class: u16, nonzero_max: u16) -> Vec<u8> {
	let (first, second) = match order {
		Order::Little => (flags_and_class, nonzero_max),
		Order::Big => (nonzero_max, flags_and_class),
	};
	let mut out = vec![0_u8; 8];
	out[0..2].copy_from_slice(&first.to_le_bytes());
	out[4..6].copy_from_slice(&second.to_le_bytes());
	out
}

/// How the array name sub-element is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEncoding {
	/// Small element when 1..=4 bytes, normal otherwise.
	Auto,
	/// Always a normal `miINT8` element.
	Normal,
	/// No name sub-element at all.
	Omitted,
}

/// Builder for one `miMATRIX` element.
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
	order: Order,
	class: u8,
	flags: u16,
	nonzero_max: u16,
	dims: Vec<i32>,
	name: String,
	name_encoding: NameEncoding,
	body: Vec<u8>,
}

impl MatrixBuilder {
	/// Start a matrix of `class` with dimensions `[1, 1]` and an empty name.
	pub fn new(order: Order, class: u8) -> Self {
		Self {
			order,
			class,
			flags: 0,
			nonzero_max: 0,
			dims: vec![1, 1],
			name: String::new(),
			name_encoding: NameEncoding::Auto,
			body: Vec::new(),
		}
	}

	/// Set dimensions.
	pub fn dims(mut self, dims: &[i32]) -> Self {
		self.dims = dims.to_vec();
		self
	}

	/// Set the array name.
	pub fn name(mut self, name: &str) -> Self {
		self.name = name.to_owned();
		self
	}

	/// Choose how the name is encoded.
	pub fn name_encoding(mut self, encoding: NameEncoding) -> Self {
		self.name_encoding = encoding;
		self
	}

	/// Set the complex flag.
	pub fn complex(mut self) -> Self {
		self.flags |= 0x0800;
		self
	}

	/// Set the global flag.
	pub fn global(mut self) -> Self {
		self.flags |= 0x0400;
		self
	}

	/// Set the logical flag.
	pub fn logical(mut self) -> Self {
		self.flags |= 0x0200;
		self
	}

	/// Set the sparse nonzero maximum.
	pub fn nonzero_max(mut self, value: u16) -> Self {
		self.nonzero_max = value;
		self
	}

	/// Append a real or imaginary part sub-element.
	pub fn part<T: Scalar>(mut self, values: &[T]) -> Self {
		self.body.extend(data_element(self.order, values));
		self
	}

	/// Append an already encoded sub-element (cell children, raw payloads).
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.body.extend_from_slice(bytes);
		self
	}

	/// Encode the complete element including its `miMATRIX` tag.
	pub fn build(self) -> Vec<u8> {
		let order = self.order;
		let mut payload = element(order, mi::UINT32, &array_flags_payload(order, self.flags | u16::from(self.class), self.nonzero_max));
		payload.extend(element(order, mi::INT32, &encode(order, &self.dims)));

		let name = self.name.as_bytes();
		match self.name_encoding {
			NameEncoding::Auto if !name.is_empty() && name.len() <= 4 => payload.extend(small_element(order, mi::INT8, name)),
			NameEncoding::Auto | NameEncoding::Normal => payload.extend(element(order, mi::INT8, name)),
			NameEncoding::Omitted => {}
		}

		payload.extend_from_slice(&self.body);
		let mut out = tag(order, mi::MATRIX, payload.len() as u32);
		out.extend_from_slice(&payload);
		out
	}
}

/// Char matrix `[1, n]` holding `text` as `miUINT16` units.
pub fn char_matrix(order: Order, name: &str, text: &str) -> Vec<u8> {
	let units: Vec<u16> = text.encode_utf16().collect();
	MatrixBuilder::new(order, mx::CHAR).name(name).dims(&[1, units.len() as i32]).part(&units).build()
}

/// Double matrix with `miDOUBLE` storage.
pub fn double_matrix(order: Order, name: &str, dims: &[i32], values: &[f64]) -> Vec<u8> {
	MatrixBuilder::new(order, mx::DOUBLE).name(name).dims(dims).part(values).build()
}

/// Cell matrix whose children are already encoded matrices.
pub fn cell_matrix(order: Order, name: &str, dims: &[i32], children: &[Vec<u8>]) -> Vec<u8> {
	let mut builder = MatrixBuilder::new(order, mx::CELL).name(name).dims(dims);
	for child in children {
		builder = builder.raw(child);
	}
	builder.build()
}

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write fixture bytes under `<target>/matdoc-fixtures/<name>` and return the path.
pub fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("matdoc-fixtures");
	fs::create_dir_all(&dir).expect("fixture dir is creatable");
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture is writable");
	path
}

/// Assert a command succeeded and parse its stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
