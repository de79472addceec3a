use thiserror::Error;

use crate::mat::{DataType, MatrixClass};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MatError>;

/// Broad failure classes used by callers deciding whether to skip a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
	/// Malformed bytes: bad header, wrong sub-element type, truncated unit.
	Format,
	/// Valid input outside the supported subset (sparse/struct/object, UTF-32).
	Unsupported,
	/// Stream shape this decoder assumes never happens (non-matrix top level, ...).
	Invariant,
	/// Underlying reader failure.
	Io,
}

/// Errors produced while reading and decoding `.mat` data.
#[derive(Debug, Error)]
pub enum MatError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Header text does not follow the Level-5 layout.
	#[error("invalid header: {reason}")]
	InvalidHeader {
		/// Which part of the header failed.
		reason: &'static str,
	},
	/// Header declares a level other than `5.0`.
	#[error("unsupported mat level {level:?} (expected \"5.0\")")]
	UnsupportedLevel {
		/// Level token read from the header text.
		level: String,
	},
	/// Byte-order marker is neither `MI` nor `IM`.
	#[error("invalid byte order marker {marker:?}")]
	InvalidByteOrder {
		/// Raw marker bytes 126..128.
		marker: [u8; 2],
	},
	/// Not enough bytes remained for a fixed-size unit.
	#[error("unexpected eof at offset {at}, need {need} bytes, got {got}")]
	UnexpectedEof {
		/// Stream offset where the read started.
		at: u64,
		/// Requested bytes.
		need: usize,
		/// Bytes actually available.
		got: usize,
	},
	/// Tag carries a type code outside the type table.
	#[error("unknown data type code {code} at offset {at}")]
	UnknownDataType {
		/// Raw type code.
		code: u32,
		/// Stream offset of the tag.
		at: u64,
	},
	/// Small data element has an impossible type or length.
	#[error("invalid small data element: type {data_type}, {len} bytes")]
	InvalidSmallElement {
		/// Declared element type.
		data_type: DataType,
		/// Declared inline byte count.
		len: u16,
	},
	/// Payload length is not a multiple of the element width.
	#[error("{data_type} payload of {len} bytes is not a multiple of {width}")]
	MisalignedPayload {
		/// Element type.
		data_type: DataType,
		/// Payload byte length.
		len: usize,
		/// Element byte width.
		width: usize,
	},
	/// Matrix or compressed type handed to the primitive payload decoder.
	#[error("{data_type} is not a primitive payload type")]
	NotPrimitive {
		/// Offending type.
		data_type: DataType,
	},
	/// Matrix sub-element has the wrong type or shape.
	#[error("invalid matrix {field} sub-element: expected {expected}, got {got}")]
	UnexpectedSubElement {
		/// Sub-element being decoded (`array flags`, `dimensions`, `name`).
		field: &'static str,
		/// Required type or encoding.
		expected: &'static str,
		/// What was found.
		got: String,
	},
	/// Array flags payload is not 8 bytes.
	#[error("invalid array flags size {len} (expected 8)")]
	InvalidArrayFlagsSize {
		/// Declared payload length.
		len: u32,
	},
	/// Class byte outside the known class table.
	#[error("unknown matrix class code {code}")]
	UnknownClass {
		/// Raw class byte.
		code: u8,
	},
	/// Known class this decoder deliberately refuses.
	#[error("unsupported matrix class: {class}")]
	UnsupportedClass {
		/// Refused class.
		class: MatrixClass,
	},
	/// Known data type this decoder deliberately refuses.
	#[error("unsupported data type: {data_type}")]
	UnsupportedDataType {
		/// Refused type.
		data_type: DataType,
	},
	/// Top-level element is not a matrix.
	#[error("top-level element is {data_type}, expected miMATRIX or miCOMPRESSED")]
	TopLevelNotMatrix {
		/// Type of the offending element.
		data_type: DataType,
	},
	/// Compressed element did not inflate to exactly one element.
	#[error("compressed element inflated to {count} elements (expected 1)")]
	CompressedElementCount {
		/// Number of elements found.
		count: usize,
	},
	/// Cell array child is not a matrix.
	#[error("cell element is {data_type}, expected miMATRIX")]
	CellChildNotMatrix {
		/// Type of the offending child.
		data_type: DataType,
	},
	/// Nested compressed/cell re-entry exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Inflated compressed element exceeded configured limit.
	#[error("inflated element exceeded limit {limit} bytes")]
	InflatedTooLarge {
		/// Maximum allowed inflated bytes.
		limit: usize,
	},
	/// Value projection requested for an incompatible class.
	#[error("expected {expected} matrix, got {class}")]
	ClassMismatch {
		/// Required class family.
		expected: &'static str,
		/// Actual class.
		class: MatrixClass,
	},
	/// Stored value cannot be represented in the requested numeric type.
	#[error("{data_type} value out of range for {target}")]
	ValueOutOfRange {
		/// Storage type of the value.
		data_type: DataType,
		/// Requested representation.
		target: &'static str,
	},
	/// Requested variable is not present in the file.
	#[error("variable not found: {name}")]
	VariableNotFound {
		/// Requested variable name.
		name: String,
	},
}

impl MatError {
	/// Classify the error into the broad failure taxonomy.
	pub fn category(&self) -> ErrorCategory {
		match self {
			Self::Io(_) => ErrorCategory::Io,
			Self::UnsupportedClass { .. } | Self::UnsupportedDataType { .. } => ErrorCategory::Unsupported,
			Self::TopLevelNotMatrix { .. } | Self::CompressedElementCount { .. } | Self::CellChildNotMatrix { .. } | Self::NotPrimitive { .. } => {
				ErrorCategory::Invariant
			}
			_ => ErrorCategory::Format,
		}
	}
}
