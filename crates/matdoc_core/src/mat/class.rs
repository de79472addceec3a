use std::fmt;

use crate::mat::{DataType, MatError, Result};

/// MATLAB array class stored in the low byte of the array flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixClass {
	/// Cell array.
	Cell,
	/// Structure.
	Struct,
	/// Object.
	Object,
	/// Character array.
	Char,
	/// Sparse array.
	Sparse,
	/// Double precision array.
	Double,
	/// Single precision array.
	Single,
	/// 8-bit signed integer array.
	Int8,
	/// 8-bit unsigned integer array.
	UInt8,
	/// 16-bit signed integer array.
	Int16,
	/// 16-bit unsigned integer array.
	UInt16,
	/// 32-bit signed integer array.
	Int32,
	/// 32-bit unsigned integer array.
	UInt32,
	/// 64-bit signed integer array.
	Int64,
	/// 64-bit unsigned integer array.
	UInt64,
}

impl MatrixClass {
	/// Map a raw class byte to a class.
	pub fn from_code(code: u8) -> Result<Self> {
		Ok(match code {
			1 => Self::Cell,
			2 => Self::Struct,
			3 => Self::Object,
			4 => Self::Char,
			5 => Self::Sparse,
			6 => Self::Double,
			7 => Self::Single,
			8 => Self::Int8,
			9 => Self::UInt8,
			10 => Self::Int16,
			11 => Self::UInt16,
			12 => Self::Int32,
			13 => Self::UInt32,
			14 => Self::Int64,
			15 => Self::UInt64,
			_ => return Err(MatError::UnknownClass { code }),
		})
	}

	/// Short `mx*` name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Cell => "mxCELL",
			Self::Struct => "mxSTRUCT",
			Self::Object => "mxOBJECT",
			Self::Char => "mxCHAR",
			Self::Sparse => "mxSPARSE",
			Self::Double => "mxDOUBLE",
			Self::Single => "mxSINGLE",
			Self::Int8 => "mxINT8",
			Self::UInt8 => "mxUINT8",
			Self::Int16 => "mxINT16",
			Self::UInt16 => "mxUINT16",
			Self::Int32 => "mxINT32",
			Self::UInt32 => "mxUINT32",
			Self::Int64 => "mxINT64",
			Self::UInt64 => "mxUINT64",
		}
	}

	/// Human-readable label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Cell => "Cell array",
			Self::Struct => "Structure",
			Self::Object => "Object",
			Self::Char => "Character array",
			Self::Sparse => "Sparse array",
			Self::Double => "Double precision array",
			Self::Single => "Single precision array",
			Self::Int8 => "8-bit, signed integer",
			Self::UInt8 => "8-bit, unsigned integer",
			Self::Int16 => "16-bit, signed integer",
			Self::UInt16 => "16-bit, unsigned integer",
			Self::Int32 => "32-bit, signed integer",
			Self::UInt32 => "32-bit, unsigned integer",
			Self::Int64 => "64-bit, signed integer",
			Self::UInt64 => "64-bit, unsigned integer",
		}
	}

	/// Return `true` for the eight integer classes.
	pub fn is_integer(self) -> bool {
		matches!(
			self,
			Self::Int8 | Self::UInt8 | Self::Int16 | Self::UInt16 | Self::Int32 | Self::UInt32 | Self::Int64 | Self::UInt64
		)
	}

	/// Return `true` for double and single.
	pub fn is_float(self) -> bool {
		matches!(self, Self::Double | Self::Single)
	}

	/// Element type MATLAB writes for this class before storage narrowing.
	pub fn native_data_type(self) -> Option<DataType> {
		Some(match self {
			Self::Char => DataType::UInt16,
			Self::Double => DataType::Double,
			Self::Single => DataType::Single,
			Self::Int8 => DataType::Int8,
			Self::UInt8 => DataType::UInt8,
			Self::Int16 => DataType::Int16,
			Self::UInt16 => DataType::UInt16,
			Self::Int32 => DataType::Int32,
			Self::UInt32 => DataType::UInt32,
			Self::Int64 => DataType::Int64,
			Self::UInt64 => DataType::UInt64,
			Self::Cell | Self::Struct | Self::Object | Self::Sparse => return None,
		})
	}
}

impl fmt::Display for MatrixClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests;
