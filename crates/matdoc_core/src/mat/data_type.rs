use std::fmt;

/// Element data type codes from the Level-5 type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
	/// 8-bit signed.
	Int8,
	/// 8-bit unsigned.
	UInt8,
	/// 16-bit signed.
	Int16,
	/// 16-bit unsigned.
	UInt16,
	/// 32-bit signed.
	Int32,
	/// 32-bit unsigned.
	UInt32,
	/// IEEE 754 single.
	Single,
	/// IEEE 754 double.
	Double,
	/// 64-bit signed.
	Int64,
	/// 64-bit unsigned.
	UInt64,
	/// Nested MATLAB array.
	Matrix,
	/// zlib-compressed element stream.
	Compressed,
	/// UTF-8 character data.
	Utf8,
	/// UTF-16 character data.
	Utf16,
	/// UTF-32 character data.
	Utf32,
}

impl DataType {
	/// Map a raw type code to a table entry.
	///
	/// Codes 8, 10 and 11 are reserved by the format and map to `None`.
	pub fn from_code(code: u32) -> Option<Self> {
		Some(match code {
			1 => Self::Int8,
			2 => Self::UInt8,
			3 => Self::Int16,
			4 => Self::UInt16,
			5 => Self::Int32,
			6 => Self::UInt32,
			7 => Self::Single,
			9 => Self::Double,
			12 => Self::Int64,
			13 => Self::UInt64,
			14 => Self::Matrix,
			15 => Self::Compressed,
			16 => Self::Utf8,
			17 => Self::Utf16,
			18 => Self::Utf32,
			_ => return None,
		})
	}

	/// Raw type code as stored in tags.
	pub fn code(self) -> u32 {
		match self {
			Self::Int8 => 1,
			Self::UInt8 => 2,
			Self::Int16 => 3,
			Self::UInt16 => 4,
			Self::Int32 => 5,
			Self::UInt32 => 6,
			Self::Single => 7,
			Self::Double => 9,
			Self::Int64 => 12,
			Self::UInt64 => 13,
			Self::Matrix => 14,
			Self::Compressed => 15,
			Self::Utf8 => 16,
			Self::Utf16 => 17,
			Self::Utf32 => 18,
		}
	}

	/// Format name of the type (`miINT8`, `miMATRIX`, ...).
	pub fn name(self) -> &'static str {
		match self {
			Self::Int8 => "miINT8",
			Self::UInt8 => "miUINT8",
			Self::Int16 => "miINT16",
			Self::UInt16 => "miUINT16",
			Self::Int32 => "miINT32",
			Self::UInt32 => "miUINT32",
			Self::Single => "miSINGLE",
			Self::Double => "miDOUBLE",
			Self::Int64 => "miINT64",
			Self::UInt64 => "miUINT64",
			Self::Matrix => "miMATRIX",
			Self::Compressed => "miCOMPRESSED",
			Self::Utf8 => "miUTF8",
			Self::Utf16 => "miUTF16",
			Self::Utf32 => "miUTF32",
		}
	}

	/// Element byte width, or `None` for variable-length container types.
	pub fn fixed_width(self) -> Option<usize> {
		match self {
			Self::Int8 | Self::UInt8 | Self::Utf8 => Some(1),
			Self::Int16 | Self::UInt16 | Self::Utf16 => Some(2),
			Self::Int32 | Self::UInt32 | Self::Utf32 | Self::Single => Some(4),
			Self::Double | Self::Int64 | Self::UInt64 => Some(8),
			Self::Matrix | Self::Compressed => None,
		}
	}

	/// Element byte width.
	///
	/// # Panics
	///
	/// Panics for [`DataType::Matrix`] and [`DataType::Compressed`]; their length is
	/// carried by the tag and callers must not ask for a width.
	pub fn byte_width(self) -> usize {
		match self.fixed_width() {
			Some(width) => width,
			None => panic!("cannot get byte width of variable length type {self}"),
		}
	}

	/// Return `true` for the two container types.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Matrix | Self::Compressed)
	}
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
