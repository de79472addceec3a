use crate::mat::{DataType, MatError, Result};

/// Homogeneous sequence decoded from one primitive element payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
	/// `miINT8` values.
	I8(Vec<i8>),
	/// `miUINT8` values.
	U8(Vec<u8>),
	/// `miINT16` values.
	I16(Vec<i16>),
	/// `miUINT16` values.
	U16(Vec<u16>),
	/// `miINT32` values.
	I32(Vec<i32>),
	/// `miUINT32` values.
	U32(Vec<u32>),
	/// `miINT64` values.
	I64(Vec<i64>),
	/// `miUINT64` values.
	U64(Vec<u64>),
	/// `miSINGLE` values.
	F32(Vec<f32>),
	/// `miDOUBLE` values.
	F64(Vec<f64>),
	/// `miUTF8` code points, one per byte.
	Utf8(Vec<char>),
	/// `miUTF16` code points, one per 16-bit unit.
	Utf16(Vec<char>),
}

impl Data {
	/// Empty sequence for a primitive type.
	pub fn empty(data_type: DataType) -> Result<Self> {
		Ok(match data_type {
			DataType::Int8 => Self::I8(Vec::new()),
			DataType::UInt8 => Self::U8(Vec::new()),
			DataType::Int16 => Self::I16(Vec::new()),
			DataType::UInt16 => Self::U16(Vec::new()),
			DataType::Int32 => Self::I32(Vec::new()),
			DataType::UInt32 => Self::U32(Vec::new()),
			DataType::Int64 => Self::I64(Vec::new()),
			DataType::UInt64 => Self::U64(Vec::new()),
			DataType::Single => Self::F32(Vec::new()),
			DataType::Double => Self::F64(Vec::new()),
			DataType::Utf8 => Self::Utf8(Vec::new()),
			DataType::Utf16 => Self::Utf16(Vec::new()),
			DataType::Utf32 => return Err(MatError::UnsupportedDataType { data_type }),
			DataType::Matrix | DataType::Compressed => return Err(MatError::NotPrimitive { data_type }),
		})
	}

	/// Element type this sequence was decoded from.
	pub fn data_type(&self) -> DataType {
		match self {
			Self::I8(_) => DataType::Int8,
			Self::U8(_) => DataType::UInt8,
			Self::I16(_) => DataType::Int16,
			Self::U16(_) => DataType::UInt16,
			Self::I32(_) => DataType::Int32,
			Self::U32(_) => DataType::UInt32,
			Self::I64(_) => DataType::Int64,
			Self::U64(_) => DataType::UInt64,
			Self::F32(_) => DataType::Single,
			Self::F64(_) => DataType::Double,
			Self::Utf8(_) => DataType::Utf8,
			Self::Utf16(_) => DataType::Utf16,
		}
	}

	/// Number of values.
	pub fn len(&self) -> usize {
		match self {
			Self::I8(v) => v.len(),
			Self::U8(v) => v.len(),
			Self::I16(v) => v.len(),
			Self::U16(v) => v.len(),
			Self::I32(v) => v.len(),
			Self::U32(v) => v.len(),
			Self::I64(v) => v.len(),
			Self::U64(v) => v.len(),
			Self::F32(v) => v.len(),
			Self::F64(v) => v.len(),
			Self::Utf8(v) | Self::Utf16(v) => v.len(),
		}
	}

	/// Return `true` when no values were decoded.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Widen every numeric value to `f64`.
	///
	/// 64-bit integers above 2^53 lose precision. Character data is refused.
	pub fn to_f64_vec(&self) -> Result<Vec<f64>> {
		Ok(match self {
			Self::I8(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::U8(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::I16(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::U16(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::I32(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::U32(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::I64(v) => v.iter().map(|x| *x as f64).collect(),
			Self::U64(v) => v.iter().map(|x| *x as f64).collect(),
			Self::F32(v) => v.iter().map(|x| f64::from(*x)).collect(),
			Self::F64(v) => v.clone(),
			Self::Utf8(_) | Self::Utf16(_) => {
				return Err(MatError::ValueOutOfRange {
					data_type: self.data_type(),
					target: "f64",
				});
			}
		})
	}

	/// Widen every integer value to `i64`.
	///
	/// Float and character storage is refused, as are `u64` values above `i64::MAX`.
	pub fn to_i64_vec(&self) -> Result<Vec<i64>> {
		Ok(match self {
			Self::I8(v) => v.iter().map(|x| i64::from(*x)).collect(),
			Self::U8(v) => v.iter().map(|x| i64::from(*x)).collect(),
			Self::I16(v) => v.iter().map(|x| i64::from(*x)).collect(),
			Self::U16(v) => v.iter().map(|x| i64::from(*x)).collect(),
			Self::I32(v) => v.iter().map(|x| i64::from(*x)).collect(),
			Self::U32(v) => v.iter().map(|x| i64::from(*x)).collect(),
			Self::I64(v) => v.clone(),
			Self::U64(v) => v
				.iter()
				.map(|x| {
					i64::try_from(*x).map_err(|_| MatError::ValueOutOfRange {
						data_type: DataType::UInt64,
						target: "i64",
					})
				})
				.collect::<Result<Vec<_>>>()?,
			Self::F32(_) | Self::F64(_) | Self::Utf8(_) | Self::Utf16(_) => {
				return Err(MatError::ValueOutOfRange {
					data_type: self.data_type(),
					target: "i64",
				});
			}
		})
	}
}
