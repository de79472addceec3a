use crate::mat::bytes::{u16_at, u32_at, u64_at};
use crate::mat::{Data, DataType, Endianness, MatError, Result};

/// Decode a primitive payload into one value per type-width chunk.
///
/// `bytes` must hold exactly the meaningful payload (no alignment padding) and
/// its length must be a multiple of the type's width.
pub fn decode_payload(data_type: DataType, bytes: &[u8], endianness: Endianness) -> Result<Data> {
	let width = match data_type {
		DataType::Utf32 => return Err(MatError::UnsupportedDataType { data_type }),
		_ => data_type.fixed_width().ok_or(MatError::NotPrimitive { data_type })?,
	};
	if bytes.len() % width != 0 {
		return Err(MatError::MisalignedPayload {
			data_type,
			len: bytes.len(),
			width,
		});
	}

	let chunks = bytes.chunks_exact(width);
	Ok(match data_type {
		DataType::Int8 => Data::I8(bytes.iter().map(|b| *b as i8).collect()),
		DataType::UInt8 => Data::U8(bytes.to_vec()),
		DataType::Int16 => Data::I16(chunks.map(|c| u16_at(c, endianness) as i16).collect()),
		DataType::UInt16 => Data::U16(chunks.map(|c| u16_at(c, endianness)).collect()),
		DataType::Int32 => Data::I32(chunks.map(|c| u32_at(c, endianness) as i32).collect()),
		DataType::UInt32 => Data::U32(chunks.map(|c| u32_at(c, endianness)).collect()),
		DataType::Int64 => Data::I64(chunks.map(|c| u64_at(c, endianness) as i64).collect()),
		DataType::UInt64 => Data::U64(chunks.map(|c| u64_at(c, endianness)).collect()),
		DataType::Single => Data::F32(chunks.map(|c| f32::from_bits(u32_at(c, endianness))).collect()),
		DataType::Double => Data::F64(chunks.map(|c| f64::from_bits(u64_at(c, endianness))).collect()),
		// One code point per byte; multi-byte sequences are not reassembled.
		DataType::Utf8 => Data::Utf8(bytes.iter().map(|b| utf8_unit(*b)).collect()),
		DataType::Utf16 => Data::Utf16(chunks.map(|c| utf16_unit(u16_at(c, endianness))).collect()),
		DataType::Utf32 | DataType::Matrix | DataType::Compressed => return Err(MatError::NotPrimitive { data_type }),
	})
}

fn utf8_unit(byte: u8) -> char {
	if byte.is_ascii() { char::from(byte) } else { char::REPLACEMENT_CHARACTER }
}

fn utf16_unit(unit: u16) -> char {
	char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}
