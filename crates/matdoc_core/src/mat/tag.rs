use std::io::Read;

use log::trace;

use crate::mat::bytes::{u16_le, u32_at};
use crate::mat::{ByteReader, DataType, Endianness, MatError, Primitive, Result, decode_payload};

/// One decoded 8-byte tag unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
	/// Small data element; the payload was inline and is already decoded.
	Small(Primitive),
	/// Normal tag; `len` payload bytes follow and have not been consumed.
	Normal {
		/// Payload element type.
		data_type: DataType,
		/// Meaningful payload byte count, excluding padding.
		len: u32,
	},
}

impl Tag {
	/// Size of every tag unit in bytes.
	pub const SIZE: usize = 8;

	/// Read the next tag, or `None` on clean end of input.
	///
	/// The first two 16-bit halves are parsed little-endian regardless of file
	/// order; big-endian files swap which half is the type and which the
	/// length. A nonzero length half marks a small data element.
	pub fn read<R: Read>(reader: &mut ByteReader<R>, endianness: Endianness) -> Result<Option<Self>> {
		let at = reader.pos();
		let mut buf = [0_u8; Self::SIZE];
		if !reader.read_unit(&mut buf)? {
			return Ok(None);
		}

		let (mut sde_type, mut sde_len) = (u16_le(&buf[0..2]), u16_le(&buf[2..4]));
		if endianness == Endianness::Big {
			(sde_type, sde_len) = (sde_len, sde_type);
		}

		if sde_len != 0 {
			let data_type = DataType::from_code(u32::from(sde_type)).ok_or(MatError::UnknownDataType {
				code: u32::from(sde_type),
				at,
			})?;
			let width = data_type.fixed_width().ok_or(MatError::InvalidSmallElement { data_type, len: sde_len })?;
			if usize::from(sde_len) > 4 {
				return Err(MatError::InvalidSmallElement { data_type, len: sde_len });
			}
			let count = usize::from(sde_len) / width;
			let data = decode_payload(data_type, &buf[4..4 + count * width], endianness)?;
			trace!("small element at {at}: {data_type} x{count}");
			return Ok(Some(Self::Small(Primitive { data_type, data })));
		}

		let code = u32_at(&buf[0..4], endianness);
		let data_type = DataType::from_code(code).ok_or(MatError::UnknownDataType { code, at })?;
		let len = u32_at(&buf[4..8], endianness);
		trace!("normal tag at {at}: {data_type} len={len}");
		Ok(Some(Self::Normal { data_type, len }))
	}
}
