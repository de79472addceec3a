use std::io::{ErrorKind, Read};

use crate::mat::{Endianness, MatError, Result};

/// Upper bound on buffer capacity reserved up front from a declared length.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Position-tracking reader over any byte source.
///
/// Distinguishes a clean end of input (nothing left before a unit) from a
/// truncated unit, which is always an error.
pub struct ByteReader<R> {
	inner: R,
	pos: u64,
}

impl<R: Read> ByteReader<R> {
	/// Wrap a reader at position 0.
	pub fn new(inner: R) -> Self {
		Self::with_offset(inner, 0)
	}

	/// Wrap a reader that has already been advanced to stream offset `pos`.
	pub fn with_offset(inner: R, pos: u64) -> Self {
		Self { inner, pos }
	}

	/// Return bytes consumed so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Unwrap the inner reader.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Fill `buf` completely.
	///
	/// Returns `Ok(false)` when the source was already exhausted, and
	/// [`MatError::UnexpectedEof`] when it ran out partway through.
	pub fn read_unit(&mut self, buf: &mut [u8]) -> Result<bool> {
		let at = self.pos;
		let got = self.fill(buf)?;
		if got == 0 && !buf.is_empty() {
			return Ok(false);
		}
		if got < buf.len() {
			return Err(MatError::UnexpectedEof { at, need: buf.len(), got });
		}
		Ok(true)
	}

	/// Read exactly `n` bytes.
	pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
		let at = self.pos;
		let mut buf = Vec::with_capacity(n.min(PREALLOC_LIMIT));
		let got = (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
		self.pos += got as u64;
		if got < n {
			return Err(MatError::UnexpectedEof { at, need: n, got });
		}
		Ok(buf)
	}

	/// Discard up to `n` bytes, stopping quietly at end of input.
	pub fn skip_lenient(&mut self, n: usize) -> Result<usize> {
		let mut buf = [0_u8; 8];
		let mut skipped = 0;
		while skipped < n {
			let take = (n - skipped).min(buf.len());
			let got = self.fill(&mut buf[..take])?;
			skipped += got;
			if got < take {
				break;
			}
		}
		Ok(skipped)
	}

	fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.inner.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(read) => filled += read,
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(err) => return Err(err.into()),
			}
		}
		self.pos += filled as u64;
		Ok(filled)
	}
}

/// Round `len` up to the next multiple of 8.
pub(crate) fn pad_to_8(len: usize) -> usize {
	len.div_ceil(8) * 8
}

/// Read a little-endian `u16` from the first two bytes, ignoring file order.
pub(crate) fn u16_le(raw: &[u8]) -> u16 {
	u16::from_le_bytes([raw[0], raw[1]])
}

/// Read a `u16` from the first two bytes.
pub(crate) fn u16_at(raw: &[u8], endianness: Endianness) -> u16 {
	let buf = [raw[0], raw[1]];
	match endianness {
		Endianness::Little => u16::from_le_bytes(buf),
		Endianness::Big => u16::from_be_bytes(buf),
	}
}

/// Read a `u32` from the first four bytes.
pub(crate) fn u32_at(raw: &[u8], endianness: Endianness) -> u32 {
	let mut buf = [0_u8; 4];
	buf.copy_from_slice(&raw[..4]);
	match endianness {
		Endianness::Little => u32::from_le_bytes(buf),
		Endianness::Big => u32::from_be_bytes(buf),
	}
}

/// Read a `u64` from the first eight bytes.
pub(crate) fn u64_at(raw: &[u8], endianness: Endianness) -> u64 {
	let mut buf = [0_u8; 8];
	buf.copy_from_slice(&raw[..8]);
	match endianness {
		Endianness::Little => u64::from_le_bytes(buf),
		Endianness::Big => u64::from_be_bytes(buf),
	}
}
