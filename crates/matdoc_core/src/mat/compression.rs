use std::io::Read;

use flate2::read::ZlibDecoder;
use log::debug;

use crate::mat::element::check_depth;
use crate::mat::{ByteReader, DecodeOptions, Element, ElementReader, Endianness, MatError, Result};

/// Inflate a `miCOMPRESSED` payload and decode the single element inside it.
///
/// The compressed wrapper is transport only; the inner element is returned as
/// if it had appeared directly in the stream.
pub fn inflate_element(packed: &[u8], endianness: Endianness, options: &DecodeOptions, depth: u32) -> Result<Element> {
	check_depth(depth, options)?;

	let inflated = inflate(packed, options.max_inflated_bytes)?;
	debug!("inflated compressed element: {} -> {} bytes", packed.len(), inflated.len());

	let mut elements = ElementReader::nested(ByteReader::new(inflated.as_slice()), endianness, options, depth).read_all()?;
	if elements.len() != 1 {
		return Err(MatError::CompressedElementCount { count: elements.len() });
	}
	Ok(elements.remove(0))
}

fn inflate(packed: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = ZlibDecoder::new(packed);
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(MatError::InflatedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests;
