use std::fmt;
use std::io::Read;

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::mat::bytes::u16_at;
use crate::mat::{ByteReader, MatError, Result};

/// ANSI-C timestamp layout used in the header text (`Mon Jan  2 15:04:05 2006`).
const ANSI_C_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Byte order of every multi-byte integer after the header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
	/// Little-endian byte order (`IM` marker).
	Little,
	/// Big-endian byte order (`MI` marker).
	Big,
}

impl Endianness {
	/// Resolve the 2-character marker stored in header bytes 126..128.
	pub fn from_marker(marker: [u8; 2]) -> Result<Self> {
		match &marker {
			b"IM" => Ok(Self::Little),
			b"MI" => Ok(Self::Big),
			_ => Err(MatError::InvalidByteOrder { marker }),
		}
	}

	/// Resolve byte order from the 4-byte version/endian flag field.
	pub fn from_flag_field(field: [u8; 4]) -> Result<Self> {
		Self::from_marker([field[2], field[3]])
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

/// Parsed Level-5 file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatHeader {
	/// Level token from the description text, always `5.0`.
	pub level: String,
	/// Platform the file was written on.
	pub platform: String,
	/// Creation timestamp when it parsed as ANSI-C time.
	pub created: Option<NaiveDateTime>,
	/// Raw trimmed timestamp text.
	pub created_text: String,
	/// Version word from bytes 124..126, read in file byte order.
	pub version: u16,
	/// File byte order.
	pub endianness: Endianness,
}

impl MatHeader {
	/// Total header size in bytes.
	pub const SIZE: usize = 128;
	/// Length of the ASCII description text.
	pub const TEXT_LEN: usize = 116;
	/// Length of the subsystem data offset field.
	pub const SUBSYSTEM_OFFSET_LEN: usize = 8;

	/// Read and parse the 128-byte header from a byte source.
	pub fn read<R: Read>(reader: &mut ByteReader<R>) -> Result<Self> {
		let mut buf = [0_u8; Self::SIZE];
		if !reader.read_unit(&mut buf)? {
			return Err(MatError::UnexpectedEof { at: 0, need: Self::SIZE, got: 0 });
		}
		Self::parse(&buf)
	}

	/// Parse a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if bytes.len() < Self::SIZE {
			return Err(MatError::UnexpectedEof {
				at: 0,
				need: Self::SIZE,
				got: bytes.len(),
			});
		}

		let text = &bytes[..Self::TEXT_LEN];
		let rest = text.strip_prefix(b"MATLAB ").ok_or(MatError::InvalidHeader { reason: "missing MATLAB prefix" })?;
		let rest = String::from_utf8_lossy(rest);

		let (level, rest) = rest.split_once(' ').ok_or(MatError::InvalidHeader { reason: "missing level" })?;
		let level = level.trim();
		if level != "5.0" {
			return Err(MatError::UnsupportedLevel { level: level.to_owned() });
		}

		let rest = rest.strip_prefix("MAT-file").ok_or(MatError::InvalidHeader { reason: "missing MAT-file marker" })?;
		let rest = rest.strip_prefix(',').unwrap_or(rest).trim_start();
		let rest = rest.strip_prefix("Platform:").unwrap_or(rest);
		let (platform, rest) = rest.split_once(',').ok_or(MatError::InvalidHeader { reason: "unterminated platform" })?;
		let created_text = parse_created_text(rest);
		let created = parse_created(&created_text);

		let flags = &bytes[Self::TEXT_LEN + Self::SUBSYSTEM_OFFSET_LEN..Self::SIZE];
		let endianness = Endianness::from_flag_field([flags[0], flags[1], flags[2], flags[3]])?;
		let version = u16_at(flags, endianness);

		let header = Self {
			level: level.to_owned(),
			platform: platform.trim().to_owned(),
			created,
			created_text,
			version,
			endianness,
		};
		debug!("parsed header: platform={} byte_order={} version={:#06x}", header.platform, endianness.as_str(), version);
		Ok(header)
	}
}

impl fmt::Display for MatHeader {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MATLAB {} MAT-file, Platform: {}, Created on: ", self.level, self.platform)?;
		match self.created {
			Some(created) => write!(f, "{}", created.format(ANSI_C_FORMAT)),
			None => f.write_str(&self.created_text),
		}
	}
}

fn parse_created_text(rest: &str) -> String {
	let Some(stamp) = rest.trim_start().strip_prefix("Created on:") else {
		return String::new();
	};
	stamp.trim_start().chars().take(24).collect::<String>().trim().to_owned()
}

fn parse_created(text: &str) -> Option<NaiveDateTime> {
	if text.is_empty() {
		return None;
	}
	match NaiveDateTime::parse_from_str(text, ANSI_C_FORMAT) {
		Ok(created) => Some(created),
		Err(err) => {
			warn!("tolerating unparseable header timestamp {text:?}: {err}");
			None
		}
	}
}
