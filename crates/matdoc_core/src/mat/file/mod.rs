use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::mat::{ByteReader, DecodeOptions, ElementReader, MatError, MatHeader, Matrix, Result};

/// Lifecycle of a file's variable registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
	/// Element stream has not been decoded yet.
	Unread,
	/// Element stream was decoded and every variable is indexed.
	Read,
}

/// Opened `.mat` container with parsed header and a lazily filled variable registry.
///
/// The first lookup decodes the whole element stream once; later lookups are
/// served from the registry without touching the source again. A failed pass
/// leaves the registry [`RegistryState::Unread`].
pub struct MatFile<R> {
	/// Parsed file header.
	pub header: MatHeader,
	source: R,
	options: DecodeOptions,
	state: RegistryState,
	variables: HashMap<String, Matrix>,
}

impl MatFile<BufReader<File>> {
	/// Open a file from disk and parse its header.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with_options(path, DecodeOptions::default())
	}

	/// Open a file from disk with explicit decoder limits.
	pub fn open_with_options(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
		let file = File::open(path)?;
		Self::from_reader_with_options(BufReader::new(file), options)
	}
}

impl<R: Read> MatFile<R> {
	/// Parse the header from `source`; the element stream is left unread.
	pub fn from_reader(source: R) -> Result<Self> {
		Self::from_reader_with_options(source, DecodeOptions::default())
	}

	/// Parse the header from `source` with explicit decoder limits.
	pub fn from_reader_with_options(source: R, options: DecodeOptions) -> Result<Self> {
		let mut reader = ByteReader::new(source);
		let header = MatHeader::read(&mut reader)?;

		Ok(Self {
			header,
			source: reader.into_inner(),
			options,
			state: RegistryState::Unread,
			variables: HashMap::new(),
		})
	}

	/// Current registry lifecycle state.
	pub fn state(&self) -> RegistryState {
		self.state
	}

	/// Return `true` once the element stream has been decoded.
	pub fn is_read(&self) -> bool {
		self.state == RegistryState::Read
	}

	/// Decode the element stream if that has not happened yet.
	pub fn load(&mut self) -> Result<()> {
		if self.is_read() {
			return Ok(());
		}

		debug!("decoding element stream from offset {}", MatHeader::SIZE);
		let reader = ByteReader::with_offset(&mut self.source, MatHeader::SIZE as u64);
		let mut variables = HashMap::new();
		for element in ElementReader::nested(reader, self.header.endianness, &self.options, 0) {
			let matrix = element?.into_matrix().map_err(|other| MatError::TopLevelNotMatrix { data_type: other.data_type() })?;
			debug!("registered variable {:?}: {} {:?}", matrix.name, matrix.class, matrix.dimensions);
			if let Some(previous) = variables.insert(matrix.name.clone(), matrix) {
				warn!("duplicate variable {:?}; keeping the later definition", previous.name);
			}
		}

		debug!("decoded {} variables", variables.len());
		self.variables = variables;
		self.state = RegistryState::Read;
		Ok(())
	}

	/// Every variable keyed by name.
	pub fn variables(&mut self) -> Result<&HashMap<String, Matrix>> {
		self.load()?;
		Ok(&self.variables)
	}

	/// Look up a variable by name; `None` when the file has no such variable.
	pub fn variable(&mut self, name: &str) -> Result<Option<&Matrix>> {
		Ok(self.variables()?.get(name))
	}

	/// Look up a variable that must exist.
	pub fn require_variable(&mut self, name: &str) -> Result<&Matrix> {
		self.variable(name)?.ok_or_else(|| MatError::VariableNotFound { name: name.to_owned() })
	}

	/// Variable names in sorted order.
	pub fn variable_names(&mut self) -> Result<Vec<&str>> {
		let mut names: Vec<&str> = self.variables()?.keys().map(String::as_str).collect();
		names.sort_unstable();
		Ok(names)
	}

	/// Consume the file and return its variables.
	pub fn into_variables(mut self) -> Result<HashMap<String, Matrix>> {
		self.load()?;
		Ok(self.variables)
	}
}
