/// Runtime limits for element decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting of compressed and cell re-entries into the element reader.
	pub max_depth: u32,
	/// Maximum inflated size of a single compressed element.
	pub max_inflated_bytes: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_inflated_bytes: 512 * 1024 * 1024,
		}
	}
}

impl DecodeOptions {
	/// Preset for untrusted input.
	pub fn strict() -> Self {
		Self {
			max_depth: 16,
			max_inflated_bytes: 64 * 1024 * 1024,
		}
	}
}
