use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use matdoc::mat::{ArrayFlags, DecodeOptions, MatFile, Result};
use serde::Serialize;

/// Open a file with default or strict decoder limits.
pub(crate) fn open_file(path: &Path, strict: bool) -> Result<MatFile<BufReader<File>>> {
	let options = if strict { DecodeOptions::strict() } else { DecodeOptions::default() };
	MatFile::open_with_options(path, options)
}

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}

/// Render dimensions as `RxCx...`.
pub(crate) fn dims_label(dimensions: &[i32]) -> String {
	dimensions.iter().map(i32::to_string).collect::<Vec<_>>().join("x")
}

/// Render set storage flags as a comma list, `-` when none are set.
pub(crate) fn flags_label(flags: ArrayFlags) -> String {
	let names = flag_names(flags);
	if names.is_empty() { "-".to_owned() } else { names.join(",") }
}

/// Names of the set storage flags.
pub(crate) fn flag_names(flags: ArrayFlags) -> Vec<&'static str> {
	let mut out = Vec::new();
	if flags.logical {
		out.push("logical");
	}
	if flags.global {
		out.push("global");
	}
	if flags.complex {
		out.push("complex");
	}
	out
}
