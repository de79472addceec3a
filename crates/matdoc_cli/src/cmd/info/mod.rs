use std::path::PathBuf;

use matdoc::mat::Result;

use crate::cmd::util::{emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub strict: bool,
}

/// Print header fields and registry size.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, strict } = args;

	let mut file = open_file(&path, strict)?;
	let variable_count = file.variables()?.len();
	let header = &file.header;
	let created = header.created.map(|stamp| stamp.format("%Y-%m-%dT%H:%M:%S").to_string());

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			description: header.to_string(),
			level: header.level.clone(),
			platform: header.platform.clone(),
			created,
			created_text: header.created_text.clone(),
			version: header.version,
			endianness: header.endianness.as_str(),
			variable_count,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("description: {header}");
	println!("level: {}", header.level);
	println!("platform: {}", header.platform);
	println!("created: {}", created.as_deref().unwrap_or("-"));
	println!("version: {:#06x}", header.version);
	println!("endianness: {}", header.endianness.as_str());
	println!("variable_count: {variable_count}");

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	description: String,
	level: String,
	platform: String,
	created: Option<String>,
	created_text: String,
	version: u16,
	endianness: &'static str,
	variable_count: usize,
}

#[cfg(test)]
mod tests;
