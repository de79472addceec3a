use std::path::PathBuf;

use matdoc::mat::Result;

use crate::cmd::util::{dims_label, emit_json, flag_names, flags_label, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub strict: bool,
}

/// List every variable with class, dimensions, and flags.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, strict } = args;

	let mut file = open_file(&path, strict)?;
	let variables = file.variables()?;
	let mut names: Vec<&String> = variables.keys().collect();
	names.sort();

	if json {
		let payload = ListJson {
			path: path.display().to_string(),
			variables: names
				.iter()
				.filter_map(|name| variables.get(*name))
				.map(|matrix| VariableJson {
					name: matrix.name.clone(),
					class: matrix.class.name(),
					label: matrix.class.label(),
					dimensions: matrix.dimensions.clone(),
					flags: flag_names(matrix.flags),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("variables: {}", names.len());
	for matrix in names.iter().filter_map(|name| variables.get(*name)) {
		println!(
			"  {:<24} {:<9} {:<16} {}",
			matrix.name,
			matrix.class.name(),
			dims_label(&matrix.dimensions),
			flags_label(matrix.flags)
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct VariableJson {
	name: String,
	class: &'static str,
	label: &'static str,
	dimensions: Vec<i32>,
	flags: Vec<&'static str>,
}

#[derive(serde::Serialize)]
struct ListJson {
	path: String,
	variables: Vec<VariableJson>,
}

#[cfg(test)]
mod tests;
