use std::path::PathBuf;

use matdoc::mat::{MatError, Matrix, Result};

use crate::cmd::print::{PrintOptions, matrix_json, print_matrix};
use crate::cmd::util::{emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "var")]
	pub var_name: String,
	#[arg(long = "cell")]
	pub cells: Vec<usize>,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub strict: bool,
}

/// Print one variable, optionally following a cell index path.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		var_name,
		cells,
		max_items,
		max_depth,
		json,
		strict,
	} = args;

	let mut file = open_file(&path, strict)?;
	let root = file.require_variable(&var_name)?;
	let target = follow_cells(root, &cells)?;
	let selector = selector_label(&var_name, &cells);

	let mut print = PrintOptions::default();
	if let Some(max_items) = max_items {
		print.max_items = max_items;
	}
	if let Some(max_depth) = max_depth {
		print.max_print_depth = max_depth;
	}

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			selector,
			matrix: matrix_json(target, 0, print),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("selector: {selector}");
	print_matrix(target, print);
	Ok(())
}

fn follow_cells<'a>(root: &'a Matrix, path: &[usize]) -> Result<&'a Matrix> {
	let mut current = root;
	let mut walked = Vec::with_capacity(path.len());
	for index in path {
		walked.push(*index);
		current = current.cell(*index).ok_or_else(|| MatError::VariableNotFound {
			name: selector_label(&root.name, &walked),
		})?;
	}
	Ok(current)
}

fn selector_label(name: &str, cells: &[usize]) -> String {
	let mut out = name.to_owned();
	for index in cells {
		out.push_str(&format!("{{{index}}}"));
	}
	out
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	selector: String,
	matrix: serde_json::Value,
}

#[cfg(test)]
mod tests;
