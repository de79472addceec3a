use matdoc::mat::{Data, Matrix, MatrixClass, MatrixValue};
use serde_json::{Value, json};

use crate::cmd::util::{dims_label, flag_names};

/// Output truncation limits for decoded matrices.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of numeric values or cells printed per matrix.
	pub max_items: usize,
	/// Maximum number of characters printed for char matrices.
	pub max_string_len: usize,
	/// Maximum recursive print depth for nested cells.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_items: 16,
			max_string_len: 200,
			max_print_depth: 6,
		}
	}
}

/// Print one matrix tree to stdout.
pub fn print_matrix(matrix: &Matrix, options: PrintOptions) {
	let mut lines = Vec::new();
	render_matrix(matrix, 0, 0, options, &mut lines);
	for line in lines {
		println!("{line}");
	}
}

/// Render one matrix tree as indented text lines.
pub fn render_matrix(matrix: &Matrix, indent: usize, depth: u32, options: PrintOptions, lines: &mut Vec<String>) {
	let pad = " ".repeat(indent);
	let name = if matrix.name.is_empty() { "<anon>" } else { matrix.name.as_str() };
	let flags = flag_names(matrix.flags);
	let flags = if flags.is_empty() { String::new() } else { format!(" [{}]", flags.join(",")) };
	let head = format!("{pad}{name}: {} {}{flags}", matrix.class, dims_label(&matrix.dimensions));

	match &matrix.value {
		MatrixValue::Numeric(data) if matrix.class == MatrixClass::Char => match matrix.to_text() {
			Ok(text) => lines.push(format!("{head} = \"{}\"", truncate(&text, options.max_string_len))),
			Err(_) => lines.push(format!("{head} = {}", numeric_list(data, options.max_items))),
		},
		MatrixValue::Numeric(data) => lines.push(format!("{head} = {}", numeric_list(data, options.max_items))),
		MatrixValue::Cell(items) if depth >= options.max_print_depth => {
			lines.push(format!("{head} {{ ... {} cells }}", items.len()));
		}
		MatrixValue::Cell(items) => {
			lines.push(format!("{head} {{"));
			for item in items.iter().take(options.max_items) {
				render_matrix(item, indent + 2, depth + 1, options, lines);
			}
			if items.len() > options.max_items {
				lines.push(format!("{pad}  ... {} more", items.len() - options.max_items));
			}
			lines.push(format!("{pad}}}"));
		}
	}
}

/// Convert one matrix tree to a JSON value with the same truncation rules.
pub fn matrix_json(matrix: &Matrix, depth: u32, options: PrintOptions) -> Value {
	let value = match &matrix.value {
		MatrixValue::Numeric(_) if matrix.class == MatrixClass::Char => match matrix.to_text() {
			Ok(text) => Value::String(truncate(&text, options.max_string_len)),
			Err(_) => Value::Null,
		},
		MatrixValue::Numeric(data) => Value::Array(numeric_json(data, options.max_items)),
		MatrixValue::Cell(_) if depth >= options.max_print_depth => Value::Null,
		MatrixValue::Cell(items) => Value::Array(items.iter().take(options.max_items).map(|item| matrix_json(item, depth + 1, options)).collect()),
	};

	json!({
		"name": matrix.name,
		"class": matrix.class.name(),
		"dimensions": matrix.dimensions,
		"flags": flag_names(matrix.flags),
		"len": value_len(matrix),
		"value": value,
	})
}

fn value_len(matrix: &Matrix) -> usize {
	match &matrix.value {
		MatrixValue::Numeric(data) => data.len(),
		MatrixValue::Cell(items) => items.len(),
	}
}

fn numeric_list(data: &Data, max_items: usize) -> String {
	let mut items = numeric_items(data, max_items);
	if data.len() > max_items {
		items.push(format!("... {} more", data.len() - max_items));
	}
	format!("[{}]", items.join(", "))
}

fn numeric_items(data: &Data, max_items: usize) -> Vec<String> {
	fn take<T: ToString>(values: &[T], max_items: usize) -> Vec<String> {
		values.iter().take(max_items).map(ToString::to_string).collect()
	}

	match data {
		Data::I8(v) => take(v, max_items),
		Data::U8(v) => take(v, max_items),
		Data::I16(v) => take(v, max_items),
		Data::U16(v) => take(v, max_items),
		Data::I32(v) => take(v, max_items),
		Data::U32(v) => take(v, max_items),
		Data::I64(v) => take(v, max_items),
		Data::U64(v) => take(v, max_items),
		Data::F32(v) => take(v, max_items),
		Data::F64(v) => take(v, max_items),
		Data::Utf8(v) | Data::Utf16(v) => v.iter().take(max_items).map(|ch| format!("{ch:?}")).collect(),
	}
}

fn numeric_json(data: &Data, max_items: usize) -> Vec<Value> {
	fn take<T: Copy + Into<Value>>(values: &[T], max_items: usize) -> Vec<Value> {
		values.iter().take(max_items).map(|item| (*item).into()).collect()
	}

	match data {
		Data::I8(v) => take(v, max_items),
		Data::U8(v) => take(v, max_items),
		Data::I16(v) => take(v, max_items),
		Data::U16(v) => take(v, max_items),
		Data::I32(v) => take(v, max_items),
		Data::U32(v) => take(v, max_items),
		Data::I64(v) => take(v, max_items),
		Data::U64(v) => take(v, max_items),
		Data::F32(v) => take(v, max_items),
		Data::F64(v) => take(v, max_items),
		Data::Utf8(v) | Data::Utf16(v) => v.iter().take(max_items).map(|ch| Value::String(ch.to_string())).collect(),
	}
}

fn truncate(input: &str, max_chars: usize) -> String {
	if input.chars().count() <= max_chars {
		return input.to_owned();
	}
	let mut out: String = input.chars().take(max_chars).collect();
	out.push_str("...");
	out
}

#[cfg(test)]
mod tests;
