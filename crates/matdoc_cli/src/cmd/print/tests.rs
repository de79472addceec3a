use matdoc::mat::{ArrayFlags, Data, Matrix, MatrixClass, MatrixValue};

use super::{PrintOptions, matrix_json, render_matrix, truncate};

fn numeric(name: &str, dimensions: Vec<i32>, data: Data) -> Matrix {
	Matrix {
		name: name.to_owned(),
		dimensions,
		class: MatrixClass::Double,
		flags: ArrayFlags::default(),
		value: MatrixValue::Numeric(data),
	}
}

fn text(value: &str) -> Matrix {
	let units: Vec<u16> = value.encode_utf16().collect();
	Matrix {
		name: String::new(),
		dimensions: vec![1, units.len() as i32],
		class: MatrixClass::Char,
		flags: ArrayFlags::default(),
		value: MatrixValue::Numeric(Data::U16(units)),
	}
}

fn cell(name: &str, items: Vec<Matrix>) -> Matrix {
	Matrix {
		name: name.to_owned(),
		dimensions: vec![1, items.len() as i32],
		class: MatrixClass::Cell,
		flags: ArrayFlags::default(),
		value: MatrixValue::Cell(items),
	}
}

fn render(matrix: &Matrix, options: PrintOptions) -> String {
	let mut lines = Vec::new();
	render_matrix(matrix, 0, 0, options, &mut lines);
	lines.iter().map(|line| format!("{line}\n")).collect()
}

#[test]
fn numeric_values_are_truncated() {
	let matrix = numeric("v", vec![1, 5], Data::F64(vec![1.0, 2.5, 3.0, 4.0, 5.0]));
	let options = PrintOptions {
		max_items: 3,
		..PrintOptions::default()
	};
	assert_eq!(render(&matrix, options), "v: mxDOUBLE 1x5 = [1, 2.5, 3, ... 2 more]\n");
}

#[test]
fn cells_render_nested_and_anonymous_children() {
	let matrix = cell("Z", vec![text("someString"), numeric("", vec![1, 1], Data::F64(vec![123.0]))]);
	let rendered = render(&matrix, PrintOptions::default());
	let expected = "Z: mxCELL 1x2 {\n  <anon>: mxCHAR 1x10 = \"someString\"\n  <anon>: mxDOUBLE 1x1 = [123]\n}\n";
	assert_eq!(rendered, expected);
}

#[test]
fn cells_stop_at_print_depth() {
	let matrix = cell("outer", vec![cell("", vec![text("deep")])]);
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let rendered = render(&matrix, options);
	assert!(rendered.contains("<anon>: mxCELL 1x1 { ... 1 cells }"), "unexpected output: {rendered}");
	assert!(!rendered.contains("deep"));
}

#[test]
fn flags_are_annotated() {
	let mut matrix = numeric("g", vec![1, 1], Data::U8(vec![1]));
	matrix.flags.global = true;
	matrix.flags.logical = true;
	assert_eq!(render(&matrix, PrintOptions::default()), "g: mxDOUBLE 1x1 [logical,global] = [1]\n");
}

#[test]
fn json_mirrors_matrix_tree() {
	let matrix = cell("Z", vec![text("someString"), numeric("", vec![1, 1], Data::F64(vec![123.0]))]);
	let json = matrix_json(&matrix, 0, PrintOptions::default());

	assert_eq!(json["name"], "Z");
	assert_eq!(json["class"], "mxCELL");
	assert_eq!(json["len"], 2);
	assert_eq!(json["value"][0]["value"], "someString");
	assert_eq!(json["value"][1]["value"][0], 123.0);
	assert_eq!(json["value"][1]["dimensions"], serde_json::json!([1, 1]));
}

#[test]
fn truncate_counts_characters() {
	assert_eq!(truncate("héllo", 10), "héllo");
	assert_eq!(truncate("héllo", 2), "hé...");
}
