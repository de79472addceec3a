use matdoc_testkit::{Order, cell_matrix, char_matrix, compressed, double_matrix, mat_file, write_fixture};

use super::selector_label;
use crate::cmd::test_support::{run_matdoc, run_matdoc_json};

fn scenario_fixture(name: &str) -> String {
	let order = Order::Little;
	let inner = cell_matrix(order, "", &[1, 1], &[double_matrix(order, "", &[1, 3], &[4.0, 5.0, 6.0])]);
	let z = cell_matrix(order, "Z", &[1, 3], &[char_matrix(order, "", "someString"), double_matrix(order, "", &[1, 1], &[123.0]), inner]);
	write_fixture(name, &mat_file(order, &[compressed(order, &z)])).to_string_lossy().into_owned()
}

#[test]
fn show_json_follows_cell_path() {
	let fixture = scenario_fixture("cli_show_path.mat");
	let json = run_matdoc_json(&["show", &fixture, "--var", "Z", "--cell", "2", "--cell", "0", "--json"]);

	assert_eq!(json["selector"], "Z{2}{0}");
	assert_eq!(json["matrix"]["class"], "mxDOUBLE");
	assert_eq!(json["matrix"]["value"], serde_json::json!([4.0, 5.0, 6.0]));
}

#[test]
fn show_json_renders_whole_cell() {
	let fixture = scenario_fixture("cli_show_cell.mat");
	let json = run_matdoc_json(&["show", &fixture, "--var", "Z", "--max-items", "2", "--json"]);

	let cells = json["matrix"]["value"].as_array().expect("cell values");
	assert_eq!(json["matrix"]["len"], 3);
	assert_eq!(cells.len(), 2);
	assert_eq!(cells[0]["value"], "someString");
	assert_eq!(cells[1]["value"][0], 123.0);
}

#[test]
fn show_text_prints_char_cell() {
	let fixture = scenario_fixture("cli_show_text.mat");
	let output = run_matdoc(&["show", &fixture, "--var", "Z", "--cell", "0"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("selector: Z{0}"));
	assert!(stdout.contains("= \"someString\""));
}

#[test]
fn show_reports_missing_cell_index() {
	let fixture = scenario_fixture("cli_show_missing.mat");
	let output = run_matdoc(&["show", &fixture, "--var", "Z", "--cell", "100"]);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("variable not found: Z{100}"), "unexpected stderr: {stderr}");
}

#[test]
fn selector_label_appends_cell_indices() {
	assert_eq!(selector_label("x", &[]), "x");
	assert_eq!(selector_label("x", &[1, 20]), "x{1}{20}");
}
