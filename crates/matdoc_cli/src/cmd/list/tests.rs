use matdoc_testkit::{MatrixBuilder, Order, char_matrix, compressed, mat_file, mx, write_fixture};

use crate::cmd::test_support::{run_matdoc, run_matdoc_json};

fn fixture(name: &str) -> String {
	let order = Order::Little;
	let mask = MatrixBuilder::new(order, mx::UINT8).name("mask").logical().dims(&[2, 2]).part(&[1_u8, 0, 0, 1]).build();
	let bytes = mat_file(order, &[compressed(order, &char_matrix(order, "title", "hi")), mask]);
	write_fixture(name, &bytes).to_string_lossy().into_owned()
}

#[test]
fn list_json_rows_are_sorted_by_name() {
	let fixture = fixture("cli_list_json.mat");
	let json = run_matdoc_json(&["list", &fixture, "--json"]);

	let rows = json["variables"].as_array().expect("variables array");
	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0]["name"], "mask");
	assert_eq!(rows[0]["class"], "mxUINT8");
	assert_eq!(rows[0]["dimensions"], serde_json::json!([2, 2]));
	assert_eq!(rows[0]["flags"], serde_json::json!(["logical"]));
	assert_eq!(rows[1]["name"], "title");
	assert_eq!(rows[1]["label"], "Character array");
}

#[test]
fn list_text_has_one_row_per_variable() {
	let fixture = fixture("cli_list_text.mat");
	let output = run_matdoc(&["list", &fixture]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("variables: 2"));
	assert!(stdout.lines().any(|line| line.trim_start().starts_with("mask") && line.contains("2x2") && line.contains("logical")));
	assert!(stdout.lines().any(|line| line.trim_start().starts_with("title") && line.contains("mxCHAR")));
}
