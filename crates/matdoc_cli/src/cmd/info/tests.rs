use matdoc_testkit::{Order, POSIX_HEADER_TEXT, double_matrix, mat_file, write_fixture};

use crate::cmd::test_support::{run_matdoc, run_matdoc_json};

#[test]
fn info_json_reports_header_fields() {
	let order = Order::Big;
	let bytes = mat_file(order, &[double_matrix(order, "a", &[1, 1], &[1.0]), double_matrix(order, "b", &[1, 1], &[2.0])]);
	let fixture = write_fixture("cli_info_be.mat", &bytes);
	let fixture = fixture.to_string_lossy().into_owned();
	let json = run_matdoc_json(&["info", &fixture, "--json"]);

	assert_eq!(json["description"], POSIX_HEADER_TEXT);
	assert_eq!(json["platform"], "posix");
	assert_eq!(json["created"], "2013-02-18T17:12:08");
	assert_eq!(json["version"], 0x0100);
	assert_eq!(json["endianness"], "big");
	assert_eq!(json["variable_count"], 2);
}

#[test]
fn info_text_fails_on_bad_marker() {
	let mut bytes = mat_file(Order::Little, &[]);
	bytes[126..128].copy_from_slice(b"XX");
	let fixture = write_fixture("cli_info_bad_marker.mat", &bytes);
	let fixture = fixture.to_string_lossy().into_owned();
	let output = run_matdoc(&["info", &fixture]);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: invalid byte order marker"), "unexpected stderr: {stderr}");
}
