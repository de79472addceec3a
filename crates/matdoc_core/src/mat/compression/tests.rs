use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use matdoc_testkit::{Order, data_element, double_matrix};

use crate::mat::{DecodeOptions, Element, Endianness, MatError, inflate_element};

fn zlib(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(bytes).expect("zlib encode");
	encoder.finish().expect("zlib finish")
}

#[test]
fn inflates_single_matrix() {
	let packed = zlib(&double_matrix(Order::Little, "a", &[1, 1], &[3.0]));
	let element = inflate_element(&packed, Endianness::Little, &DecodeOptions::default(), 1).expect("inflates");
	let Element::Matrix(matrix) = element else {
		panic!("expected matrix element");
	};
	assert_eq!(matrix.name, "a");
	assert_eq!(matrix.to_f64_vec().expect("floats"), vec![3.0]);
}

#[test]
fn two_inner_elements_fail() {
	let mut inner = data_element(Order::Little, &[1_u8]);
	inner.extend(data_element(Order::Little, &[2_u8]));
	let err = inflate_element(&zlib(&inner), Endianness::Little, &DecodeOptions::default(), 1).expect_err("two elements fail");
	assert!(matches!(err, MatError::CompressedElementCount { count: 2 }));
	assert_eq!(err.category(), crate::mat::ErrorCategory::Invariant);
}

#[test]
fn empty_inflation_fails() {
	let err = inflate_element(&zlib(&[]), Endianness::Little, &DecodeOptions::default(), 1).expect_err("no elements fail");
	assert!(matches!(err, MatError::CompressedElementCount { count: 0 }));
}

#[test]
fn corrupt_stream_is_io_error() {
	let err = inflate_element(&[0xde, 0xad, 0xbe, 0xef], Endianness::Little, &DecodeOptions::default(), 1).expect_err("garbage fails");
	assert!(matches!(err, MatError::Io(_)));
}

#[test]
fn inflated_size_is_capped() {
	let packed = zlib(&data_element(Order::Little, &vec![0_u8; 4096]));
	let options = DecodeOptions {
		max_inflated_bytes: 1024,
		..DecodeOptions::default()
	};
	let err = inflate_element(&packed, Endianness::Little, &options, 1).expect_err("oversized inflation fails");
	assert!(matches!(err, MatError::InflatedTooLarge { limit: 1024 }));
}

#[test]
fn depth_is_checked_before_inflating() {
	let options = DecodeOptions::strict();
	let err = inflate_element(&[], Endianness::Little, &options, options.max_depth + 1).expect_err("too deep");
	assert!(matches!(err, MatError::DecodeDepthExceeded { max_depth: 16 }));
}
