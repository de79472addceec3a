use matdoc_testkit::{Order, compressed, data_element, double_matrix, element, mi, small_element, tag};

use crate::mat::{Data, DataType, DecodeOptions, Element, ElementReader, ElementValue, Endianness, MatError};

fn read_all(bytes: &[u8], endianness: Endianness) -> crate::mat::Result<Vec<Element>> {
	let options = DecodeOptions::default();
	ElementReader::new(bytes, endianness, &options).read_all()
}

#[test]
fn normal_payload_padding_is_consumed() {
	for len in [0_usize, 1, 5, 7, 8, 9, 15, 16, 17, 24, 31, 32, 33, 63, 64] {
		let payload: Vec<u8> = (0..len as u8).collect();
		let mut bytes = element(Order::Little, mi::UINT8, &payload);
		bytes.extend(small_element(Order::Little, mi::INT8, &[42]));

		let elements = read_all(&bytes, Endianness::Little).expect("stream decodes");
		assert_eq!(elements.len(), 2, "len {len}");
		assert_eq!(elements[0], Element::Normal(crate::mat::Primitive { data_type: DataType::UInt8, data: Data::U8(payload) }));
		assert_eq!(elements[1].value(), ElementValue::Data(&Data::I8(vec![42])));
	}
}

#[test]
fn small_and_normal_expose_same_value() {
	for order in [Order::Little, Order::Big] {
		let endianness = match order {
			Order::Little => Endianness::Little,
			Order::Big => Endianness::Big,
		};
		let mut bytes = data_element(order, &[-3_i16, 4]);
		bytes.extend(element(order, mi::INT16, &matdoc_testkit::encode(order, &[-3_i16, 4])));

		let elements = read_all(&bytes, endianness).expect("stream decodes");
		assert!(elements[0].is_small());
		assert!(!elements[1].is_small());
		assert_eq!(elements[0].data_type(), DataType::Int16);
		assert_eq!(elements[0].value(), elements[1].value());
		assert_eq!(elements[1].value(), ElementValue::Data(&Data::I16(vec![-3, 4])));
	}
}

#[test]
fn zero_length_normal_element_is_empty() {
	let bytes = tag(Order::Little, mi::DOUBLE, 0);
	let elements = read_all(&bytes, Endianness::Little).expect("stream decodes");
	assert_eq!(elements.len(), 1);
	assert_eq!(elements[0].value(), ElementValue::Data(&Data::F64(Vec::new())));
}

#[test]
fn matrix_element_is_decoded() {
	let bytes = double_matrix(Order::Little, "m", &[1, 1], &[2.5]);
	let elements = read_all(&bytes, Endianness::Little).expect("stream decodes");
	assert_eq!(elements.len(), 1);
	assert_eq!(elements[0].data_type(), DataType::Matrix);
	let matrix = elements[0].as_matrix().expect("matrix element");
	assert_eq!(matrix.name, "m");
	assert!(matches!(elements[0].value(), ElementValue::Matrix(_)));
}

#[test]
fn compressed_wrapper_is_transparent() {
	let inner = double_matrix(Order::Big, "z", &[1, 2], &[1.0, 2.0]);
	let bytes = compressed(Order::Big, &inner);

	let wrapped = read_all(&bytes, Endianness::Big).expect("compressed decodes");
	let plain = read_all(&inner, Endianness::Big).expect("plain decodes");
	assert_eq!(wrapped, plain);
}

#[test]
fn compressed_primitive_is_returned_as_is() {
	let bytes = compressed(Order::Little, &data_element(Order::Little, &[1.0_f64, 2.0]));
	let elements = read_all(&bytes, Endianness::Little).expect("compressed decodes");
	assert_eq!(elements.len(), 1);
	assert_eq!(elements[0].value(), ElementValue::Data(&Data::F64(vec![1.0, 2.0])));
}

#[test]
fn truncated_payload_fails_and_stops_iteration() {
	let mut bytes = tag(Order::Little, mi::DOUBLE, 16);
	bytes.extend_from_slice(&[0; 12]);

	let options = DecodeOptions::default();
	let mut reader = ElementReader::new(bytes.as_slice(), Endianness::Little, &options);
	let err = reader.next().expect("one item").expect_err("truncated payload fails");
	assert!(matches!(err, MatError::UnexpectedEof { at: 8, need: 16, got: 12 }));
	assert!(reader.next().is_none(), "iteration is fused after an error");
}

#[test]
fn partial_tag_is_an_error() {
	let err = read_all(&[1, 0, 0, 0], Endianness::Little).expect_err("partial tag fails");
	assert!(matches!(err, MatError::UnexpectedEof { at: 0, need: 8, got: 4 }));
}

#[test]
fn position_tracks_consumed_bytes() {
	let bytes = element(Order::Little, mi::UINT8, &[1, 2, 3]);
	let options = DecodeOptions::default();
	let mut reader = ElementReader::new(bytes.as_slice(), Endianness::Little, &options);
	reader.next_element().expect("element decodes").expect("one element");
	assert_eq!(reader.pos(), 16);
	assert!(reader.next_element().expect("clean end").is_none());
}

#[test]
fn into_matrix_hands_back_primitives() {
	let elements = read_all(&small_element(Order::Little, mi::UINT8, &[1]), Endianness::Little).expect("decodes");
	let element = elements.into_iter().next().expect("one element");
	let back = element.into_matrix().expect_err("primitive is not a matrix");
	assert_eq!(back.data_type(), DataType::UInt8);
}
