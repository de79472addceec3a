use crate::mat::{DataType, MatError, MatrixClass};

#[test]
fn codes_cover_the_class_table() {
	for code in 1..=15_u8 {
		MatrixClass::from_code(code).expect("known class");
	}
	assert!(matches!(MatrixClass::from_code(0), Err(MatError::UnknownClass { code: 0 })));
	assert!(matches!(MatrixClass::from_code(16), Err(MatError::UnknownClass { code: 16 })));
	assert_eq!(MatrixClass::from_code(6).expect("double"), MatrixClass::Double);
	assert_eq!(MatrixClass::from_code(4).expect("char"), MatrixClass::Char);
}

#[test]
fn families_are_disjoint() {
	for code in 1..=15_u8 {
		let class = MatrixClass::from_code(code).expect("known class");
		assert!(!(class.is_integer() && class.is_float()), "{class}");
	}
	assert!(MatrixClass::UInt64.is_integer());
	assert!(MatrixClass::Single.is_float());
	assert!(!MatrixClass::Char.is_integer());
}

#[test]
fn native_types_follow_class() {
	assert_eq!(MatrixClass::Char.native_data_type(), Some(DataType::UInt16));
	assert_eq!(MatrixClass::Int32.native_data_type(), Some(DataType::Int32));
	assert_eq!(MatrixClass::Cell.native_data_type(), None);
	assert_eq!(MatrixClass::Sparse.native_data_type(), None);
}

#[test]
fn names_and_labels() {
	assert_eq!(MatrixClass::Cell.to_string(), "mxCELL");
	assert_eq!(MatrixClass::Double.label(), "Double precision array");
	assert_eq!(MatrixClass::UInt8.name(), "mxUINT8");
}
