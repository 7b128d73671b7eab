use crate::bind::{Mapping, Scalar, Value};

#[test]
fn kind_names_every_shape() {
	assert_eq!(Value::Mapping(Mapping::new()).kind(), "mapping");
	assert_eq!(Value::Sequence(Vec::new()).kind(), "sequence");
	assert_eq!(Value::from(7).kind(), "int");
	assert_eq!(Value::from("seven").kind(), "string");
	assert_eq!(Value::Scalar(Scalar::Bytes(vec![0xff])).kind(), "bytes");
	assert_eq!(Value::from(true).kind(), "bool");
	assert_eq!(Value::from(0.5).kind(), "float");
}

#[test]
fn byte_strings_become_text_only_when_utf8() {
	assert_eq!(Value::from(b"spam".to_vec()), Value::from("spam"));
	assert_eq!(Value::from(vec![0xde, 0xad]), Value::Scalar(Scalar::Bytes(vec![0xde, 0xad])));
}

#[test]
fn accessors_match_only_their_shape() {
	let value = Value::Sequence(vec![Value::from(1)]);
	assert!(value.as_mapping().is_none());
	assert!(value.as_scalar().is_none());
	assert_eq!(value.as_sequence().map(<[Value]>::len), Some(1));
}

#[test]
fn serializes_untagged() {
	let mut map = Mapping::new();
	map.insert("n".to_owned(), Value::from(3));
	map.insert("xs".to_owned(), Value::Sequence(vec![Value::from("a"), Value::from(false)]));

	let json = serde_json::to_value(Value::Mapping(map)).expect("value serializes");
	assert_eq!(json, serde_json::json!({ "n": 3, "xs": ["a", false] }));
}
