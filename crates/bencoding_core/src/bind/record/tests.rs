use std::collections::HashMap;
use std::path::PathBuf;

use crate::bind::{BindError, Bindable, ByteString, FieldDesc, Mapping, Record, Scalar, Value, check_tags, resolve_field, tags};

crate::record! {
	#[derive(Debug, PartialEq)]
	#[allow(dead_code)]
	struct Shared {
		first: i64 => "dup",
		middle: String => "name",
		second: i64 => "dup",
		hidden: i64,
	}
}

crate::record! {
	#[allow(dead_code)]
	struct Empty {}
}

crate::record! {
	#[derive(Debug)]
	struct WithCache {
		n: i64 => "n",
		hits: u32,
		seen: HashMap<String, u32>,
		origin: PathBuf,
	}
}

#[test]
fn descriptors_follow_declaration_order() {
	assert_eq!(Shared::NAME, "Shared");
	assert_eq!(
		Shared::FIELDS,
		[
			FieldDesc { name: "first", tag: Some("dup") },
			FieldDesc { name: "middle", tag: Some("name") },
			FieldDesc { name: "second", tag: Some("dup") },
			FieldDesc { name: "hidden", tag: None },
		]
	);
	assert!(Empty::FIELDS.is_empty());
}

#[test]
fn duplicate_tag_resolves_to_first_field() {
	let field = resolve_field::<Shared>("dup").expect("tag resolves");
	assert_eq!(field.name, "first");
}

#[test]
fn resolution_is_exact_and_case_sensitive() {
	assert!(resolve_field::<Shared>("Name").is_none());
	assert!(resolve_field::<Shared>("name ").is_none());
	assert!(resolve_field::<Shared>("hidden").is_none(), "untagged fields never resolve by name");
}

#[test]
fn tags_lists_tagged_fields_only() {
	let listed: Vec<_> = tags::<Shared>().collect();
	assert_eq!(listed, [("first", "dup"), ("middle", "name"), ("second", "dup")]);
}

#[test]
fn check_tags_names_both_fields() {
	let err = check_tags::<Shared>().expect_err("duplicate tag should fail");
	assert!(matches!(
		err,
		BindError::DuplicateTag {
			record: "Shared",
			tag: "dup",
			first: "first",
			second: "second",
		}
	));
	check_tags::<Empty>().expect("record without fields passes");
}

#[test]
fn scalars_assign_only_from_their_own_kind() {
	assert_eq!(i64::assign(&Value::from(4)), Some(4));
	assert_eq!(i64::assign(&Value::from("4")), None);
	assert_eq!(i64::assign(&Value::from(4.0)), None);
	assert_eq!(String::assign(&Value::from("x")), Some("x".to_owned()));
	assert_eq!(String::assign(&Value::Scalar(Scalar::Bytes(vec![0xff]))), None);
	assert_eq!(bool::assign(&Value::from(1)), None);
	assert_eq!(f64::assign(&Value::from(1.5)), Some(1.5));
}

#[test]
fn byte_string_accepts_bytes_and_text() {
	let raw = ByteString::assign(&Value::Scalar(Scalar::Bytes(vec![0x00, 0xab]))).expect("bytes assign");
	assert_eq!(raw.to_hex(), "00ab");

	let text = ByteString::assign(&Value::from("hi")).expect("text assigns");
	assert_eq!(text.as_bytes(), b"hi");
	assert_eq!(serde_json::to_value(&text).expect("serializes"), serde_json::json!("6869"));

	assert!(ByteString::assign(&Value::from(1)).is_none());
}

#[test]
fn generic_slots_take_their_shapes_whole() {
	let seq = Value::Sequence(vec![Value::from(1), Value::from("a")]);
	assert_eq!(Value::assign(&seq), Some(seq.clone()));
	assert_eq!(Mapping::assign(&seq), None);

	let map = Value::Mapping(Mapping::from([("k".to_owned(), Value::from(1))]));
	assert_eq!(Mapping::assign(&map).map(|inner| inner.len()), Some(1));
}

#[test]
fn sequences_keep_assignable_elements_in_order() {
	let mut xs: Vec<i64> = vec![9];
	let items = [Value::from(1), Value::from("two"), Value::from(3)];
	assert!(xs.extend_from(&items));
	assert_eq!(xs, [9, 1, 3]);

	let mut nested: Vec<Vec<i64>> = Vec::new();
	assert!(nested.extend_from(&[Value::Sequence(vec![Value::from(1)])]));
	assert!(nested.is_empty(), "sequence elements are not converted, only assigned");
}

#[test]
fn boxed_slots_delegate() {
	assert_eq!(Box::<i64>::assign(&Value::from(2)), Some(Box::new(2)));

	let mut boxed: Box<Vec<String>> = Box::default();
	assert!(boxed.extend_from(&[Value::from("a"), Value::from(1)]));
	assert_eq!(*boxed, vec!["a".to_owned()]);
}

#[test]
fn untagged_fields_need_no_binding_support() {
	let mut record = WithCache {
		hits: 3,
		origin: PathBuf::from("cache.torrent"),
		..WithCache::default()
	};
	let input = Mapping::from([
		("n".to_owned(), Value::from(7)),
		("hits".to_owned(), Value::from(99)),
		("origin".to_owned(), Value::from("elsewhere")),
	]);
	crate::bind::bind(&input, &mut record).expect("bind succeeds");

	assert_eq!(record.n, 7);
	assert_eq!(record.hits, 3);
	assert!(record.seen.is_empty());
	assert_eq!(record.origin, PathBuf::from("cache.torrent"));
	assert_eq!(tags::<WithCache>().count(), 1);
}
