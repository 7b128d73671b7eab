use crate::bind::{KeyPath, PathStep};

#[test]
fn renders_root_marker_for_empty_path() {
	assert_eq!(KeyPath::default().to_string(), "(root)");
}

#[test]
fn renders_keys_and_indices() {
	let mut path = KeyPath::default();
	path.push(PathStep::Key("info".into()));
	path.push(PathStep::Key("files".into()));
	path.push(PathStep::Index(2));
	path.push(PathStep::Key("length".into()));
	assert_eq!(path.to_string(), "info.files[2].length");

	path.pop();
	path.pop();
	assert_eq!(path.to_string(), "info.files");
	assert!(!path.is_root());
}

#[test]
fn keys_with_spaces_render_verbatim() {
	let mut path = KeyPath::default();
	path.push(PathStep::Key("piece length".into()));
	assert_eq!(path.to_string(), "piece length");
}

#[test]
fn keys_that_look_nested_are_quoted() {
	let mut path = KeyPath::default();
	path.push(PathStep::Key("info".into()));
	path.push(PathStep::Key("a.b".into()));
	path.push(PathStep::Index(0));
	assert_eq!(path.to_string(), "info[\"a.b\"][0]");
	assert_eq!(path.last_key(), Some("a.b"));
	assert_eq!(KeyPath::default().last_key(), None);
}
