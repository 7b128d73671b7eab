use thiserror::Error;

use crate::bind::path::KeyPath;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while converting or binding generic values into records.
#[derive(Debug, Error)]
pub enum BindError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// JSON input carried a value with no generic counterpart.
	#[error("unsupported json null at {path}")]
	UnsupportedJson {
		/// Location of the offending value.
		path: KeyPath,
	},
	/// A tagged field matched but no assignment strategy applied.
	#[error("unable to bind {found} into field '{path}'")]
	Unbindable {
		/// Key path from the top-level record to the field.
		path: KeyPath,
		/// Runtime kind of the source value.
		found: &'static str,
	},
	/// Record nesting exceeded the configured limit.
	#[error("bind depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Two fields of one record declare the same tag.
	#[error("duplicate tag {tag:?} on {record}: first={first}, second={second}")]
	DuplicateTag {
		/// Record type name.
		record: &'static str,
		/// Repeated tag.
		tag: &'static str,
		/// Field that declares the tag first.
		first: &'static str,
		/// Field that repeats it.
		second: &'static str,
	},
}

impl BindError {
	/// Last key of the offending field path, when the error names one.
	pub fn key(&self) -> Option<&str> {
		match self {
			Self::Unbindable { path, .. } => path.last_key(),
			_ => None,
		}
	}
}
