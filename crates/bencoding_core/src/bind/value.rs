use std::collections::BTreeMap;

/// String-keyed mapping, iterated in sorted key order.
pub type Mapping = BTreeMap<String, Value>;

/// Generic decoded value handed over by an upstream decoder.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
	/// String-keyed dictionary.
	Mapping(Mapping),
	/// Ordered, possibly heterogeneous list.
	Sequence(Vec<Value>),
	/// Leaf value.
	Scalar(Scalar),
}

/// Leaf payload of a generic value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
	/// Signed integer.
	Int(i64),
	/// UTF-8 text.
	Str(String),
	/// Byte string that is not valid UTF-8.
	Bytes(Vec<u8>),
	/// Boolean.
	Bool(bool),
	/// Floating point number.
	Float(f64),
}

impl Value {
	/// Stable runtime kind name used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Mapping(_) => "mapping",
			Self::Sequence(_) => "sequence",
			Self::Scalar(scalar) => scalar.kind(),
		}
	}

	/// Borrow as mapping.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Self::Mapping(map) => Some(map),
			_ => None,
		}
	}

	/// Borrow as sequence.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow as scalar.
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(scalar) => Some(scalar),
			_ => None,
		}
	}
}

impl Scalar {
	/// Stable runtime kind name used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Int(_) => "int",
			Self::Str(_) => "string",
			Self::Bytes(_) => "bytes",
			Self::Bool(_) => "bool",
			Self::Float(_) => "float",
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Self::Mapping(Mapping::new())
	}
}

impl From<Scalar> for Value {
	fn from(value: Scalar) -> Self {
		Self::Scalar(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Scalar(Scalar::Int(value))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Scalar(Scalar::Bool(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Scalar(Scalar::Float(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Scalar(Scalar::Str(value.to_owned()))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Scalar(Scalar::Str(value))
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		match String::from_utf8(value) {
			Ok(text) => Self::Scalar(Scalar::Str(text)),
			Err(err) => Self::Scalar(Scalar::Bytes(err.into_bytes())),
		}
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Sequence(value)
	}
}

impl From<Mapping> for Value {
	fn from(value: Mapping) -> Self {
		Self::Mapping(value)
	}
}

#[cfg(test)]
mod tests;
