use crate::bind::path::{KeyPath, PathStep};
use crate::bind::value::{Mapping, Scalar, Value};
use crate::bind::{BindError, Result};

impl Value {
	/// Convert an already-parsed JSON document into a generic value.
	///
	/// Integers that fit `i64` become [`Scalar::Int`], other numbers become
	/// [`Scalar::Float`]. `null` has no generic counterpart and is rejected.
	pub fn from_json(json: serde_json::Value) -> Result<Self> {
		let mut path = KeyPath::default();
		from_json_at(json, &mut path)
	}

	/// Parse JSON text and convert it into a generic value.
	pub fn from_json_str(src: &str) -> Result<Self> {
		let json = serde_json::from_str(src)?;
		Self::from_json(json)
	}

	/// Parse JSON bytes and convert them into a generic value.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
		let json = serde_json::from_slice(bytes)?;
		Self::from_json(json)
	}
}

fn from_json_at(json: serde_json::Value, path: &mut KeyPath) -> Result<Value> {
	match json {
		serde_json::Value::Null => Err(BindError::UnsupportedJson { path: path.clone() }),
		serde_json::Value::Bool(value) => Ok(Value::Scalar(Scalar::Bool(value))),
		serde_json::Value::Number(number) => match number.as_i64() {
			Some(value) => Ok(Value::Scalar(Scalar::Int(value))),
			None => Ok(Value::Scalar(Scalar::Float(number.as_f64().unwrap_or(f64::NAN)))),
		},
		serde_json::Value::String(text) => Ok(Value::Scalar(Scalar::Str(text))),
		serde_json::Value::Array(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.into_iter().enumerate() {
				path.push(PathStep::Index(idx));
				let value = from_json_at(item, path);
				path.pop();
				out.push(value?);
			}
			Ok(Value::Sequence(out))
		}
		serde_json::Value::Object(entries) => {
			let mut out = Mapping::new();
			for (key, item) in entries {
				path.push(PathStep::Key(key.clone()));
				let value = from_json_at(item, path);
				path.pop();
				out.insert(key, value?);
			}
			Ok(Value::Mapping(out))
		}
	}
}
