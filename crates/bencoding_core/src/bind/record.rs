use std::fmt;

use crate::bind::binder::Binder;
use crate::bind::value::{Mapping, Scalar, Value};
use crate::bind::{BindError, Result};

/// Field slot capability set.
///
/// Each hook corresponds to one assignment strategy and defaults to "not
/// applicable". [`Binder::assign`] tries them in order: direct assignment,
/// nested record from mapping, optional target, then sequence append.
pub trait Bindable: Default + Clone {
	/// Produce a value from `value` with no conversion, if its kind matches.
	fn assign(value: &Value) -> Option<Self> {
		let _ = value;
		None
	}

	/// Bind mapping entries into `self` in place. `None` when `Self` is not record-shaped.
	fn bind_mapping(&mut self, map: &Mapping, binder: &mut Binder<'_>) -> Option<Result<()>> {
		let _ = (map, binder);
		None
	}

	/// Bind into an optional target, allocating it on demand. `None` unless `Self` is `Option<T>`.
	fn bind_pointer(&mut self, value: &Value, binder: &mut Binder<'_>) -> Option<Result<()>> {
		let _ = (value, binder);
		None
	}

	/// Append every directly assignable element. `false` unless `Self` is a sequence.
	fn extend_from(&mut self, items: &[Value]) -> bool {
		let _ = items;
		false
	}
}

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDesc {
	/// Rust field identifier.
	pub name: &'static str,
	/// External key the field receives, if any.
	pub tag: Option<&'static str>,
}

/// Record type whose fields are bound by tag.
///
/// Tags are expected to be unique within one record. When two fields share a
/// tag the first in declaration order wins; see [`check_tags`].
pub trait Record: Bindable {
	/// Record type name for diagnostics.
	const NAME: &'static str;
	/// Field descriptors in declaration order.
	const FIELDS: &'static [FieldDesc];

	/// Assign `value` into the field named `name`.
	fn bind_field(&mut self, name: &str, value: &Value, binder: &mut Binder<'_>) -> Result<()>;
}

/// Resolve `key` to the first field of `R` tagged with it.
pub fn resolve_field<R: Record>(key: &str) -> Option<&'static FieldDesc> {
	R::FIELDS.iter().find(|field| field.tag == Some(key))
}

/// Tagged fields of `R` as `(field, tag)` pairs in declaration order.
pub fn tags<R: Record>() -> impl Iterator<Item = (&'static str, &'static str)> {
	R::FIELDS.iter().filter_map(|field| field.tag.map(|tag| (field.name, tag)))
}

/// Fail on the first tag declared by more than one field of `R`.
pub fn check_tags<R: Record>() -> Result<()> {
	for (idx, field) in R::FIELDS.iter().enumerate() {
		let Some(tag) = field.tag else {
			continue;
		};
		if let Some(first) = R::FIELDS[..idx].iter().find(|prev| prev.tag == Some(tag)) {
			return Err(BindError::DuplicateTag {
				record: R::NAME,
				tag,
				first: first.name,
				second: field.name,
			});
		}
	}
	Ok(())
}

/// Raw byte string field, accepting binary and text scalars.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
	/// Borrow the raw bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Lowercase hex rendering.
	pub fn to_hex(&self) -> String {
		let mut out = String::with_capacity(self.0.len() * 2);
		for byte in &self.0 {
			out.push_str(&format!("{byte:02x}"));
		}
		out
	}
}

impl fmt::Debug for ByteString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteString({})", self.to_hex())
	}
}

impl serde::Serialize for ByteString {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex())
	}
}

macro_rules! scalar_bindable {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Bindable for $ty {
				fn assign(value: &Value) -> Option<Self> {
					match value {
						Value::Scalar(Scalar::$variant(inner)) => Some(inner.clone()),
						_ => None,
					}
				}
			}
		)*
	};
}

scalar_bindable! {
	i64 => Int,
	String => Str,
	bool => Bool,
	f64 => Float,
}

impl Bindable for ByteString {
	fn assign(value: &Value) -> Option<Self> {
		match value {
			Value::Scalar(Scalar::Bytes(bytes)) => Some(Self(bytes.clone())),
			Value::Scalar(Scalar::Str(text)) => Some(Self(text.as_bytes().to_vec())),
			_ => None,
		}
	}
}

impl Bindable for Value {
	fn assign(value: &Value) -> Option<Self> {
		Some(value.clone())
	}
}

impl Bindable for Mapping {
	fn assign(value: &Value) -> Option<Self> {
		value.as_mapping().cloned()
	}
}

impl<T: Bindable> Bindable for Box<T> {
	fn assign(value: &Value) -> Option<Self> {
		T::assign(value).map(Box::new)
	}

	fn bind_mapping(&mut self, map: &Mapping, binder: &mut Binder<'_>) -> Option<Result<()>> {
		(**self).bind_mapping(map, binder)
	}

	fn bind_pointer(&mut self, value: &Value, binder: &mut Binder<'_>) -> Option<Result<()>> {
		(**self).bind_pointer(value, binder)
	}

	fn extend_from(&mut self, items: &[Value]) -> bool {
		(**self).extend_from(items)
	}
}

impl<T: Bindable> Bindable for Option<T> {
	fn bind_pointer(&mut self, value: &Value, binder: &mut Binder<'_>) -> Option<Result<()>> {
		if let Some(inner) = T::assign(value) {
			*self = Some(inner);
			return Some(Ok(()));
		}

		if let Value::Mapping(map) = value {
			// Reuse an existing target; only allocate when unset.
			let mut target = self.clone().unwrap_or_default();
			if let Some(result) = target.bind_mapping(map, binder) {
				return Some(match result {
					Ok(()) => {
						*self = Some(target);
						Ok(())
					}
					// Keeps the allocation with whatever fields bound before the failure.
					Err(BindError::Unbindable { .. }) if binder.options().discard_pointer_errors => {
						*self = Some(target);
						Ok(())
					}
					Err(err) => Err(err),
				});
			}
		}

		Some(Err(binder.unbindable(value)))
	}
}

impl<T: Bindable> Bindable for Vec<T> {
	fn extend_from(&mut self, items: &[Value]) -> bool {
		self.extend(items.iter().filter_map(T::assign));
		true
	}
}

/// Declare a record struct whose fields bind from generic mappings by tag.
///
/// Each field may carry `=> "tag"`; fields without a tag are never bound and
/// need not implement [`Bindable`].
/// The macro derives `Clone` and `Default`, so do not list them again.
///
/// ```
/// bencoding::record! {
/// 	#[derive(Debug, PartialEq)]
/// 	pub struct Peer {
/// 		pub ip: String => "ip",
/// 		pub port: i64 => "port",
/// 		pub seen: std::time::Duration,
/// 	}
/// }
///
/// let value = bencoding::bind::Value::from_json(serde_json::json!({ "ip": "10.0.0.1", "port": 6881 })).unwrap();
/// let mut peer = Peer::default();
/// bencoding::bind::bind(value.as_mapping().unwrap(), &mut peer).unwrap();
/// assert_eq!(peer.port, 6881);
/// ```
#[macro_export]
macro_rules! record {
	(@tag) => {
		None
	};
	(@tag $tag:literal) => {
		Some($tag)
	};
	(@bind $this:ident, $name:ident, $binder:ident, $value:ident, $field:ident) => {};
	(@bind $this:ident, $name:ident, $binder:ident, $value:ident, $field:ident $tag:literal) => {
		if $name == stringify!($field) {
			return $binder.assign(&mut $this.$field, $value);
		}
	};
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Default)]
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $ty,
			)*
		}

		impl $crate::bind::Bindable for $name {
			fn bind_mapping(
				&mut self,
				map: &$crate::bind::Mapping,
				binder: &mut $crate::bind::Binder<'_>,
			) -> Option<$crate::bind::Result<()>> {
				Some(binder.bind_record(map, self))
			}
		}

		impl $crate::bind::Record for $name {
			const NAME: &'static str = stringify!($name);
			const FIELDS: &'static [$crate::bind::FieldDesc] = &[
				$(
					$crate::bind::FieldDesc {
						name: stringify!($field),
						tag: $crate::record!(@tag $($tag)?),
					},
				)*
			];

			#[allow(unused_variables)]
			fn bind_field(
				&mut self,
				name: &str,
				value: &$crate::bind::Value,
				binder: &mut $crate::bind::Binder<'_>,
			) -> $crate::bind::Result<()> {
				$($crate::record!(@bind self, name, binder, value, $field $($tag)?);)*
				Ok(())
			}
		}
	};
}

#[cfg(test)]
mod tests;
