use crate::bind::path::{KeyPath, PathStep};
use crate::bind::record::{Bindable, Record, check_tags, resolve_field};
use crate::bind::value::{Mapping, Value};
use crate::bind::{BindError, Result};

/// Runtime limits and behavior switches for record binding.
#[derive(Debug, Clone)]
pub struct BindOptions {
	/// Maximum nested record depth, the top-level record included.
	pub max_depth: u32,
	/// Validate tag uniqueness of every record type before binding into it.
	pub reject_duplicate_tags: bool,
	/// Keep an optional target allocated when binding a mapping into it fails,
	/// and report success for that field.
	///
	/// Off by default: the failure propagates and the optional field keeps its
	/// previous state. Only [`BindError::Unbindable`] is discarded; depth and
	/// tag errors always propagate.
	pub discard_pointer_errors: bool,
}

impl Default for BindOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			reject_duplicate_tags: false,
			discard_pointer_errors: false,
		}
	}
}

impl BindOptions {
	/// Preset that rejects duplicate tags and never discards failures.
	pub fn strict() -> Self {
		Self {
			max_depth: 64,
			reject_duplicate_tags: true,
			discard_pointer_errors: false,
		}
	}
}

/// Bind `map` into `record` with default options.
///
/// Keys with no matching tag are skipped. The first field that cannot be
/// bound aborts the call; fields bound before it stay bound.
pub fn bind<R: Record>(map: &Mapping, record: &mut R) -> Result<()> {
	bind_with(map, record, &BindOptions::default())
}

/// Bind `map` into `record`.
pub fn bind_with<R: Record>(map: &Mapping, record: &mut R, opt: &BindOptions) -> Result<()> {
	Binder::new(opt).bind_record(map, record)
}

/// Bind a generic value into `record`; the value must be a mapping.
pub fn bind_value<R: Record>(value: &Value, record: &mut R, opt: &BindOptions) -> Result<()> {
	let mut binder = Binder::new(opt);
	match value {
		Value::Mapping(map) => binder.bind_record(map, record),
		_ => Err(binder.unbindable(value)),
	}
}

/// Per-call binding state: options, current key path, and nesting depth.
#[derive(Debug)]
pub struct Binder<'a> {
	opt: &'a BindOptions,
	path: KeyPath,
	depth: u32,
}

impl<'a> Binder<'a> {
	/// Fresh state positioned at the root.
	pub fn new(opt: &'a BindOptions) -> Self {
		Self {
			opt,
			path: KeyPath::default(),
			depth: 0,
		}
	}

	/// Options this call runs with.
	pub fn options(&self) -> &BindOptions {
		self.opt
	}

	/// Key path of the field currently being bound.
	pub fn path(&self) -> &KeyPath {
		&self.path
	}

	/// Bind every tagged entry of `map` into `record` in place.
	pub fn bind_record<R: Record>(&mut self, map: &Mapping, record: &mut R) -> Result<()> {
		if self.depth >= self.opt.max_depth {
			return Err(BindError::DepthExceeded { max_depth: self.opt.max_depth });
		}
		if self.opt.reject_duplicate_tags {
			check_tags::<R>()?;
		}

		self.depth += 1;
		let result = self.bind_entries(map, record);
		self.depth -= 1;
		result
	}

	fn bind_entries<R: Record>(&mut self, map: &Mapping, record: &mut R) -> Result<()> {
		for (key, value) in map {
			let Some(field) = resolve_field::<R>(key) else {
				continue;
			};

			self.path.push(PathStep::Key(key.clone()));
			let result = record.bind_field(field.name, value, self);
			self.path.pop();
			result?;
		}
		Ok(())
	}

	/// Assign `value` into one field slot; the slot is written in full or not at all.
	pub fn assign<T: Bindable>(&mut self, slot: &mut T, value: &Value) -> Result<()> {
		if let Some(direct) = T::assign(value) {
			*slot = direct;
			return Ok(());
		}

		if let Value::Mapping(map) = value {
			let mut staged = slot.clone();
			if let Some(result) = staged.bind_mapping(map, self) {
				result?;
				*slot = staged;
				return Ok(());
			}
		}

		if let Some(result) = slot.bind_pointer(value, self) {
			return result;
		}

		if let Value::Sequence(items) = value {
			if slot.extend_from(items) {
				return Ok(());
			}
		}

		Err(self.unbindable(value))
	}

	/// Failure for `value` at the current key path.
	pub fn unbindable(&self, value: &Value) -> BindError {
		BindError::Unbindable {
			path: self.path.clone(),
			found: value.kind(),
		}
	}
}
