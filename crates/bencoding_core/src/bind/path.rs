use std::fmt;

/// One step in a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Mapping key.
	Key(String),
	/// Zero-based sequence index.
	Index(usize),
}

/// Location inside a generic value tree, rendered as `info.files[2].length`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath {
	/// Ordered steps from the root.
	pub steps: Vec<PathStep>,
}

impl KeyPath {
	/// Append one step.
	pub fn push(&mut self, step: PathStep) {
		self.steps.push(step);
	}

	/// Remove the most recent step.
	pub fn pop(&mut self) {
		self.steps.pop();
	}

	/// Whether the path points at the root.
	pub fn is_root(&self) -> bool {
		self.steps.is_empty()
	}

	/// Most recent mapping key, skipping trailing indices.
	pub fn last_key(&self) -> Option<&str> {
		self.steps.iter().rev().find_map(|step| match step {
			PathStep::Key(key) => Some(key.as_str()),
			PathStep::Index(_) => None,
		})
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.steps.is_empty() {
			return f.write_str("(root)");
		}

		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				// Keys that would read as nesting are quoted.
				PathStep::Key(key) if key.contains(['.', '[', ']']) => write!(f, "[{key:?}]")?,
				PathStep::Key(key) if idx == 0 => f.write_str(key)?,
				PathStep::Key(key) => write!(f, ".{key}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
