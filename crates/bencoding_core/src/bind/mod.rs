mod binder;
mod error;
mod json;
mod path;
mod record;
mod value;

/// Binding entry points, per-call state, and options.
pub use binder::{BindOptions, Binder, bind, bind_value, bind_with};
/// Error and result aliases.
pub use error::{BindError, Result};
/// Key path types used in diagnostics.
pub use path::{KeyPath, PathStep};
/// Record description traits and tag helpers.
pub use record::{Bindable, ByteString, FieldDesc, Record, check_tags, resolve_field, tags};
/// Generic decoded value types.
pub use value::{Mapping, Scalar, Value};
