//! Tag-directed binding of generic decoded trees into typed records.

/// Generic values, record descriptions, and the binding engine.
pub mod bind;
