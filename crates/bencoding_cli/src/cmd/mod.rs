/// Metainfo binding command.
pub mod bind;
/// Record tag listing command.
pub mod fields;
/// Shared output helpers.
pub(crate) mod util;
