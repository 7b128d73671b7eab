use bencoding::bind::Result;

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

/// Render an optional displayable value, `-` when absent.
pub(crate) fn opt_label<T: std::fmt::Display>(value: Option<T>) -> String {
	value.map(|item| item.to_string()).unwrap_or_else(|| "-".to_owned())
}
