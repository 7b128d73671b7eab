#![allow(dead_code)]

use std::process::{Command, Output};

pub fn fixture_arg(name: &str) -> String {
	bencoding_testkit::fixture_path(name).to_string_lossy().into_owned()
}

pub fn run_bencoding(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_bencoding"))
		.args(args)
		.output()
		.expect("bencoding command executes")
}

/// Run a command that must succeed and parse its stdout as JSON.
pub fn run_bencoding_json(args: &[&str]) -> serde_json::Value {
	let output = run_bencoding(args);
	assert!(
		output.status.success(),
		"bencoding {} failed with status={}: {}",
		args.join(" "),
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
