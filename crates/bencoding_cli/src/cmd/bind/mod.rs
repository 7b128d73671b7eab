use std::path::PathBuf;

use bencoding::bind::{BindOptions, Result, Value, bind_value};

use crate::cmd::util::{emit_json, opt_label};
use crate::metainfo::Metainfo;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document holding an already-decoded metainfo tree.
	pub path: PathBuf,
	/// Print the bound record as JSON.
	#[arg(long)]
	pub json: bool,
	/// Reject records with duplicate tags.
	#[arg(long, conflicts_with = "lenient")]
	pub strict: bool,
	/// Keep optional targets allocated when binding into them fails.
	#[arg(long)]
	pub lenient: bool,
}

/// Bind a decoded document into [`Metainfo`] and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, strict, lenient } = args;

	let bytes = std::fs::read(&path)?;
	let value = Value::from_json_slice(&bytes)?;

	let opt = if strict {
		BindOptions::strict()
	} else {
		BindOptions {
			discard_pointer_errors: lenient,
			..BindOptions::default()
		}
	};

	let mut meta = Metainfo::default();
	bind_value(&value, &mut meta, &opt)?;

	if json {
		return emit_json(&BindJson {
			path: path.display().to_string(),
			total_length: meta.info.total_length(),
			record: &meta,
		});
	}

	println!("path: {}", path.display());
	println!("announce: {}", meta.announce);
	println!("announce_list: {} tiers", meta.announce_list.len());
	println!("comment: {}", opt_label(meta.comment.as_deref()));
	println!("created_by: {}", opt_label(meta.created_by.as_deref()));
	println!("creation_date: {}", opt_label(meta.creation_date));
	println!("url_list: {}", opt_label(meta.url_list.as_ref().map(Value::kind)));
	println!("info.name: {}", meta.info.name);
	println!("info.piece_length: {}", meta.info.piece_length);
	println!("info.pieces: {} bytes", meta.info.pieces.as_bytes().len());
	println!("info.length: {}", opt_label(meta.info.length));
	println!("info.private: {}", opt_label(meta.info.private));
	println!("info.files: {}", meta.info.files.len());
	println!("total_length: {}", opt_label(meta.info.total_length()));

	Ok(())
}

#[derive(serde::Serialize)]
struct BindJson<'a> {
	path: String,
	/// `null` when the file lengths overflow.
	total_length: Option<i64>,
	record: &'a Metainfo,
}
