use bencoding::bind::{Record, Result, check_tags, tags};

use crate::cmd::util::emit_json;
use crate::metainfo::{Info, Metainfo};

#[derive(clap::Args)]
pub struct Args {
	/// Print the tag tables as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Print the tag table of every metainfo record.
pub fn run(args: Args) -> Result<()> {
	let Args { json } = args;

	check_tags::<Metainfo>()?;
	check_tags::<Info>()?;

	if json {
		let payload = FieldsJson {
			records: vec![record_json::<Metainfo>(), record_json::<Info>()],
		};
		return emit_json(&payload);
	}

	print_record::<Metainfo>();
	print_record::<Info>();
	Ok(())
}

fn print_record<R: Record>() {
	println!("{}:", R::NAME);
	for (field, tag) in tags::<R>() {
		println!("  {field} <- {tag:?}");
	}
	let untagged = R::FIELDS.iter().filter(|field| field.tag.is_none()).count();
	if untagged > 0 {
		println!("  ({untagged} untagged)");
	}
}

fn record_json<R: Record>() -> RecordJson {
	RecordJson {
		record: R::NAME,
		fields: R::FIELDS
			.iter()
			.map(|field| FieldJson {
				field: field.name,
				tag: field.tag,
			})
			.collect(),
	}
}

#[derive(serde::Serialize)]
struct FieldJson {
	field: &'static str,
	tag: Option<&'static str>,
}

#[derive(serde::Serialize)]
struct RecordJson {
	record: &'static str,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldsJson {
	records: Vec<RecordJson>,
}
