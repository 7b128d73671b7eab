#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod metainfo;

#[derive(Parser)]
#[command(name = "bencoding", about = "Bind decoded bencode trees into typed records")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Bind a decoded JSON document into the torrent metainfo record.
	Bind(cmd::bind::Args),
	/// List the binding tags of the metainfo records.
	Fields(cmd::fields::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> bencoding::bind::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Bind(args) => cmd::bind::run(args),
		Commands::Fields(args) => cmd::fields::run(args),
	}
}
