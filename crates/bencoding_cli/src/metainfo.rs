use bencoding::bind::{ByteString, Mapping, Scalar, Value};

bencoding::record! {
	/// Torrent metainfo dictionary.
	#[derive(Debug, serde::Serialize)]
	pub struct Metainfo {
		pub announce: String => "announce",
		pub announce_list: Vec<Value> => "announce-list",
		pub comment: Option<String> => "comment",
		pub created_by: Option<String> => "created by",
		pub creation_date: Option<i64> => "creation date",
		pub url_list: Option<Value> => "url-list",
		pub info: Info => "info",
	}
}

bencoding::record! {
	/// `info` dictionary shared by single- and multi-file torrents.
	#[derive(Debug, serde::Serialize)]
	pub struct Info {
		pub name: String => "name",
		pub piece_length: i64 => "piece length",
		pub pieces: ByteString => "pieces",
		pub length: Option<i64> => "length",
		pub private: Option<i64> => "private",
		// Entries that are not dictionaries are dropped.
		pub files: Vec<Mapping> => "files",
	}
}

impl Info {
	/// Total payload size across all files, `None` when the sum overflows.
	pub fn total_length(&self) -> Option<i64> {
		if let Some(length) = self.length {
			return Some(length);
		}
		self.files
			.iter()
			.filter_map(|file| match file.get("length") {
				Some(Value::Scalar(Scalar::Int(length))) => Some(*length),
				_ => None,
			})
			.try_fold(0_i64, i64::checked_add)
	}
}
