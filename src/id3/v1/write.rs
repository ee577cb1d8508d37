use super::constants::ID3V1_TAG_MARKER;
use super::tag::Id3v1Tag;
use crate::error::Result;

use std::io::Write;

use byteorder::WriteBytesExt;

impl Id3v1Tag {
	/// Render the tag as a 128 byte trailing block
	///
	/// A V1.1 layout is always produced: a 28 byte comment, a null, and the
	/// track number. Fields longer than their slots are shrunk, the year is
	/// clamped to 9999 and an absent genre becomes the conventional 255.
	///
	/// # Errors
	///
	/// I/O failure while rendering, which cannot occur with an in-memory writer
	pub fn dump(&self) -> Result<Vec<u8>> {
		let mut writer = Vec::with_capacity(128);

		writer.write_all(&ID3V1_TAG_MARKER)?;

		let title = resize_string(self.title.as_deref(), 30);
		writer.write_all(&title)?;

		let artist = resize_string(self.artist.as_deref(), 30);
		writer.write_all(&artist)?;

		let album = resize_string(self.album.as_deref(), 30);
		writer.write_all(&album)?;

		let mut year = [0; 4];
		if let Some(year_num) = self.year {
			let mut year_num = std::cmp::min(year_num, 9999);

			let mut idx = 3;
			loop {
				year[idx] = b'0' + (year_num % 10) as u8;
				year_num /= 10;

				if idx == 0 {
					break;
				}

				idx -= 1;
			}
		}

		writer.write_all(&year)?;

		let comment = resize_string(self.comment.as_deref(), 28);
		writer.write_all(&comment)?;

		writer.write_u8(0)?;

		writer.write_u8(self.track_number.unwrap_or(0))?;
		writer.write_u8(self.genre.unwrap_or(255))?;

		Ok(writer)
	}
}

fn resize_string(value: Option<&str>, size: usize) -> Vec<u8> {
	let mut field = vec![0; size];

	if let Some(val) = value {
		for (slot, c) in field.iter_mut().zip(val.chars()) {
			// Code points outside Latin-1 have no representation here
			*slot = if (c as u32) < 256 { c as u8 } else { b'?' };
		}
	}

	field
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ParsingMode;

	#[test_log::test]
	fn roundtrip() {
		let tag = Id3v1Tag {
			title: Some(String::from("Foo title")),
			artist: Some(String::from("Bar artist")),
			album: Some(String::from("Baz album")),
			year: Some(1984),
			comment: Some(String::from("Qux comment")),
			track_number: Some(1),
			genre: Some(32),
		};

		let dumped = tag.dump().unwrap();
		assert_eq!(dumped.len(), 128);

		let mut block = [0; 128];
		block.copy_from_slice(&dumped);

		let reparsed = Id3v1Tag::parse(block, ParsingMode::BestAttempt).unwrap();
		assert_eq!(reparsed, tag);
	}

	#[test_log::test]
	fn oversized_fields_are_shrunk() {
		let tag = Id3v1Tag {
			title: Some("t".repeat(40)),
			year: Some(u16::MAX),
			..Id3v1Tag::default()
		};

		let dumped = tag.dump().unwrap();
		assert_eq!(dumped.len(), 128);
		assert_eq!(&dumped[3..33], "t".repeat(30).as_bytes());
		assert_eq!(&dumped[93..97], b"9999");
	}

	#[test_log::test]
	fn empty_tag_dump() {
		let dumped = Id3v1Tag::new().dump().unwrap();

		assert_eq!(&dumped[..3], b"TAG");
		assert!(dumped[3..127].iter().all(|b| *b == 0));
		assert_eq!(dumped[127], 255);
	}
}
