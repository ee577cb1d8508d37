//! Decoding frame bodies into [`FrameValue`]s
//!
//! Body decoding is infallible: a frame whose body does not fit its declared
//! layout is preserved as [`FrameValue::Binary`] instead of poisoning the
//! rest of the tag.

use super::{FrameValue, Involvee};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::registry::{self, FrameType};
use crate::picture::{MimeType, Picture, PictureType};
use crate::util::text::{TextEncoding, decode_text, find_terminator, latin1_decode};

pub(super) fn parse_content(id: &str, data: &[u8], version: Id3v2Version) -> FrameValue {
	// The declared frame table decides the body layout; undeclared IDs have
	// no layout and stay opaque
	let frame_type = registry::declared_frame(id, version)
		.map_or(FrameType::Unknown, |declared| declared.frame_type);

	let value = match frame_type {
		FrameType::AttachedPicture => parse_picture(data, version),
		FrameType::Comments => parse_language_frame(data)
			.map(|(encoding, language, description, content)| FrameValue::Comment {
				encoding,
				language,
				description,
				content,
			}),
		FrameType::UnsynchronisedLyrics => parse_language_frame(data).map(
			|(encoding, language, description, content)| FrameValue::UnsynchronisedLyrics {
				encoding,
				language,
				description,
				content,
			},
		),
		FrameType::TermsOfUse => parse_terms_of_use(data),
		FrameType::Popularimeter => parse_popularimeter(data),
		FrameType::UniqueFileIdentifier => parse_unique_file_identifier(data),
		FrameType::InvolvedPeopleList => parse_involved_people(data),
		FrameType::CompilationFlag => parse_compilation(data),
		FrameType::UserDefinedText => parse_user_text(data),
		FrameType::UserDefinedUrlLink => parse_user_url(data),
		FrameType::TextInformation => parse_text(data),
		FrameType::UrlLink => Some(FrameValue::Url(latin1_decode(data))),
		FrameType::Unknown => None,
	};

	value.unwrap_or_else(|| FrameValue::Binary(data.to_vec()))
}

/// Split off the leading encoding byte
fn encoding_byte(data: &[u8]) -> Option<(TextEncoding, &[u8])> {
	let (&first, rest) = data.split_first()?;
	let encoding = TextEncoding::from_u8(first)?;

	Some((encoding, rest))
}

/// Split a body at its first terminator
///
/// Everything before the terminator decodes as the description, everything
/// after it is handed back raw. With no terminator present the description is
/// empty and the whole body is the value.
fn split_terminated(data: &[u8], encoding: TextEncoding) -> (String, &[u8]) {
	match find_terminator(data, 0, encoding) {
		Some(pos) => (
			decode_text(&data[..pos], encoding),
			&data[pos + encoding.code_unit_width()..],
		),
		None => (String::new(), data),
	}
}

/// The shared layout of comments and unsynchronised lyrics: an encoding byte,
/// a 3 byte language, a terminated description and the content
fn parse_language_frame(data: &[u8]) -> Option<(TextEncoding, [u8; 3], String, String)> {
	let (encoding, rest) = encoding_byte(data)?;
	if rest.len() < 3 {
		return None;
	}

	let language = [rest[0], rest[1], rest[2]];
	let mut body = &rest[3..];

	// Some writers pad the front of the body with extra terminators; they
	// belong to no field, so the description starts past them
	let width = encoding.code_unit_width();
	while body.len() >= width && body[..width].iter().all(|b| *b == 0) {
		body = &body[width..];
	}

	let (description, content_bytes) = split_terminated(body, encoding);
	let content = decode_text(content_bytes, encoding);

	Some((encoding, language, description, content))
}

fn parse_terms_of_use(data: &[u8]) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;
	if rest.len() < 3 {
		return None;
	}

	Some(FrameValue::TermsOfUse {
		encoding,
		language: [rest[0], rest[1], rest[2]],
		content: decode_text(&rest[3..], encoding),
	})
}

fn parse_text(data: &[u8]) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;

	Some(FrameValue::Text {
		encoding,
		value: decode_text(rest, encoding),
	})
}

fn parse_user_text(data: &[u8]) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;
	let (description, content_bytes) = split_terminated(rest, encoding);

	Some(FrameValue::UserText {
		encoding,
		description,
		content: decode_text(content_bytes, encoding),
	})
}

fn parse_user_url(data: &[u8]) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;
	let (description, url_bytes) = split_terminated(rest, encoding);

	Some(FrameValue::UserUrl {
		encoding,
		description,
		url: latin1_decode(url_bytes),
	})
}

fn parse_unique_file_identifier(data: &[u8]) -> Option<FrameValue> {
	let pos = find_terminator(data, 0, TextEncoding::Latin1)?;

	Some(FrameValue::UniqueFileIdentifier {
		owner: latin1_decode(&data[..pos]),
		identifier: data[pos + 1..].to_vec(),
	})
}

fn parse_popularimeter(data: &[u8]) -> Option<FrameValue> {
	let pos = find_terminator(data, 0, TextEncoding::Latin1)?;
	let email = latin1_decode(&data[..pos]);

	let rest = &data[pos + 1..];
	let (&rating, counter_bytes) = rest.split_first()?;

	// The play counter is big-endian and however wide the writer needed
	let counter = if counter_bytes.len() > 8 {
		u64::MAX
	} else {
		counter_bytes
			.iter()
			.fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
	};

	Some(FrameValue::Popularimeter {
		email,
		rating,
		counter,
	})
}

fn parse_involved_people(data: &[u8]) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;

	let text = decode_text(rest, encoding);
	if text.is_empty() {
		return Some(FrameValue::InvolvedPeople(Vec::new()));
	}

	// Alternating role and person, null separated. A dangling role keeps an
	// empty person rather than being dropped.
	let mut people = Vec::new();
	let mut entries = text.split('\0');
	while let Some(role) = entries.next() {
		let person = entries.next().unwrap_or_default();
		people.push(Involvee {
			role: role.to_owned(),
			person: person.to_owned(),
		});
	}

	Some(FrameValue::InvolvedPeople(people))
}

fn parse_compilation(data: &[u8]) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;
	let value = decode_text(rest, encoding);

	Some(FrameValue::Compilation(value.trim() == "1"))
}

fn parse_picture(data: &[u8], version: Id3v2Version) -> Option<FrameValue> {
	let (encoding, rest) = encoding_byte(data)?;

	let (mime_type, rest) = if version == Id3v2Version::V2 {
		// A fixed 3 character image format rather than a full MIME type
		if rest.len() < 3 {
			return None;
		}

		let format = latin1_decode(&rest[..3]);
		let mime_type = match &*format {
			"PNG" => Some(MimeType::Png),
			"JPG" => Some(MimeType::Jpeg),
			_ => Some(MimeType::Unknown(format)),
		};

		(mime_type, &rest[3..])
	} else {
		let pos = find_terminator(rest, 0, TextEncoding::Latin1)?;
		let mime_str = latin1_decode(&rest[..pos]);
		let mime_type = (!mime_str.is_empty()).then(|| MimeType::from_str(&mime_str));

		(mime_type, &rest[pos + 1..])
	};

	let (&type_byte, rest) = rest.split_first()?;
	let pic_type = PictureType::from_u8(type_byte);

	let desc_end = find_terminator(rest, 0, encoding)?;
	let description = decode_text(&rest[..desc_end], encoding);
	let description = (!description.is_empty()).then_some(description);

	let picture_data = rest[desc_end + encoding.code_unit_width()..].to_vec();

	Some(FrameValue::Picture(Picture::new(
		pic_type,
		mime_type,
		description,
		picture_data,
	)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test_log::test]
	fn comment_with_padded_description() {
		// A stray terminator before the description is padding, not an empty
		// description followed by misaligned fields
		let body = [
			0x00, 0x65, 0x6E, 0x67, 0x00, 0x68, 0x69, 0x00, 0x62, 0x79, 0x65,
		];

		let value = parse_content("COMM", &body, Id3v2Version::V4);
		let FrameValue::Comment {
			encoding,
			language,
			description,
			content,
		} = value
		else {
			panic!("expected a comment, got {value:?}");
		};

		assert_eq!(encoding, TextEncoding::Latin1);
		assert_eq!(&language, b"eng");
		assert_eq!(description, "hi");
		assert_eq!(content, "bye");
	}

	#[test_log::test]
	fn text_frame() {
		let body = [0x03, 0x46, 0x6F, 0x6F];

		let value = parse_content("TIT2", &body, Id3v2Version::V4);
		assert_eq!(
			value,
			FrameValue::Text {
				encoding: TextEncoding::Utf8,
				value: String::from("Foo"),
			}
		);
	}

	#[test_log::test]
	fn user_text_frame() {
		let mut body = vec![0x00];
		body.extend_from_slice(b"DESCRIPTION\0CONTENT");

		let value = parse_content("TXXX", &body, Id3v2Version::V4);
		assert_eq!(
			value,
			FrameValue::UserText {
				encoding: TextEncoding::Latin1,
				description: String::from("DESCRIPTION"),
				content: String::from("CONTENT"),
			}
		);
	}

	#[test_log::test]
	fn user_text_without_terminator() {
		// The body never terminates the description, so there is none and
		// everything is the content
		let mut body = vec![0x00];
		body.extend_from_slice(b"CONTENT ONLY");

		let value = parse_content("TXXX", &body, Id3v2Version::V4);
		assert_eq!(
			value,
			FrameValue::UserText {
				encoding: TextEncoding::Latin1,
				description: String::new(),
				content: String::from("CONTENT ONLY"),
			}
		);
	}

	#[test_log::test]
	fn undeclared_id_is_binary() {
		// Shaped like a text frame, but no edition declares the ID
		let body = [0x03, 0x46, 0x6F, 0x6F];

		let value = parse_content("TZZZ", &body, Id3v2Version::V4);
		assert_eq!(value, FrameValue::Binary(body.to_vec()));
	}

	#[test_log::test]
	fn bad_encoding_byte_degrades_to_binary() {
		let body = [0x09, 0x46, 0x6F, 0x6F];

		let value = parse_content("TIT2", &body, Id3v2Version::V4);
		assert_eq!(value, FrameValue::Binary(body.to_vec()));
	}

	#[test_log::test]
	fn v22_picture_format() {
		let mut body = vec![0x00];
		body.extend_from_slice(b"PNG");
		body.push(0x03); // Front cover
		body.extend_from_slice(b"cover\0");
		body.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47]);

		let value = parse_content("PIC", &body, Id3v2Version::V2);
		let FrameValue::Picture(picture) = value else {
			panic!("expected a picture, got {value:?}");
		};

		assert_eq!(picture.mime_type(), Some(&MimeType::Png));
		assert_eq!(picture.pic_type(), PictureType::CoverFront);
		assert_eq!(picture.description(), Some("cover"));
		assert_eq!(picture.data(), &[0x89, 0x50, 0x4E, 0x47]);
	}

	#[test_log::test]
	fn apic_with_full_mime() {
		let mut body = vec![0x00];
		body.extend_from_slice(b"image/jpeg\0");
		body.push(0x00); // Other
		body.push(0x00); // Empty description
		body.extend_from_slice(&[0xFF, 0xD8, 0x00, 0xFF]);

		let value = parse_content("APIC", &body, Id3v2Version::V3);
		let FrameValue::Picture(picture) = value else {
			panic!("expected a picture, got {value:?}");
		};

		assert_eq!(picture.mime_type(), Some(&MimeType::Jpeg));
		assert_eq!(picture.description(), None);
		// Zero bytes inside the image data must survive
		assert_eq!(picture.data(), &[0xFF, 0xD8, 0x00, 0xFF]);
	}

	#[test_log::test]
	fn popularimeter() {
		let mut body = Vec::new();
		body.extend_from_slice(b"foo@bar.com\0");
		body.push(196);
		body.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]);

		let value = parse_content("POPM", &body, Id3v2Version::V4);
		assert_eq!(
			value,
			FrameValue::Popularimeter {
				email: String::from("foo@bar.com"),
				rating: 196,
				counter: 256,
			}
		);
	}

	#[test_log::test]
	fn involved_people_pairs() {
		let mut body = vec![0x03];
		body.extend_from_slice(b"producer\0Alex\0mixing\0Sam");

		let value = parse_content("TIPL", &body, Id3v2Version::V4);
		assert_eq!(
			value,
			FrameValue::InvolvedPeople(vec![
				Involvee {
					role: String::from("producer"),
					person: String::from("Alex"),
				},
				Involvee {
					role: String::from("mixing"),
					person: String::from("Sam"),
				},
			])
		);
	}

	#[test_log::test]
	fn unknown_frame_is_binary() {
		let body = [0x01, 0x02, 0x03];

		let value = parse_content("PRIV", &body, Id3v2Version::V4);
		assert_eq!(value, FrameValue::Binary(body.to_vec()));
	}
}
