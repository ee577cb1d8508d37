/// The text encoding for use in ID3v2 frames
///
/// Each frame that carries human-readable text starts with one of these as
/// a single byte, which decides both the decoding and the width of the
/// null terminator used to split multi-string bodies.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	Utf16 = 1,
	/// UTF-16 big endian
	Utf16Be = 2,
	/// UTF-8
	Utf8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::Utf16),
			2 => Some(Self::Utf16Be),
			3 => Some(Self::Utf8),
			_ => None,
		}
	}

	/// The width in bytes of one code unit, and therefore of the null terminator
	pub fn code_unit_width(self) -> usize {
		match self {
			Self::Latin1 | Self::Utf8 => 1,
			Self::Utf16 | Self::Utf16Be => 2,
		}
	}
}

/// Decode a byte span according to `encoding`
///
/// This never fails; unrepresentable sequences degrade to the replacement
/// character so that one bad string can't halt a whole tag parse.
pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> String {
	match encoding {
		TextEncoding::Latin1 => latin1_decode(bytes),
		TextEncoding::Utf16 => utf16_decode(bytes),
		TextEncoding::Utf16Be => utf16_decode_bytes(realign(bytes), u16::from_be_bytes),
		TextEncoding::Utf8 => {
			let mut text = String::from_utf8_lossy(bytes).into_owned();
			trim_end_nulls(&mut text);
			text
		},
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| *c as char).collect::<String>();
	trim_end_nulls(&mut text);
	text
}

/// Decode UTF-16 with an optional byte order mark
///
/// A `FF FE` mark selects little-endian, `FE FF` big-endian. Legacy writers
/// often omit the mark entirely, in which case little-endian is assumed
/// (that is what those writers produced).
fn utf16_decode(bytes: &[u8]) -> String {
	let mut bytes = realign(bytes);

	let endianness: fn([u8; 2]) -> u16 = match bytes {
		[0xFF, 0xFE, ..] => {
			bytes = &bytes[2..];
			u16::from_le_bytes
		},
		[0xFE, 0xFF, ..] => {
			bytes = &bytes[2..];
			u16::from_be_bytes
		},
		_ => u16::from_le_bytes,
	};

	utf16_decode_bytes(bytes, endianness)
}

/// Drop a stray byte from an odd-length UTF-16 span
///
/// Legacy data contains strings that lost a byte somewhere. A leading null is
/// assumed to be the culprit when present, otherwise the trailing byte goes.
fn realign(bytes: &[u8]) -> &[u8] {
	if bytes.len() % 2 == 0 {
		return bytes;
	}

	if bytes.first() == Some(&0) {
		&bytes[1..]
	} else {
		&bytes[..bytes.len() - 1]
	}
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
	if bytes.is_empty() {
		return String::new();
	}

	let units: Vec<u16> = bytes
		.chunks_exact(2)
		// It is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible to encounter multiple BOMs in a single string.
		// We must filter them out.
		.filter_map(|c| match c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			_ => Some(endianness([c[0], c[1]])),
		})
		.collect();

	let mut text = String::from_utf16_lossy(&units);
	trim_end_nulls(&mut text);
	text
}

/// Find the offset of the next terminator run, scanning in code-unit steps
///
/// The returned offset is relative to the whole span, not to `start`.
pub(crate) fn find_terminator(
	bytes: &[u8],
	start: usize,
	encoding: TextEncoding,
) -> Option<usize> {
	let width = encoding.code_unit_width();

	let mut i = start;
	while i + width <= bytes.len() {
		if bytes[i..i + width].iter().all(|b| *b == 0) {
			return Some(i);
		}

		i += width;
	}

	None
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}

#[cfg(test)]
mod tests {
	use super::{TextEncoding, decode_text, find_terminator};

	const TEST_STRING: &str = "m\u{00f8}t\u{00a5}";

	#[test_log::test]
	fn utf16_bom_handling() {
		// Little-endian mark, the case in the wild
		let le = decode_text(&[0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00], TextEncoding::Utf16);
		assert_eq!(le, "AB");

		// Big-endian mark
		let be = decode_text(&[0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42], TextEncoding::Utf16);
		assert_eq!(be, "AB");

		// No mark at all, assumed little-endian
		let bare = decode_text(&[0x41, 0x00, 0x42, 0x00], TextEncoding::Utf16);
		assert_eq!(bare, "AB");
	}

	#[test_log::test]
	fn utf16_realignment() {
		// Odd length with a leading null: the null is dropped
		let lead = decode_text(&[0x00, 0x41, 0x00, 0x42, 0x00], TextEncoding::Utf16Be);
		assert_eq!(lead, "AB");

		// Odd length without one: the trailing byte is dropped
		let trail = decode_text(
			&[0xFF, 0xFE, 0x41, 0x00, 0x42, 0x00, 0x42],
			TextEncoding::Utf16,
		);
		assert_eq!(trail, "AB");
	}

	#[test_log::test]
	fn latin1_and_utf8() {
		let latin1 = decode_text(&[0x6D, 0xF8, 0x74, 0xA5], TextEncoding::Latin1);
		assert_eq!(latin1, TEST_STRING);

		let utf8 = decode_text(TEST_STRING.as_bytes(), TextEncoding::Utf8);
		assert_eq!(utf8, TEST_STRING);

		// Trailing nulls are not part of the value
		let padded = decode_text(b"AB\0\0", TextEncoding::Latin1);
		assert_eq!(padded, "AB");
	}

	#[test_log::test]
	fn terminator_scan_respects_code_unit_width() {
		// A single zero byte inside a UTF-16 code unit is not a terminator
		let body = [0x41, 0x00, 0x42, 0x00, 0x00, 0x00, 0x43, 0x00];
		assert_eq!(find_terminator(&body, 0, TextEncoding::Utf16), Some(4));
		assert_eq!(find_terminator(&body, 0, TextEncoding::Latin1), Some(1));

		// No terminator present
		assert_eq!(find_terminator(b"ABC", 0, TextEncoding::Latin1), None);
	}
}
