use super::FrameFlags;
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::util::synchsafe::SynchsafeInteger;

use std::io::Read;

/// Validate and decode a frame ID
///
/// IDs are restricted to uppercase ASCII letters and digits.
fn parse_id(id_bytes: &[u8]) -> Result<String> {
	if !id_bytes
		.iter()
		.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
	{
		return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameId(id_bytes.to_vec())).into());
	}

	// Verified ASCII above
	Ok(id_bytes.iter().map(|b| *b as char).collect())
}

/// Parse an ID3v2.2 frame header: a 3 character ID and a 3 byte size
///
/// Returns `None` when the frame area ends, either at padding (a leading
/// null byte) or because too few bytes remain for a whole header.
pub(crate) fn parse_v2_header<R>(
	reader: &mut R,
	size: &mut u32,
) -> Result<Option<(String, FrameFlags)>>
where
	R: Read,
{
	let mut header = [0; 6];
	match reader.read_exact(&mut header) {
		Ok(_) => {},
		Err(_) => return Ok(None),
	}

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	*size = u32::from_be_bytes([0, header[3], header[4], header[5]]);

	let id = parse_id(&header[..3])?;

	// V2 doesn't store flags
	Ok(Some((id, FrameFlags::default())))
}

/// Parse an ID3v2.3/ID3v2.4 frame header: a 4 character ID, a 4 byte size
/// and 2 flag bytes
///
/// `synchsafe` selects the ID3v2.4 interpretation: the size field unpacks as
/// a synchsafe integer and the flag bits sit at their v2.4 positions.
pub(crate) fn parse_header<R>(
	reader: &mut R,
	size: &mut u32,
	synchsafe: bool,
) -> Result<Option<(String, FrameFlags)>>
where
	R: Read,
{
	let mut header = [0; 10];
	match reader.read_exact(&mut header) {
		Ok(_) => {},
		Err(_) => return Ok(None),
	}

	// Assume we just started reading padding
	if header[0] == 0 {
		return Ok(None);
	}

	*size = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
	if synchsafe {
		*size = size.unsynch();
	}

	let id = parse_id(&header[..4])?;

	let flags = u16::from_be_bytes([header[8], header[9]]);
	let flags = if synchsafe {
		FrameFlags::parse_id3v24(flags)
	} else {
		FrameFlags::parse_id3v23(flags)
	};

	Ok(Some((id, flags)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	use std::io::Cursor;

	#[test_log::test]
	fn synchsafe_frame_area_size_diverges_from_plain_big_endian() {
		// 0x00 0x00 0x02 0x01 is 513 read plainly, but 257 as synchsafe
		let header = [b'T', b'I', b'T', b'2', 0x00, 0x00, 0x02, 0x01, 0, 0];

		let mut size = 0;
		parse_header(&mut Cursor::new(header), &mut size, false).unwrap();
		assert_eq!(size, 513);

		let mut size = 0;
		parse_header(&mut Cursor::new(header), &mut size, true).unwrap();
		assert_eq!(size, 257);
	}

	#[test_log::test]
	fn padding_ends_the_frame_area() {
		let header = [0u8; 10];

		let mut size = 0;
		let parsed = parse_header(&mut Cursor::new(header), &mut size, true).unwrap();
		assert!(parsed.is_none());

		// A truncated header reads the same as padding
		let mut size = 0;
		let parsed = parse_v2_header(&mut Cursor::new([b'T'; 2]), &mut size).unwrap();
		assert!(parsed.is_none());
	}

	#[test_log::test]
	fn invalid_id_characters() {
		let header = [b'T', b'+', b'T', b'2', 0, 0, 0, 1, 0, 0];

		let mut size = 0;
		let err = parse_header(&mut Cursor::new(header), &mut size, true).unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Id3v2(e) if matches!(e.kind(), Id3v2ErrorKind::BadFrameId(_))
		));
	}

	#[test_log::test]
	fn v23_and_v24_flag_positions() {
		let v23 = FrameFlags::parse_id3v23(0x80A0);
		assert!(v23.tag_alter_preservation);
		assert!(v23.compression);
		assert_eq!(v23.grouping_identity, Some(0));

		let v24 = FrameFlags::parse_id3v24(0x4043);
		assert!(v24.tag_alter_preservation);
		assert_eq!(v24.grouping_identity, Some(0));
		assert!(v24.unsynchronisation);
		assert_eq!(v24.data_length_indicator, Some(0));
	}
}
