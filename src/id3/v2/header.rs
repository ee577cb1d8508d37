use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// The major version byte as stored in the tag header
	pub fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}
}

/// Flags that apply to the entire tag
///
/// These are recorded from the header and exposed for inspection, decoding
/// itself does not act on them.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised. See [`FrameFlags::unsynchronisation`](crate::id3::v2::FrameFlags::unsynchronisation)
	pub unsynchronisation: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	pub footer: bool,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
	pub extended_size: u32,
}

impl Id3v2Header {
	/// Parse a tag header, requiring a specific version
	///
	/// Each edition gets its own scan position, so a header carrying a
	/// different version byte than `expected` means the expected edition is
	/// simply not present. That case and a missing "ID3" magic both surface
	/// as [`ErrorKind::FakeTag`](crate::error::ErrorKind::FakeTag), as does a
	/// source too short to hold a header at all.
	pub(crate) fn parse<R>(bytes: &mut R, expected: Id3v2Version) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header, expecting {:?}", expected);

		let mut header = [0; 10];
		if let Err(e) = bytes.read_exact(&mut header) {
			if e.kind() == std::io::ErrorKind::UnexpectedEof {
				err!(FakeTag);
			}

			return Err(e.into());
		}

		if &header[..3] != b"ID3" {
			err!(FakeTag);
		}

		// Version is stored as [major, minor], but minor revisions never changed the layout
		if header[3] != expected.major() {
			err!(FakeTag);
		}

		let version = expected;
		let flags = header[5];

		// Compression was a flag only used in ID3v2.2 (bit 2).
		// At the time the ID3v2.2 specification was written, a compression scheme wasn't decided.
		// The spec recommends just ignoring the tag in this case.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			return Err(Id3v2Error::new(Id3v2ErrorKind::V2Compression).into());
		}

		let flags_parsed = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			experimental: (version == Id3v2Version::V4 || version == Id3v2Version::V3)
				&& flags & 0x20 == 0x20,
			// Only ID3v2.4 defines a footer flag
			footer: version == Id3v2Version::V4 && flags & 0x10 == 0x10,
		};

		let size = BigEndian::read_u32(&header[6..]).unsynch();
		let mut extended_size = 0;

		let extended_header =
			(version == Id3v2Version::V4 || version == Id3v2Version::V3) && flags & 0x40 == 0x40;

		if extended_header {
			let ext_size_field = bytes.read_u32::<BigEndian>()?.unsynch();

			if ext_size_field < 6 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}

			// Nothing in the extended header affects frame decoding, so the
			// whole thing is skipped. ID3v2.4 counts the size field itself in
			// its size, ID3v2.3 does not.
			let remaining = if version == Id3v2Version::V4 {
				u64::from(ext_size_field - 4)
			} else {
				u64::from(ext_size_field)
			};

			let skipped = std::io::copy(&mut bytes.take(remaining), &mut std::io::sink())?;
			if skipped != remaining {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
			}

			// Normalized to the byte count the whole extended header occupies,
			// so the frame area is always `size - extended_size`
			extended_size = 4 + remaining as u32;
		}

		if extended_size > 0 && extended_size >= size {
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadExtendedHeaderSize).into());
		}

		Ok(Id3v2Header {
			version,
			flags: flags_parsed,
			size,
			extended_size,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	use std::io::Cursor;

	#[test_log::test]
	fn synchsafe_tag_size() {
		// 0x7F7F7F7F unpacks to 0xFFFFFFF, not the plain big-endian value
		let header = [b'I', b'D', b'3', 4, 0, 0, 0x7F, 0x7F, 0x7F, 0x7F];

		let parsed = Id3v2Header::parse(&mut Cursor::new(header), Id3v2Version::V4).unwrap();
		assert_eq!(parsed.size, 0xFFF_FFFF);
	}

	#[test_log::test]
	fn version_mismatch_is_a_fake_tag() {
		let header = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0];

		let err = Id3v2Header::parse(&mut Cursor::new(header), Id3v2Version::V4).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::FakeTag));
	}

	#[test_log::test]
	fn truncated_source_is_a_fake_tag() {
		let err = Id3v2Header::parse(&mut Cursor::new([b'I', b'D']), Id3v2Version::V2).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::FakeTag));
	}

	#[test_log::test]
	fn footer_flag_is_v24_only() {
		// ID3v2.3 defines no footer bit, so a set 0x10 there is writer garbage
		let v23 = [b'I', b'D', b'3', 3, 0, 0x10, 0, 0, 0, 0];
		let parsed = Id3v2Header::parse(&mut Cursor::new(v23), Id3v2Version::V3).unwrap();
		assert!(!parsed.flags.footer);

		let v24 = [b'I', b'D', b'3', 4, 0, 0x10, 0, 0, 0, 0];
		let parsed = Id3v2Header::parse(&mut Cursor::new(v24), Id3v2Version::V4).unwrap();
		assert!(parsed.flags.footer);
	}

	#[test_log::test]
	fn compressed_v22_is_rejected() {
		let header = [b'I', b'D', b'3', 2, 0, 0x40, 0, 0, 0, 0];

		let err = Id3v2Header::parse(&mut Cursor::new(header), Id3v2Version::V2).unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Id3v2(e) if matches!(e.kind(), Id3v2ErrorKind::V2Compression)
		));
	}
}
