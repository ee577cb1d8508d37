use super::header::{parse_header, parse_v2_header};
use super::{Frame, FrameValue, content};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{Id3v2Error, Id3v2ErrorKind, Result};
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::registry::{self, FrameType};
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::util::text::TextEncoding;

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip { size: u32 },
	Eof,
}

impl ParsedFrame {
	pub(crate) fn read<R>(
		reader: &mut R,
		version: Id3v2Version,
		parse_options: ParseOptions,
	) -> Result<Self>
	where
		R: Read,
	{
		let mut size = 0u32;

		let parse_header_result = match version {
			Id3v2Version::V2 => parse_v2_header(reader, &mut size),
			Id3v2Version::V3 => parse_header(reader, &mut size, false),
			Id3v2Version::V4 => parse_header(reader, &mut size, true),
		};
		let (id, mut flags) = match parse_header_result {
			Ok(None) => {
				// Stop reading
				return Ok(Self::Eof);
			},
			Ok(Some(some)) => some,
			Err(err) => {
				match parse_options.parsing_mode {
					ParsingMode::Strict => return Err(err),
					ParsingMode::BestAttempt | ParsingMode::Relaxed => {
						// The size field of a frame with a mangled header
						// can't be trusted either, so everything from here on
						// is treated as padding
						log::warn!("Failed to read frame header, stopping: {}", err);
						return Ok(Self::Eof);
					},
				}
			},
		};

		if !parse_options.read_cover_art && (id == "PIC" || id == "APIC") {
			return Ok(Self::Skip { size });
		}

		if size == 0 {
			// A declared text frame with no body at all decodes softly to an
			// empty string; anything else carries no information
			let is_text = registry::declared_frame(&id, version)
				.is_some_and(|declared| declared.frame_type == FrameType::TextInformation);
			if is_text {
				let value = FrameValue::Text {
					encoding: TextEncoding::Latin1,
					value: String::new(),
				};
				return Ok(Self::Next(Frame::new(id, flags, value)));
			}

			log::debug!("Encountered a zero length frame, skipping");
			return Ok(Self::Skip { size });
		}

		// Get the encryption method symbol
		if let Some(enc) = flags.encryption.as_mut() {
			if size < 1 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
			}

			*enc = reader.read_u8()?;
			size -= 1;
		}

		// Get the group identifier
		if let Some(group) = flags.grouping_identity.as_mut() {
			if size < 1 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
			}

			*group = reader.read_u8()?;
			size -= 1;
		}

		// Get the real data length
		if flags.data_length_indicator.is_some() || flags.compression {
			if size < 4 {
				return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
			}

			// While a data length indicator is *written*, the flag isn't
			// always set alongside compression
			let len = reader.read_u32::<BigEndian>()?.unsynch();
			flags.data_length_indicator = Some(len);
			size -= 4;
		}

		let mut data = vec![0; size as usize];
		if reader.read_exact(&mut data).is_err() {
			// The declared size runs past the end of the frame area
			return Err(Id3v2Error::new(Id3v2ErrorKind::BadFrameLength).into());
		}

		// Compressed and encrypted bodies stay raw; the flags record what
		// would be needed to recover them
		let value = if flags.compression || flags.encryption.is_some() {
			FrameValue::Binary(data)
		} else {
			content::parse_content(&id, &data, version)
		};

		Ok(Self::Next(Frame::new(id, flags, value)))
	}
}
