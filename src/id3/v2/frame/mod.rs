mod content;
pub(super) mod header;
pub(super) mod read;

use crate::picture::Picture;
use crate::util::text::TextEncoding;

/// Flags from a frame header
///
/// The first three are status messages for writers, the rest describe how
/// the body is stored. All of them are recorded for inspection; decoding does
/// not transform the body based on them, so a compressed or encrypted frame
/// keeps its raw bytes.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The group identifier the frame belongs to
	///
	/// All frames with the same group identifier byte belong to the same group.
	pub grouping_identity: Option<u8>,
	/// Frame is zlib compressed
	///
	/// It is **required** `data_length_indicator` be set if this is set.
	pub compression: bool,
	/// Frame encryption method symbol
	///
	/// The encryption method symbol **must** be > 0x80.
	pub encryption: Option<u8>,
	/// Frame is unsynchronised
	///
	/// In short, this makes all "0xFF X (X >= 0xE0)" combinations into "0xFF 0x00 X" to avoid confusion
	/// with the MPEG frame header, which is often identified by its "frame sync" (11 set bits).
	pub unsynchronisation: bool,
	/// Frame has a data length indicator
	///
	/// The data length indicator is the size of the frame if the flags were all zeroed out.
	/// This is usually used in combination with `compression` and `encryption` (depending on encryption method).
	pub data_length_indicator: Option<u32>,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.4 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	/// * `data_length_indicator`
	pub fn parse_id3v24(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x4000 == 0x4000,
			file_alter_preservation: flags & 0x2000 == 0x2000,
			read_only: flags & 0x1000 == 0x1000,
			grouping_identity: (flags & 0x0040 == 0x0040).then_some(0),
			compression: flags & 0x0008 == 0x0008,
			encryption: (flags & 0x0004 == 0x0004).then_some(0),
			unsynchronisation: flags & 0x0002 == 0x0002,
			data_length_indicator: (flags & 0x0001 == 0x0001).then_some(0),
		}
	}

	/// Parse the flags from an ID3v2.3 frame
	///
	/// NOTE: If any of the following flags are set, they will be set to `Some(0)`:
	/// * `grouping_identity`
	/// * `encryption`
	pub fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			grouping_identity: (flags & 0x0020 == 0x0020).then_some(0),
			compression: flags & 0x0080 == 0x0080,
			encryption: (flags & 0x0040 == 0x0040).then_some(0),
			unsynchronisation: false,
			data_length_indicator: None,
		}
	}
}

/// The typed content of a frame
///
/// Each frame layout the engine understands has a variant here. Frames with
/// an undeclared layout, a body too short for their layout, or a storage
/// transformation we leave untouched (compression, encryption) fall back to
/// [`FrameValue::Binary`] rather than failing the parse.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameValue {
	/// A text information frame (`T***` except the user defined `TXX`/`TXXX`)
	Text {
		/// The encoding the text was stored in
		encoding: TextEncoding,
		/// The text itself
		///
		/// ID3v2.4 allows multiple values separated by a null; they are kept
		/// embedded here and split by the accessors that care.
		value: String,
	},
	/// A user defined text frame (`TXX`/`TXXX`)
	UserText {
		/// The encoding of the description and content
		encoding: TextEncoding,
		/// What the content describes
		description: String,
		/// The text itself
		content: String,
	},
	/// A URL frame (`W***` except the user defined `WXX`/`WXXX`)
	///
	/// URLs are always Latin-1.
	Url(String),
	/// A user defined URL frame (`WXX`/`WXXX`)
	UserUrl {
		/// The encoding of the description
		encoding: TextEncoding,
		/// What the URL points at
		description: String,
		/// The URL itself, always Latin-1
		url: String,
	},
	/// A unique file identifier (`UFI`/`UFID`)
	UniqueFileIdentifier {
		/// The owner or email of the identifier's database
		owner: String,
		/// The identifier, up to 64 bytes of anything
		identifier: Vec<u8>,
	},
	/// A comment frame (`COM`/`COMM`)
	Comment {
		/// The encoding of the description and content
		encoding: TextEncoding,
		/// An ISO-639-2 language code
		language: [u8; 3],
		/// A short description of the comment
		description: String,
		/// The comment itself
		content: String,
	},
	/// An unsynchronised lyrics frame (`ULT`/`USLT`)
	UnsynchronisedLyrics {
		/// The encoding of the description and content
		encoding: TextEncoding,
		/// An ISO-639-2 language code
		language: [u8; 3],
		/// A short description of the lyrics
		description: String,
		/// The lyrics themselves
		content: String,
	},
	/// An attached picture (`PIC`/`APIC`)
	Picture(Picture),
	/// A rating and play count (`POP`/`POPM`)
	Popularimeter {
		/// The email of the user who rated the track
		email: String,
		/// The rating, 1-255 with 255 as the best
		rating: u8,
		/// The play count
		counter: u64,
	},
	/// A terms of use frame (`USER`)
	TermsOfUse {
		/// The encoding of the content
		encoding: TextEncoding,
		/// An ISO-639-2 language code
		language: [u8; 3],
		/// The terms themselves
		content: String,
	},
	/// An involved people or musician credits list (`IPL`/`IPLS`/`TIPL`/`TMCL`)
	InvolvedPeople(Vec<Involvee>),
	/// The iTunes compilation flag (`TCP`/`TCMP`)
	Compilation(bool),
	/// Raw, undecoded content
	Binary(Vec<u8>),
}

/// A single role/person entry of an involved people list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Involvee {
	/// The role played
	pub role: String,
	/// The person who played it
	pub person: String,
}

/// A fully decoded frame: its ID, header flags, and typed content
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
	pub(crate) id: String,
	pub(crate) flags: FrameFlags,
	pub(crate) value: FrameValue,
}

impl Frame {
	/// Create a new `Frame`
	#[must_use]
	pub fn new(id: impl Into<String>, flags: FrameFlags, value: FrameValue) -> Self {
		Self {
			id: id.into(),
			flags,
			value,
		}
	}

	/// The frame ID, three characters for ID3v2.2 and four otherwise
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The flags from the frame header
	pub fn flags(&self) -> FrameFlags {
		self.flags
	}

	/// The decoded content
	pub fn value(&self) -> &FrameValue {
		&self.value
	}
}
