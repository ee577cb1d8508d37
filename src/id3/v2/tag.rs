use super::frame::{Frame, FrameValue};
use super::header::{Id3v2Header, Id3v2TagFlags, Id3v2Version};
use super::read::parse_id3v2;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v1::GENRES;
use crate::picture::Picture;

use std::io::Read;

/// An ID3v2 tag of any edition
///
/// The edition it was read as decides which frame IDs the accessors consult;
/// everything else about a decoded frame is edition independent.
#[derive(Debug, Clone, PartialEq)]
pub struct Id3v2Tag {
	version: Id3v2Version,
	flags: Id3v2TagFlags,
	frames: Vec<Frame>,
}

impl Id3v2Tag {
	pub(crate) fn new(version: Id3v2Version, flags: Id3v2TagFlags) -> Self {
		Self {
			version,
			flags,
			frames: Vec::new(),
		}
	}

	/// Read a tag of a specific edition from the reader's current position
	///
	/// # Errors
	///
	/// * No tag of the requested edition starts here ([`ErrorKind::FakeTag`](crate::error::ErrorKind::FakeTag))
	/// * The tag is structurally broken, see [`Id3v2ErrorKind`](crate::error::Id3v2ErrorKind)
	pub fn read_from<R>(
		reader: &mut R,
		version: Id3v2Version,
		parse_options: ParseOptions,
	) -> Result<Self>
	where
		R: Read,
	{
		let header = Id3v2Header::parse(reader, version)?;
		parse_id3v2(reader, header, parse_options)
	}

	pub(crate) fn push(&mut self, frame: Frame) {
		self.frames.push(frame);
	}

	/// The edition this tag was read as
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The flags from the tag header
	pub fn flags(&self) -> Id3v2TagFlags {
		self.flags
	}

	/// All decoded frames, in file order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag contains no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// The first frame with the given ID
	pub fn get(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.id() == id)
	}

	/// The text of the first text frame with the given ID
	pub fn get_text(&self, id: &str) -> Option<&str> {
		match self.get(id)?.value() {
			FrameValue::Text { value, .. } => Some(value),
			_ => None,
		}
	}

	// Each accessor consults the ID its edition declares, the 3 character
	// form for ID3v2.2 and the 4 character form otherwise.
	fn versioned_text(&self, v2_id: &str, id: &str) -> Option<&str> {
		if self.version == Id3v2Version::V2 {
			self.get_text(v2_id)
		} else {
			self.get_text(id)
		}
	}

	/// The track title (`TT2`/`TIT2`)
	pub fn title(&self) -> Option<&str> {
		self.versioned_text("TT2", "TIT2")
	}

	/// The lead artists (`TP1`/`TPE1`)
	///
	/// Multiple artists are stored in one frame, separated by `/` (or by
	/// nulls in ID3v2.4).
	pub fn artists(&self) -> Option<Vec<String>> {
		self.versioned_text("TP1", "TPE1").map(split_values)
	}

	/// The album title (`TAL`/`TALB`)
	pub fn album(&self) -> Option<&str> {
		self.versioned_text("TAL", "TALB")
	}

	/// The album artists (`TP2`/`TPE2`)
	pub fn album_artists(&self) -> Option<Vec<String>> {
		self.versioned_text("TP2", "TPE2").map(split_values)
	}

	/// The release year
	///
	/// ID3v2.4 replaced the year frame with the `TDRC` timestamp; its leading
	/// four digits are the year.
	pub fn year(&self) -> Option<u16> {
		let value = match self.version {
			Id3v2Version::V2 => self.get_text("TYE"),
			Id3v2Version::V3 => self.get_text("TYER"),
			Id3v2Version::V4 => self.get_text("TDRC"),
		}?;

		parse_year(value)
	}

	/// The track number, and the track count when the frame declares one
	///
	/// `"3/12"` is track 3 of 12; a bare `"3"` has no count.
	pub fn track(&self) -> Option<(u32, Option<u32>)> {
		let value = self.versioned_text("TRK", "TRCK")?;

		let mut split = value.splitn(2, '/');
		let track = split.next()?.parse::<u32>().ok()?;
		let total = split.next().and_then(|total| total.parse::<u32>().ok());

		Some((track, total))
	}

	/// The resolved genre list (`TCO`/`TCON`)
	///
	/// Numeric references are resolved against [`GENRES`], see
	/// [`parse_genres`] for the whole grammar.
	pub fn genres(&self) -> Option<Vec<String>> {
		self.versioned_text("TCO", "TCON").map(parse_genres)
	}

	/// All attached pictures (`PIC`/`APIC`), in file order
	pub fn pictures(&self) -> Vec<&Picture> {
		self.frames
			.iter()
			.filter_map(|frame| match frame.value() {
				FrameValue::Picture(picture) => Some(picture),
				_ => None,
			})
			.collect()
	}

	/// The content of the first comment frame (`COM`/`COMM`)
	pub fn comment(&self) -> Option<&str> {
		self.frames.iter().find_map(|frame| match frame.value() {
			FrameValue::Comment { content, .. } => Some(content.as_str()),
			_ => None,
		})
	}

	/// The content of the first lyrics frame (`ULT`/`USLT`)
	pub fn lyrics(&self) -> Option<&str> {
		self.frames.iter().find_map(|frame| match frame.value() {
			FrameValue::UnsynchronisedLyrics { content, .. } => Some(content.as_str()),
			_ => None,
		})
	}
}

/// Split a multi-valued text frame into its values
fn split_values(value: &str) -> Vec<String> {
	value
		.split(['/', '\0'])
		.map(str::to_owned)
		.collect::<Vec<_>>()
}

fn parse_year(value: &str) -> Option<u16> {
	let digits = value.get(..4)?;
	if !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	digits.parse::<u16>().ok()
}

/// Resolve a content type string into genre names
///
/// The grammar mixes three things:
///
/// * Parenthesized references: `(13)` is an index into [`GENRES`], `(RX)`
///   and `(CR)` mean "Remix" and "Cover". Text following a reference is a
///   refinement of it and does not contribute its own entry.
/// * Free text before any reference, kept verbatim.
/// * A string that is nothing but digits, treated as a bare table index.
///
/// ID3v2.4 dropped the references for null-separated plain values; nulls are
/// handled here too, so one code path serves every edition.
pub fn parse_genres(value: &str) -> Vec<String> {
	let mut genres = Vec::new();

	for part in value.split('\0') {
		resolve_genre(part, &mut genres);
	}

	genres
}

fn resolve_genre(value: &str, genres: &mut Vec<String>) {
	if value.is_empty() {
		return;
	}

	let mut rest = value;
	match rest.find('(') {
		// Free text before the first reference is a genre of its own
		Some(open) if open > 0 => {
			genres.push(rest[..open].to_owned());
			rest = &rest[open..];
		},
		Some(_) => {},
		None => {
			// No references at all: either a bare table index or plain text
			if rest.bytes().all(|b| b.is_ascii_digit()) {
				if let Some(genre) = rest
					.parse::<usize>()
					.ok()
					.and_then(|idx| GENRES.get(idx).copied())
				{
					genres.push(genre.to_owned());
					return;
				}
			}

			genres.push(rest.to_owned());
			return;
		},
	}

	while let Some(stripped) = rest.strip_prefix('(') {
		let Some(close) = stripped.find(')') else {
			// Unbalanced parenthesis, keep the remainder verbatim
			genres.push(rest.to_owned());
			return;
		};

		let reference = &stripped[..close];
		match reference {
			"RX" => genres.push(String::from("Remix")),
			"CR" => genres.push(String::from("Cover")),
			_ if !reference.is_empty() && reference.bytes().all(|b| b.is_ascii_digit()) => {
				// An index past the table stays as text, like the bare form
				match reference
					.parse::<usize>()
					.ok()
					.and_then(|idx| GENRES.get(idx).copied())
				{
					Some(genre) => genres.push(genre.to_owned()),
					None => genres.push(reference.to_owned()),
				}
			},
			_ => genres.push(reference.to_owned()),
		}

		rest = &stripped[close + 1..];

		// Whatever sits between this reference and the next refines the one
		// just pushed, it is not a genre of its own
		match rest.find('(') {
			Some(next) => rest = &rest[next..],
			None => return,
		}
	}
}
