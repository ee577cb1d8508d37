//! The unified, edition-reconciling view over a source's tags
//!
//! A single file can carry an ID3v1 trailer and several framed editions at
//! once. [`UnifiedTag`] reads whichever are present and answers field
//! queries from the newest edition that has the field, falling back edition
//! by edition down to ID3v1.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v1::Id3v1Tag;
use crate::id3::v2::{Id3v2Tag, Id3v2Version};
use crate::picture::Picture;

use std::io::{Read, Seek, SeekFrom};

/// Every tag found in a source, reconciled behind one set of accessors
///
/// # Examples
///
/// ```rust,no_run
/// use multitag::UnifiedTag;
///
/// # fn main() -> multitag::error::Result<()> {
/// let mut file = std::fs::File::open("song.mp3")?;
/// let tag = UnifiedTag::read_from(&mut file)?;
///
/// if let Some(title) = tag.title() {
/// 	println!("{title}");
/// }
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedTag {
	v1: Option<Id3v1Tag>,
	v22: Option<Id3v2Tag>,
	v23: Option<Id3v2Tag>,
	v24: Option<Id3v2Tag>,
}

/// Downgrade "no tag of this edition here" to an absence, keep real failures
fn attempt<T>(result: Result<T>) -> Result<Option<T>> {
	match result {
		Ok(tag) => Ok(Some(tag)),
		Err(err) if err.is_tag_absent() => Ok(None),
		Err(err) => Err(err),
	}
}

impl UnifiedTag {
	/// Read every edition from `reader` with the default [`ParseOptions`]
	///
	/// # Errors
	///
	/// * I/O failure on the reader
	/// * A tag that is present but structurally broken
	///
	/// An edition that is simply not present is never an error.
	pub fn read_from<R>(reader: &mut R) -> Result<Self>
	where
		R: Read + Seek,
	{
		Self::read_from_with(reader, ParseOptions::new())
	}

	/// Read every edition from `reader`
	///
	/// Each edition gets its own scan: the framed editions from the start of
	/// the source, ID3v1 from its trailing 128 bytes.
	///
	/// # Errors
	///
	/// See [`UnifiedTag::read_from`]
	pub fn read_from_with<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		let v1 = read_id3v1(reader, parse_options)?;

		let mut read_version = |version| -> Result<Option<Id3v2Tag>> {
			reader.seek(SeekFrom::Start(0))?;
			attempt(Id3v2Tag::read_from(reader, version, parse_options))
		};

		let v22 = read_version(Id3v2Version::V2)?;
		let v23 = read_version(Id3v2Version::V3)?;
		let v24 = read_version(Id3v2Version::V4)?;

		Ok(Self { v1, v22, v23, v24 })
	}

	/// The ID3v1 tag, if the source has one
	pub fn id3v1(&self) -> Option<&Id3v1Tag> {
		self.v1.as_ref()
	}

	/// The ID3v2.2 tag, if the source has one
	pub fn id3v22(&self) -> Option<&Id3v2Tag> {
		self.v22.as_ref()
	}

	/// The ID3v2.3 tag, if the source has one
	pub fn id3v23(&self) -> Option<&Id3v2Tag> {
		self.v23.as_ref()
	}

	/// The ID3v2.4 tag, if the source has one
	pub fn id3v24(&self) -> Option<&Id3v2Tag> {
		self.v24.as_ref()
	}

	/// Whether no edition was found at all
	pub fn is_empty(&self) -> bool {
		self.v1.is_none() && self.v22.is_none() && self.v23.is_none() && self.v24.is_none()
	}

	// Newest edition first
	fn framed(&self) -> impl Iterator<Item = &Id3v2Tag> {
		[self.v24.as_ref(), self.v23.as_ref(), self.v22.as_ref()]
			.into_iter()
			.flatten()
	}

	/// The track title from the newest edition that has one
	pub fn title(&self) -> Option<&str> {
		self.framed()
			.find_map(Id3v2Tag::title)
			.or_else(|| self.v1.as_ref().and_then(|v1| v1.title.as_deref()))
	}

	/// The artist list from the newest edition that has one
	///
	/// ID3v1 stores a single artist, which becomes a one element list.
	pub fn artists(&self) -> Option<Vec<String>> {
		self.framed().find_map(Id3v2Tag::artists).or_else(|| {
			self.v1
				.as_ref()
				.and_then(|v1| v1.artist.clone())
				.map(|artist| vec![artist])
		})
	}

	/// The album title from the newest edition that has one
	pub fn album(&self) -> Option<&str> {
		self.framed()
			.find_map(Id3v2Tag::album)
			.or_else(|| self.v1.as_ref().and_then(|v1| v1.album.as_deref()))
	}

	/// The album artist list from the newest framed edition that has one
	///
	/// ID3v1 has no album artist field.
	pub fn album_artists(&self) -> Option<Vec<String>> {
		self.framed().find_map(Id3v2Tag::album_artists)
	}

	/// The release year from the newest edition that has one
	pub fn year(&self) -> Option<u16> {
		self.framed()
			.find_map(Id3v2Tag::year)
			.or_else(|| self.v1.as_ref().and_then(|v1| v1.year))
	}

	/// The track number, and count when declared, from the newest edition
	/// that has one
	pub fn track(&self) -> Option<(u32, Option<u32>)> {
		self.framed().find_map(Id3v2Tag::track).or_else(|| {
			self.v1
				.as_ref()
				.and_then(|v1| v1.track_number)
				.map(|track| (u32::from(track), None))
		})
	}

	/// The resolved genre list from the newest edition that has one
	pub fn genres(&self) -> Option<Vec<String>> {
		self.framed().find_map(Id3v2Tag::genres).or_else(|| {
			self.v1
				.as_ref()
				.and_then(Id3v1Tag::genre_str)
				.map(|genre| vec![genre.to_owned()])
		})
	}

	/// The attached pictures of the newest edition that has any
	///
	/// ID3v1 cannot store pictures.
	pub fn pictures(&self) -> Vec<&Picture> {
		self.framed()
			.map(Id3v2Tag::pictures)
			.find(|pictures| !pictures.is_empty())
			.unwrap_or_default()
	}

	/// The first comment of the newest edition that has one
	pub fn comment(&self) -> Option<&str> {
		self.framed()
			.find_map(Id3v2Tag::comment)
			.or_else(|| self.v1.as_ref().and_then(|v1| v1.comment.as_deref()))
	}

	/// The first lyrics text of the newest framed edition that has one
	pub fn lyrics(&self) -> Option<&str> {
		self.framed().find_map(Id3v2Tag::lyrics)
	}
}

fn read_id3v1<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Id3v1Tag>>
where
	R: Read + Seek,
{
	let len = reader.seek(SeekFrom::End(0))?;
	if len < 128 {
		return Ok(None);
	}

	reader.seek(SeekFrom::End(-128))?;

	let mut block = [0; 128];
	reader.read_exact(&mut block)?;

	attempt(Id3v1Tag::parse(block, parse_options.parsing_mode))
}
