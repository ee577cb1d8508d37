//! The declared frame registries
//!
//! Each edition of the format declares its own set of frame IDs, and the
//! declared ID decides which body layout applies. Unknown IDs still parse,
//! their content is just kept as binary.
//!
//! A few widely written nonstandard IDs are included: the iTunes compilation
//! flag (`TCP`/`TCMP`) and the podcast URL (`WFED`).

use super::header::Id3v2Version;

/// The body layout a declared frame uses
///
/// Declared frames whose layout this engine does not decode carry
/// [`FrameType::Unknown`] and keep their raw bytes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameType {
	/// A text information frame
	TextInformation,
	/// A user defined text frame
	UserDefinedText,
	/// A URL frame
	UrlLink,
	/// A user defined URL frame
	UserDefinedUrlLink,
	/// A unique file identifier
	UniqueFileIdentifier,
	/// A comment
	Comments,
	/// Unsynchronised lyrics
	UnsynchronisedLyrics,
	/// An attached picture
	AttachedPicture,
	/// A rating and play count
	Popularimeter,
	/// A terms of use frame
	TermsOfUse,
	/// An involved people or musician credits list
	InvolvedPeopleList,
	/// The iTunes compilation flag
	CompilationFlag,
	/// Declared, but with a layout that stays opaque
	Unknown,
}

/// An entry of an edition's declared frame table
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DeclaredFrame {
	/// The frame ID, three characters for ID3v2.2 and four otherwise
	pub id: &'static str,
	/// The description the informal standard gives the ID
	pub description: &'static str,
	/// The body layout the ID uses
	pub frame_type: FrameType,
}

/// Look up a frame ID in an edition's declared frame table
///
/// Returns `None` for IDs the edition does not declare.
///
/// # Examples
///
/// ```rust
/// use multitag::id3::v2::Id3v2Version;
/// use multitag::id3::v2::registry::declared_frame;
///
/// let declared = declared_frame("TT2", Id3v2Version::V2).unwrap();
/// assert_eq!(declared.description, "Title/Songname/Content description");
///
/// // TYER was dropped in ID3v2.4 in favor of TDRC
/// assert!(declared_frame("TYER", Id3v2Version::V3).is_some());
/// assert!(declared_frame("TYER", Id3v2Version::V4).is_none());
/// ```
pub fn declared_frame(id: &str, version: Id3v2Version) -> Option<DeclaredFrame> {
	let table: &[(&str, &str, FrameType)] = match version {
		Id3v2Version::V2 => DECLARED_FRAMES_V2,
		Id3v2Version::V3 => DECLARED_FRAMES_V3,
		Id3v2Version::V4 => DECLARED_FRAMES_V4,
	};

	table
		.binary_search_by_key(&id, |(id, ..)| *id)
		.ok()
		.map(|idx| {
			let (id, description, frame_type) = table[idx];
			DeclaredFrame {
				id,
				description,
				frame_type,
			}
		})
}

use FrameType::{
	AttachedPicture, Comments, CompilationFlag, InvolvedPeopleList, Popularimeter,
	TermsOfUse, TextInformation, UniqueFileIdentifier, UnsynchronisedLyrics, Unknown,
	UrlLink, UserDefinedText, UserDefinedUrlLink,
};

// Tables are sorted by ID for the binary search above.

static DECLARED_FRAMES_V2: &[(&str, &str, FrameType)] = &[
	("BUF", "Recommended buffer size", Unknown),
	("CNT", "Play counter", Unknown),
	("COM", "Comments", Comments),
	("CRA", "Audio encryption", Unknown),
	("CRM", "Encrypted meta frame", Unknown),
	("EQU", "Equalization", Unknown),
	("ETC", "Event timing codes", Unknown),
	("GEO", "General encapsulated object", Unknown),
	("IPL", "Involved people list", InvolvedPeopleList),
	("LNK", "Linked information", Unknown),
	("MCI", "Music CD Identifier", Unknown),
	("MLL", "MPEG location lookup table", Unknown),
	("PIC", "Attached picture", AttachedPicture),
	("POP", "Popularimeter", Popularimeter),
	("REV", "Reverb", Unknown),
	("RVA", "Relative volume adjustment", Unknown),
	("SLT", "Synchronized lyric/text", Unknown),
	("STC", "Synced tempo codes", Unknown),
	("TAL", "Album/Movie/Show title", TextInformation),
	("TBP", "BPM (Beats Per Minute)", TextInformation),
	("TCM", "Composer", TextInformation),
	("TCO", "Content type", TextInformation),
	("TCP", "Compilation", CompilationFlag),
	("TCR", "Copyright message", TextInformation),
	("TDA", "Date", TextInformation),
	("TDY", "Playlist delay", TextInformation),
	("TEN", "Encoded by", TextInformation),
	("TFT", "File type", TextInformation),
	("TIM", "Time", TextInformation),
	("TKE", "Initial key", TextInformation),
	("TLA", "Language(s)", TextInformation),
	("TLE", "Length", TextInformation),
	("TMT", "Media type", TextInformation),
	("TOA", "Original artist(s)/performer(s)", TextInformation),
	("TOF", "Original filename", TextInformation),
	("TOL", "Original Lyricist(s)/text writer(s)", TextInformation),
	("TOR", "Original release year", TextInformation),
	("TOT", "Original album/Movie/Show title", TextInformation),
	(
		"TP1",
		"Lead artist(s)/Lead performer(s)/Soloist(s)/Performing group",
		TextInformation,
	),
	("TP2", "Band/Orchestra/Accompaniment", TextInformation),
	("TP3", "Conductor/Performer refinement", TextInformation),
	(
		"TP4",
		"Interpreted, remixed, or otherwise modified by",
		TextInformation,
	),
	("TPA", "Part of a set", TextInformation),
	("TPB", "Publisher", TextInformation),
	(
		"TRC",
		"ISRC (International Standard Recording Code)",
		TextInformation,
	),
	("TRD", "Recording dates", TextInformation),
	("TRK", "Track number/Position in set", TextInformation),
	("TSI", "Size", TextInformation),
	(
		"TSS",
		"Software/hardware and settings used for encoding",
		TextInformation,
	),
	("TT1", "Content group description", TextInformation),
	("TT2", "Title/Songname/Content description", TextInformation),
	("TT3", "Subtitle/Description refinement", TextInformation),
	("TXT", "Lyricist/text writer", TextInformation),
	("TXX", "User defined text information frame", UserDefinedText),
	("TYE", "Year", TextInformation),
	("UFI", "Unique file identifier", UniqueFileIdentifier),
	(
		"ULT",
		"Unsychronized lyric/text transcription",
		UnsynchronisedLyrics,
	),
	("WAF", "Official audio file webpage", UrlLink),
	("WAR", "Official artist/performer webpage", UrlLink),
	("WAS", "Official audio source webpage", UrlLink),
	("WCM", "Commercial information", UrlLink),
	("WCP", "Copyright/Legal information", UrlLink),
	("WPB", "Publishers official webpage", UrlLink),
	("WXX", "User defined URL link frame", UserDefinedUrlLink),
];

static DECLARED_FRAMES_V3: &[(&str, &str, FrameType)] = &[
	("AENC", "Audio encryption", Unknown),
	("APIC", "Attached picture", AttachedPicture),
	("COMM", "Comments", Comments),
	("COMR", "Commercial frame", Unknown),
	("ENCR", "Encryption method registration", Unknown),
	("EQUA", "Equalization", Unknown),
	("ETCO", "Event timing codes", Unknown),
	("GEOB", "General encapsulated object", Unknown),
	("GRID", "Group identification registration", Unknown),
	("IPLS", "Involved people list", InvolvedPeopleList),
	("LINK", "Linked information", Unknown),
	("MCDI", "Music CD identifier", Unknown),
	("MLLT", "MPEG location lookup table", Unknown),
	("OWNE", "Ownership frame", Unknown),
	("PCNT", "Play counter", Unknown),
	("POPM", "Popularimeter", Popularimeter),
	("POSS", "Position synchronisation frame", Unknown),
	("PRIV", "Private frame", Unknown),
	("RBUF", "Recommended buffer size", Unknown),
	("RVAD", "Relative volume adjustment", Unknown),
	("RVRB", "Reverb", Unknown),
	("SYLT", "Synchronized lyric/text", Unknown),
	("SYTC", "Synchronized tempo codes", Unknown),
	("TALB", "Album/Movie/Show title", TextInformation),
	("TBPM", "BPM (beats per minute)", TextInformation),
	("TCMP", "Compilation", CompilationFlag),
	("TCOM", "Composer", TextInformation),
	("TCON", "Content type", TextInformation),
	("TCOP", "Copyright message", TextInformation),
	("TDAT", "Date", TextInformation),
	("TDLY", "Playlist delay", TextInformation),
	("TENC", "Encoded by", TextInformation),
	("TEXT", "Lyricist/Text writer", TextInformation),
	("TFLT", "File type", TextInformation),
	("TIME", "Time", TextInformation),
	("TIT1", "Content group description", TextInformation),
	("TIT2", "Title/songname/content description", TextInformation),
	("TIT3", "Subtitle/Description refinement", TextInformation),
	("TKEY", "Initial key", TextInformation),
	("TLAN", "Language(s)", TextInformation),
	("TLEN", "Length", TextInformation),
	("TMED", "Media type", TextInformation),
	("TOAL", "Original album/movie/show title", TextInformation),
	("TOFN", "Original filename", TextInformation),
	("TOLY", "Original lyricist(s)/text writer(s)", TextInformation),
	("TOPE", "Original artist(s)/performer(s)", TextInformation),
	("TORY", "Original release year", TextInformation),
	("TOWN", "File owner/licensee", TextInformation),
	("TPE1", "Lead performer(s)/Soloist(s)", TextInformation),
	("TPE2", "Band/orchestra/accompaniment", TextInformation),
	("TPE3", "Conductor/performer refinement", TextInformation),
	(
		"TPE4",
		"Interpreted, remixed, or otherwise modified by",
		TextInformation,
	),
	("TPOS", "Part of a set", TextInformation),
	("TPUB", "Publisher", TextInformation),
	("TRCK", "Track number/Position in set", TextInformation),
	("TRDA", "Recording dates", TextInformation),
	("TRSN", "Internet radio station name", TextInformation),
	("TRSO", "Internet radio station owner", TextInformation),
	("TSIZ", "Size", TextInformation),
	(
		"TSRC",
		"ISRC (international standard recording code)",
		TextInformation,
	),
	(
		"TSSE",
		"Software/Hardware and settings used for encoding",
		TextInformation,
	),
	("TXXX", "User defined text information frame", UserDefinedText),
	("TYER", "Year", TextInformation),
	("UFID", "Unique file identifier", UniqueFileIdentifier),
	("USER", "Terms of use", TermsOfUse),
	(
		"USLT",
		"Unsychronized lyric/text transcription",
		UnsynchronisedLyrics,
	),
	("WCOM", "Commercial information", UrlLink),
	("WCOP", "Copyright/Legal information", UrlLink),
	("WFED", "Podcast URL", UrlLink),
	("WOAF", "Official audio file webpage", UrlLink),
	("WOAR", "Official artist/performer webpage", UrlLink),
	("WOAS", "Official audio source webpage", UrlLink),
	("WORS", "Official internet radio station homepage", UrlLink),
	("WPAY", "Payment", UrlLink),
	("WPUB", "Publishers official webpage", UrlLink),
	("WXXX", "User defined URL link frame", UserDefinedUrlLink),
];

static DECLARED_FRAMES_V4: &[(&str, &str, FrameType)] = &[
	("AENC", "Audio encryption", Unknown),
	("APIC", "Attached picture", AttachedPicture),
	("ASPI", "Audio seek point index", Unknown),
	("COMM", "Comments", Comments),
	("COMR", "Commercial frame", Unknown),
	("ENCR", "Encryption method registration", Unknown),
	("EQU2", "Equalisation (2)", Unknown),
	("ETCO", "Event timing codes", Unknown),
	("GEOB", "General encapsulated object", Unknown),
	("GRID", "Group identification registration", Unknown),
	("LINK", "Linked information", Unknown),
	("MCDI", "Music CD identifier", Unknown),
	("MLLT", "MPEG location lookup table", Unknown),
	("OWNE", "Ownership frame", Unknown),
	("PCNT", "Play counter", Unknown),
	("POPM", "Popularimeter", Popularimeter),
	("POSS", "Position synchronisation frame", Unknown),
	("PRIV", "Private frame", Unknown),
	("RBUF", "Recommended buffer size", Unknown),
	("RVA2", "Relative volume adjustment (2)", Unknown),
	("RVRB", "Reverb", Unknown),
	("SEEK", "Seek frame", Unknown),
	("SIGN", "Signature frame", Unknown),
	("SYLT", "Synchronised lyric/text", Unknown),
	("SYTC", "Synchronised tempo codes", Unknown),
	("TALB", "Album/Movie/Show title", TextInformation),
	("TBPM", "BPM (beats per minute)", TextInformation),
	("TCMP", "Compilation", CompilationFlag),
	("TCOM", "Composer", TextInformation),
	("TCON", "Content type", TextInformation),
	("TCOP", "Copyright message", TextInformation),
	("TDEN", "Encoding time", TextInformation),
	("TDLY", "Playlist delay", TextInformation),
	("TDOR", "Original release time", TextInformation),
	("TDRC", "Recording time", TextInformation),
	("TDRL", "Release time", TextInformation),
	("TDTG", "Tagging time", TextInformation),
	("TENC", "Encoded by", TextInformation),
	("TEXT", "Lyricist/Text writer", TextInformation),
	("TFLT", "File type", TextInformation),
	("TIPL", "Involved people list", InvolvedPeopleList),
	("TIT1", "Content group description", TextInformation),
	("TIT2", "Title/songname/content description", TextInformation),
	("TIT3", "Subtitle/Description refinement", TextInformation),
	("TKEY", "Initial key", TextInformation),
	("TLAN", "Language(s)", TextInformation),
	("TLEN", "Length", TextInformation),
	("TMCL", "Musician credits list", InvolvedPeopleList),
	("TMED", "Media type", TextInformation),
	("TMOO", "Mood", TextInformation),
	("TOAL", "Original album/movie/show title", TextInformation),
	("TOFN", "Original filename", TextInformation),
	("TOLY", "Original lyricist(s)/text writer(s)", TextInformation),
	("TOPE", "Original artist(s)/performer(s)", TextInformation),
	("TOWN", "File owner/licensee", TextInformation),
	("TPE1", "Lead performer(s)/Soloist(s)", TextInformation),
	("TPE2", "Band/orchestra/accompaniment", TextInformation),
	("TPE3", "Conductor/performer refinement", TextInformation),
	(
		"TPE4",
		"Interpreted, remixed, or otherwise modified by",
		TextInformation,
	),
	("TPOS", "Part of a set", TextInformation),
	("TPRO", "Produced notice", TextInformation),
	("TPUB", "Publisher", TextInformation),
	("TRCK", "Track number/Position in set", TextInformation),
	("TRSN", "Internet radio station name", TextInformation),
	("TRSO", "Internet radio station owner", TextInformation),
	("TSOA", "Album sort order", TextInformation),
	("TSOP", "Performer sort order", TextInformation),
	("TSOT", "Title sort order", TextInformation),
	(
		"TSRC",
		"ISRC (international standard recording code)",
		TextInformation,
	),
	(
		"TSSE",
		"Software/Hardware and settings used for encoding",
		TextInformation,
	),
	("TSST", "Set subtitle", TextInformation),
	("TXXX", "User defined text information frame", UserDefinedText),
	("UFID", "Unique file identifier", UniqueFileIdentifier),
	("USER", "Terms of use", TermsOfUse),
	(
		"USLT",
		"Unsynchronised lyric/text transcription",
		UnsynchronisedLyrics,
	),
	("WCOM", "Commercial information", UrlLink),
	("WCOP", "Copyright/Legal information", UrlLink),
	("WFED", "Podcast URL", UrlLink),
	("WOAF", "Official audio file webpage", UrlLink),
	("WOAR", "Official artist/performer webpage", UrlLink),
	("WOAS", "Official audio source webpage", UrlLink),
	("WORS", "Official Internet radio station homepage", UrlLink),
	("WPAY", "Payment", UrlLink),
	("WPUB", "Publishers official webpage", UrlLink),
	("WXXX", "User defined URL link frame", UserDefinedUrlLink),
];

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_sorted(table: &[(&str, &str, FrameType)]) {
		for pair in table.windows(2) {
			assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
		}
	}

	#[test_log::test]
	fn tables_are_sorted() {
		assert_sorted(DECLARED_FRAMES_V2);
		assert_sorted(DECLARED_FRAMES_V3);
		assert_sorted(DECLARED_FRAMES_V4);
	}

	#[test_log::test]
	fn edition_differences() {
		// v2.2 uses three character IDs exclusively
		assert!(declared_frame("TIT2", Id3v2Version::V2).is_none());
		assert!(declared_frame("TT2", Id3v2Version::V2).is_some());

		// Frames dropped between v2.3 and v2.4
		for dropped in ["EQUA", "IPLS", "RVAD", "TDAT", "TIME", "TORY", "TRDA", "TSIZ", "TYER"] {
			assert!(declared_frame(dropped, Id3v2Version::V3).is_some());
			assert!(declared_frame(dropped, Id3v2Version::V4).is_none());
		}

		// Frames new in v2.4
		for added in ["ASPI", "EQU2", "RVA2", "SEEK", "SIGN", "TDRC", "TIPL", "TMCL", "TSST"] {
			assert!(declared_frame(added, Id3v2Version::V3).is_none());
			assert!(declared_frame(added, Id3v2Version::V4).is_some());
		}
	}

	#[test_log::test]
	fn frame_types() {
		let apic = declared_frame("APIC", Id3v2Version::V4).unwrap();
		assert_eq!(apic.frame_type, FrameType::AttachedPicture);

		let tmcl = declared_frame("TMCL", Id3v2Version::V4).unwrap();
		assert_eq!(tmcl.frame_type, FrameType::InvolvedPeopleList);

		// Declared but opaque
		let priv_frame = declared_frame("PRIV", Id3v2Version::V4).unwrap();
		assert_eq!(priv_frame.frame_type, FrameType::Unknown);
	}

	#[test_log::test]
	fn undeclared_id() {
		assert_eq!(declared_frame("ZZZZ", Id3v2Version::V4), None);
	}
}
