use multitag::UnifiedTag;
use multitag::config::ParseOptions;
use multitag::error::ErrorKind;
use multitag::id3::v1::Id3v1Tag;

use std::io::Cursor;

fn v1_block(title: &str, artist: &str, album: &str, year: u16, track: u8, genre: u8) -> Vec<u8> {
	let tag = Id3v1Tag {
		title: Some(title.to_owned()),
		artist: Some(artist.to_owned()),
		album: Some(album.to_owned()),
		year: Some(year),
		comment: Some(String::from("A v1 comment")),
		track_number: Some(track),
		genre: Some(genre),
	};

	tag.dump().unwrap()
}

fn text_body(value: &str) -> Vec<u8> {
	let mut body = vec![3]; // UTF-8
	body.extend_from_slice(value.as_bytes());
	body
}

fn v22_tag(frames: &[(&str, &[u8])]) -> Vec<u8> {
	let mut area = Vec::new();
	for (id, body) in frames {
		assert_eq!(id.len(), 3);
		area.extend_from_slice(id.as_bytes());
		let size = body.len() as u32;
		area.extend_from_slice(&size.to_be_bytes()[1..]);
		area.extend_from_slice(body);
	}

	framed(2, area)
}

fn v24_tag(frames: &[(&str, &[u8])]) -> Vec<u8> {
	let mut area = Vec::new();
	for (id, body) in frames {
		assert_eq!(id.len(), 4);
		area.extend_from_slice(id.as_bytes());
		let size = body.len() as u32;
		// Bodies in these tests stay below the first synchsafe boundary
		assert!(size < 0x80);
		area.extend_from_slice(&size.to_be_bytes());
		area.extend_from_slice(&[0, 0]);
		area.extend_from_slice(body);
	}

	framed(4, area)
}

fn framed(major: u8, area: Vec<u8>) -> Vec<u8> {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(b"ID3");
	bytes.extend_from_slice(&[major, 0, 0]);
	assert!(area.len() < 0x80);
	bytes.extend_from_slice(&(area.len() as u32).to_be_bytes());
	bytes.extend_from_slice(&area);
	bytes
}

#[test_log::test]
fn newest_edition_answers_first() {
	// An ID3v2.4 tag at the front and an ID3v1 trailer, disagreeing on the
	// title and each holding fields the other lacks
	let mut source = v24_tag(&[
		("TIT2", &text_body("Framed title")),
		("TPE1", &text_body("Foo/Bar")),
		("TRCK", &text_body("3/12")),
	]);
	source.extend_from_slice(&[0xAA; 512]); // Audio stand-in
	source.extend_from_slice(&v1_block("Trailer title", "Baz", "Qux album", 1992, 7, 13));

	let tag = UnifiedTag::read_from(&mut Cursor::new(source)).unwrap();

	assert!(tag.id3v24().is_some());
	assert!(tag.id3v23().is_none());
	assert!(tag.id3v22().is_none());
	assert!(tag.id3v1().is_some());

	// Fields both editions carry come from the newer one
	assert_eq!(tag.title(), Some("Framed title"));
	assert_eq!(
		tag.artists(),
		Some(vec![String::from("Foo"), String::from("Bar")])
	);
	assert_eq!(tag.track(), Some((3, Some(12))));

	// Fields only the trailer carries fall through to it
	assert_eq!(tag.album(), Some("Qux album"));
	assert_eq!(tag.year(), Some(1992));
	assert_eq!(tag.genres(), Some(vec![String::from("Pop")]));
	assert_eq!(tag.comment(), Some("A v1 comment"));
}

#[test_log::test]
fn v22_through_the_facade() {
	let source = v22_tag(&[
		("TT2", &text_body("Old title")),
		("TCO", &text_body("(31)")),
	]);

	let tag = UnifiedTag::read_from(&mut Cursor::new(source)).unwrap();

	assert!(tag.id3v22().is_some());
	assert!(tag.id3v24().is_none());
	assert_eq!(tag.title(), Some("Old title"));
	assert_eq!(tag.genres(), Some(vec![String::from("Trance")]));
}

#[test_log::test]
fn no_tags_at_all() {
	// Long enough for a v1 scan, but nothing resembling a tag anywhere
	let source = vec![0xABu8; 1024];

	let tag = UnifiedTag::read_from(&mut Cursor::new(source)).unwrap();
	assert!(tag.is_empty());
	assert_eq!(tag.title(), None);
	assert_eq!(tag.pictures(), Vec::<&multitag::picture::Picture>::new());
}

#[test_log::test]
fn tiny_source() {
	// Too short to even hold an ID3v1 trailer
	let tag = UnifiedTag::read_from(&mut Cursor::new(b"ID".to_vec())).unwrap();
	assert!(tag.is_empty());
}

#[test_log::test]
fn oversized_frame_is_fatal() {
	// A present tag that is structurally broken must not read as absent:
	// the frame declares more bytes than the frame area holds
	let mut source = Vec::new();
	source.extend_from_slice(b"ID3");
	source.extend_from_slice(&[4, 0, 0]);
	source.extend_from_slice(&14u32.to_be_bytes());
	source.extend_from_slice(b"TIT2");
	source.extend_from_slice(&0x7Fu32.to_be_bytes());
	source.extend_from_slice(&[0, 0]);
	source.extend_from_slice(&text_body("hi"));

	let err = UnifiedTag::read_from(&mut Cursor::new(source)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Id3v2(_)));
}

#[test_log::test]
fn cover_art_can_be_skipped() {
	let mut apic_body = vec![0x00];
	apic_body.extend_from_slice(b"image/png\0");
	apic_body.push(0x03);
	apic_body.push(0x00);
	apic_body.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47]);

	let source = v24_tag(&[
		("APIC", &apic_body),
		("TIT2", &text_body("Still readable")),
	]);

	let with_art = UnifiedTag::read_from(&mut Cursor::new(source.clone())).unwrap();
	assert_eq!(with_art.pictures().len(), 1);

	let without_art = UnifiedTag::read_from_with(
		&mut Cursor::new(source),
		ParseOptions::new().read_cover_art(false),
	)
	.unwrap();
	assert!(without_art.pictures().is_empty());
	assert_eq!(without_art.title(), Some("Still readable"));
}

#[test_log::test]
fn v1_only() {
	let mut source = vec![0x00; 600];
	source.extend_from_slice(&v1_block("Only title", "Solo", "Lone album", 2001, 2, 21));

	let tag = UnifiedTag::read_from(&mut Cursor::new(source)).unwrap();
	assert!(tag.id3v24().is_none());
	assert_eq!(tag.title(), Some("Only title"));
	assert_eq!(tag.track(), Some((2, None)));
	assert_eq!(tag.genres(), Some(vec![String::from("Ska")]));
}
