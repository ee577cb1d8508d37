//! Read ID3 metadata, every edition at once.
//!
//! A single audio file can carry up to four generations of ID3 tags: the
//! fixed-layout ID3v1 trailer and the framed ID3v2.2, ID3v2.3 and ID3v2.4
//! tags. multitag decodes whichever are present and reconciles them behind
//! one set of accessors, preferring the newest edition that has a field.
//!
//! # Examples
//!
//! ## Reading every edition
//!
//! ```rust,no_run
//! # fn main() -> multitag::error::Result<()> {
//! use multitag::UnifiedTag;
//! use std::fs::File;
//!
//! let mut file = File::open("test.mp3")?;
//! let tag = UnifiedTag::read_from(&mut file)?;
//!
//! // Answered by the newest edition carrying the field
//! println!("{:?} by {:?}", tag.title(), tag.artists());
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with a single edition
//!
//! ```rust,no_run
//! # fn main() -> multitag::error::Result<()> {
//! use multitag::config::ParseOptions;
//! use multitag::id3::v2::{Id3v2Tag, Id3v2Version};
//! use std::fs::File;
//!
//! let mut file = File::open("test.mp3")?;
//!
//! // Only interested in an ID3v2.4 tag; any other edition counts as absent
//! let id3v24 = Id3v2Tag::read_from(&mut file, Id3v2Version::V4, ParseOptions::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Important notes
//!
//! Decoding is deliberately lenient by default: malformed text degrades to
//! replacement characters and frames with undecodable layouts are kept as
//! raw bytes. See [`config::ParsingMode`] to change that.

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod picture;
pub mod tag;
mod util;

pub use crate::tag::UnifiedTag;
pub use util::text::TextEncoding;
