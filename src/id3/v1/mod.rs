//! ID3v1 items
//!
//! The original trailing-tag format: a fixed 128 byte block at the very end
//! of the source, marked "TAG". Revision 1.1 steals the last two comment
//! bytes for a track number.

pub(crate) mod constants;
mod read;
mod tag;
mod write;

pub use constants::GENRES;
pub use tag::Id3v1Tag;
