//! ID3v2 items and utilities
//!
//! The framed tag editions: ID3v2.2, ID3v2.3 and ID3v2.4. Each edition is
//! read by the same machinery, parameterized on the edition's header layout,
//! size encoding and declared frame IDs.

mod frame;
pub(crate) mod header;
mod read;
pub mod registry;
mod tag;
pub mod util;

pub use frame::{Frame, FrameFlags, FrameValue, Involvee};
pub use header::{Id3v2TagFlags, Id3v2Version};
pub use tag::{Id3v2Tag, parse_genres};
