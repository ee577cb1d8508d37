//! Utilities for working with synchsafe integers
//!
//! ID3v2 avoids spurious MPEG sync patterns in its size fields by using only
//! 7 bits of every byte, keeping each MSB clear.

/// An integer that can be converted from its synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Decode a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use multitag::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// let synch_number = 0x7F7F_7F7F_u32;
	///
	/// // Re-packing the 7-bit groups gets us the real value
	/// assert_eq!(synch_number.unsynch(), 0xFFF_FFFF_u32);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

#[cfg(test)]
mod tests {
	use super::SynchsafeInteger;

	#[test_log::test]
	fn u32_unsynch() {
		assert_eq!(0x7F7F_7F7F_u32.unsynch(), 0xFFF_FFFF_u32);
		assert_eq!(0u32.unsynch(), 0);
		// The MSB of every byte is simply discarded
		assert_eq!(0x8080_8080_u32.unsynch(), 0);
	}
}
