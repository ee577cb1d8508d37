//! Options to control how tags are parsed

/// The parsing strictness mode
///
/// This assumes that the readers are providing general uses of the formats, and
/// mostly applies to leniency on malformed inputs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// An invalid frame identifier or a malformed fixed-layout year will
	/// abort the parse.
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// Recoverable oddities are logged and parsing continues (or, for the
	/// frame loop, ends as if padding was reached).
	#[default]
	BestAttempt,
	/// Least eager to error, maximum heedlessness
	Relaxed,
}

/// Options to control how multitag parses a byte source
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) read_cover_art: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	read_cover_art: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use multitag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			read_cover_art: true,
		}
	}

	/// The parsing mode, see [`ParsingMode`]
	///
	/// # Examples
	///
	/// ```rust
	/// use multitag::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to decode attached picture frames
	///
	/// Embedded art can be megabytes in size; indexers that only care about
	/// textual fields can skip it entirely.
	///
	/// # Examples
	///
	/// ```rust
	/// use multitag::config::ParseOptions;
	///
	/// // By default, `read_cover_art` is enabled. Here, we don't want to read it.
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}
}
