// Shorthand for return Err(TagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TagError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(TagError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::TagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
