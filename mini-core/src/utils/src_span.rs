use std::{fmt::Display, ops::Range};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SrcSpan {
    pub start: u32,
    pub end: u32,
}

impl SrcSpan {
	pub fn new(start: u32, end: u32) -> Self {
		Self { start, end }
	}

	/// Zero-width span, used for errors reported at a position rather than a token.
	pub fn point(at: u32) -> Self {
		Self { start: at, end: at }
	}
}

impl From<SrcSpan> for Range<usize> {
	fn from(span: SrcSpan) -> Self {
		(span.start as usize)..(span.end as usize)
	}
}

impl Display for SrcSpan {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}
