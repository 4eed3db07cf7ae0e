//! Source spans — byte ranges used only to make diagnostics more specific.
//!
//! Per the translator's non-goals, no accept/reject decision ever depends on
//! a `Span`; it is carried purely so error messages can say *where*, not
//! just *what*. Dropping spans entirely would not change which programs are
//! accepted.

/// A byte range `[start, end)` into the original source stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}
