//! Source location tracking for blocks.
//!
//! Every segmented block records the `Span` it occupies in the source text,
//! so errors raised while converting it can point back at the input.

/// A byte range in the source text.
///
/// Spans use byte offsets (not character offsets).
/// Both `start` and `end` are inclusive-exclusive: `[start, end)`.
///
/// Offsets are `u32`, so positions past 4 GiB saturate at `u32::MAX`
/// when built with [`Span::from_range`].
///
/// # Example
///
/// ```rust
/// use staticmark_core::span::Span;
///
/// let span = Span::new(0, 10);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a span from `usize` offsets, saturating at `u32::MAX`.
    #[inline]
    pub fn from_range(start: usize, end: usize) -> Self {
        Self::new(saturate(start), saturate(end))
    }

    /// Get the length of this span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Slice the source text this span was taken from.
    ///
    /// Returns `None` if the span is out of bounds or not on a char boundary.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start as usize..self.end as usize)
    }
}

/// Narrow a byte offset to `u32`, clamping instead of wrapping.
#[inline]
pub(crate) fn saturate(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
