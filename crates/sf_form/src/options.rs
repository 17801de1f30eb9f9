//! Decode configuration.

/// What to do with an integer that does not fit its target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NarrowingPolicy {
    /// Fail with [`DecodeError::NumericNarrowingLoss`].
    ///
    /// [`DecodeError::NumericNarrowingLoss`]: crate::DecodeError::NumericNarrowingLoss
    #[default]
    Reject,
    /// Keep the low bits, as an `as` cast does. `300` decodes into a `u8`
    /// as `44`, `-1` as `255`.
    ///
    /// `f32` targets saturate to infinity instead of failing.
    Truncate,
}

/// Options for [`decode_with`](crate::decode_with) and [`DecodeDriver`](crate::DecodeDriver).
///
/// # Examples
///
/// ```
/// use sf_form::{DecodeOptions, NarrowingPolicy};
///
/// const LENIENT: DecodeOptions = DecodeOptions::new()
///     .with_narrowing(NarrowingPolicy::Truncate)
///     .with_max_depth(16);
///
/// assert_eq!(LENIENT.max_depth(), 16);
/// assert_eq!(DecodeOptions::default().narrowing(), NarrowingPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    narrowing: NarrowingPolicy,
    max_depth: usize,
}

impl DecodeOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    #[inline]
    pub const fn new() -> Self {
        Self {
            narrowing: NarrowingPolicy::Reject,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    #[inline]
    pub const fn with_narrowing(mut self, narrowing: NarrowingPolicy) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Limits how many levels below the root the decoder descends.
    ///
    /// The root is level 0 and each struct field or sequence element adds
    /// one level.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn narrowing(&self) -> NarrowingPolicy {
        self.narrowing
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecodeOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
