//! Decode failures and their locations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::value::ValueKind;

// -----------------------------------------------------------------------------
// FieldPath

/// One step from a node to its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A struct field, by descriptor name.
    Field(&'static str),
    /// A sequence element, by position.
    Index(usize),
}

/// Location of a node relative to the decoded root.
///
/// Displayed as `bytes[2]` or `inner.flag`, and `(root)` when empty.
///
/// # Examples
///
/// ```
/// use sf_form::error::FieldPath;
///
/// let mut path = FieldPath::root();
/// assert_eq!(path.to_string(), "(root)");
///
/// path.push_field("outer");
/// path.push_field("bytes");
/// path.push_index(2);
/// assert_eq!(path.to_string(), "outer.bytes[2]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    #[inline]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    #[inline]
    pub fn push_field(&mut self, name: &'static str) {
        self.push(PathSegment::Field(name));
    }

    #[inline]
    pub fn push_index(&mut self, index: usize) {
        self.push(PathSegment::Index(index));
    }

    #[inline]
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// DecodeError

/// Why a decode failed, and where.
///
/// Decoding stops at the first failure, so there is exactly one error per
/// failed call and `path` names the innermost node that could not be
/// converted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// The node's tag does not match the target's category.
    #[error("expected {expected}, found {found} at `{path}`")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
        path: FieldPath,
    },
    /// An integer (or an `f32` target) could not hold the decoded number.
    #[error("number {value} does not fit in `{target}` at `{path}`")]
    NumericNarrowingLoss {
        value: String,
        target: &'static str,
        path: FieldPath,
    },
    /// The data nests deeper than `DecodeOptions::max_depth`.
    #[error("nesting exceeds the depth limit of {limit} at `{path}`")]
    DepthLimitExceeded { limit: usize, path: FieldPath },
    /// Raised by a `DecodeProcessor` or for an inconsistent reflection impl.
    #[error("{message} at `{path}`")]
    Custom { message: String, path: FieldPath },
}

impl DecodeError {
    /// Creates a [`Custom`](DecodeError::Custom) error.
    ///
    /// Prefer this over building the variant by hand: in debug builds with the
    /// `debug` feature, the message is extended with the stack of types being
    /// decoded on this thread.
    pub fn custom(message: impl fmt::Display, path: FieldPath) -> Self {
        let message = crate::cfg::debug! {
            if {
                crate::info_stack::TYPE_INFO_STACK.with_borrow(|stack| {
                    alloc::format!("{message} (stack:\n{stack:?})")
                })
            } else {
                alloc::format!("{message}")
            }
        };
        Self::Custom { message, path }
    }

    pub(crate) fn mismatch(expected: ValueKind, found: &serde_json::Value, path: &FieldPath) -> Self {
        Self::TypeMismatch {
            expected,
            found: ValueKind::of(found),
            path: path.clone(),
        }
    }

    /// Location of the failure.
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::NumericNarrowingLoss { path, .. }
            | Self::DepthLimitExceeded { path, .. }
            | Self::Custom { path, .. } => path,
        }
    }

    /// The expected tag, for [`TypeMismatch`](DecodeError::TypeMismatch).
    pub fn expected(&self) -> Option<ValueKind> {
        match self {
            Self::TypeMismatch { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Error

/// Failure of the text-level helpers [`from_str`](crate::from_str).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_paths() {
        let path: FieldPath = [PathSegment::Field("bytes"), PathSegment::Index(2)]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "bytes[2]");

        let path: FieldPath = [PathSegment::Field("inner"), PathSegment::Field("flag")]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "inner.flag");

        let path: FieldPath = [PathSegment::Index(0), PathSegment::Field("name")]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "[0].name");
    }

    #[test]
    fn push_pop() {
        let mut path = FieldPath::root();
        path.push_field("a");
        path.push_index(3);
        assert_eq!(path.pop(), Some(PathSegment::Index(3)));
        assert_eq!(path.to_string(), "a");
        path.pop();
        assert!(path.is_root());
        assert_eq!(path.pop(), None);
    }

    #[test]
    fn error_messages() {
        let err = DecodeError::TypeMismatch {
            expected: ValueKind::Bool,
            found: ValueKind::Integer,
            path: [PathSegment::Field("flag")].into_iter().collect(),
        };
        assert_eq!(err.to_string(), "expected bool, found integer at `flag`");
        assert_eq!(err.expected(), Some(ValueKind::Bool));
        assert_eq!(err.path().to_string(), "flag");

        let err = DecodeError::NumericNarrowingLoss {
            value: "300".to_string(),
            target: "u8",
            path: FieldPath::root(),
        };
        assert_eq!(err.to_string(), "number 300 does not fit in `u8` at `(root)`");
        assert_eq!(err.expected(), None);
    }

    #[test]
    fn custom_keeps_message() {
        let err = DecodeError::custom("bad value", FieldPath::root());
        let DecodeError::Custom { message, .. } = &err else {
            panic!("expected custom error");
        };
        assert!(message.starts_with("bad value"));
    }
}
