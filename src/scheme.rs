use core::fmt::{self, Display};
use std::sync::Arc;

use crate::{
    error::InvalidVersionString,
    segment::Segment,
    version::{Parser, Version},
};

/// An ordered, immutable sequence of [`Segment`] patterns: the shape that
/// conforming version strings must satisfy positionally.
///
/// A scheme is never parsed from a version string; it is constructed
/// explicitly, once, and then shared read-only by every [`Version`] parsed
/// against it (cloning a scheme shares its segments rather than copying
/// them). Construction performs no validation: an empty scheme and a scheme
/// with repeated segment kinds are both legal.
///
/// Schemes compare structurally and hash consistently, so they can serve as
/// map keys:
///
/// ```
/// use calver::{Scheme, FULL_YEAR, ZERO_PADDED_MONTH};
///
/// let a = Scheme::new([&FULL_YEAR, &ZERO_PADDED_MONTH]);
/// let b = Scheme::new([&FULL_YEAR, &ZERO_PADDED_MONTH]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme {
    segments: Arc<[Segment]>,
}

impl Scheme {
    /// Creates a scheme from segments in significance order.
    ///
    /// Accepts both references to the built-in catalog statics and owned
    /// (e.g. [custom](Segment::custom)) segments:
    ///
    /// ```
    /// use calver::{Scheme, Segment, FULL_YEAR, SHORT_MONTH, SHORT_DAY};
    ///
    /// let ymd = Scheme::new([&FULL_YEAR, &SHORT_MONTH, &SHORT_DAY]);
    /// let custom = Scheme::new([Segment::custom("[0-9]{8}").unwrap()]);
    /// ```
    pub fn new<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Segment>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segment patterns, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments a conforming version string must lead with.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the degenerate zero-segment scheme, which validates no
    /// positional segments at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parses a version string against this scheme and returns a [`Version`]
    /// if it conforms.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidVersionString`] if the string is blank, has a
    /// segment count outside the allowed window, or fails a positional
    /// pattern match. See [`Parser::parse`].
    pub fn new_version(&self, raw: &str) -> Result<Version, InvalidVersionString> {
        Parser::new(self.clone()).parse(raw)
    }
}

impl Display for Scheme {
    /// Renders the scheme as its segment descriptors joined with `.`, like
    /// `YYYY.OM.OD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
