use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use once_cell::sync::OnceCell;
use regex::Regex;

/// The pattern for one dot-separated segment of a version string.
///
/// A segment is a value object: its identity is its regex pattern source, so
/// two segments with identical pattern text are equal and interchangeable, no
/// matter how they were obtained. The built-in catalog ([`FULL_YEAR`],
/// [`ZERO_PADDED_MONTH`], [`ANY_NUM`], ...) covers the common calendar and
/// generic-numeric shapes; [`Segment::custom`] admits any other pattern.
///
/// Matching is always against the whole candidate string, never a substring:
///
/// ```
/// use calver::FULL_YEAR;
///
/// assert!(FULL_YEAR.is_matched_by("2021"));
/// assert!(!FULL_YEAR.is_matched_by("2021-beta"));
/// ```
#[derive(Debug, Clone)]
pub struct Segment {
    descriptor: Cow<'static, str>,
    pattern: Cow<'static, str>,
    regex: OnceCell<Regex>,
}

/// Full-string matching: the pattern source is kept unanchored, so wrap it
/// before handing it to the engine.
fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

impl Segment {
    const fn builtin(descriptor: &'static str, pattern: &'static str) -> Self {
        Self {
            descriptor: Cow::Borrowed(descriptor),
            pattern: Cow::Borrowed(pattern),
            regex: OnceCell::new(),
        }
    }

    /// Creates a segment from an arbitrary regex pattern, for version shapes
    /// the built-in catalog doesn't cover.
    ///
    /// The pattern is compiled here, so an invalid one is rejected at
    /// construction rather than surfacing at match time. It will be required
    /// to match candidate values in full, regardless of anchoring.
    ///
    /// ```
    /// use calver::Segment;
    ///
    /// let hex = Segment::custom("[0-9a-f]{7}").unwrap();
    /// assert!(hex.is_matched_by("1a2b3c4"));
    /// assert!(Segment::custom("[0-9").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if `pattern` is not a valid regular
    /// expression.
    pub fn custom(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&anchored(&pattern))?;
        let cell = OnceCell::new();
        let _ = cell.set(regex);
        Ok(Self {
            descriptor: Cow::Owned(pattern.clone()),
            pattern: Cow::Owned(pattern),
            regex: cell,
        })
    }

    /// The regex pattern source, exactly as supplied (unanchored).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Short name used when rendering schemes and reporting mismatches. For
    /// catalog segments this is the conventional specifier name (`"YYYY"`,
    /// `"OM"`, ...); for custom segments it is the pattern text.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Tests whether `value` matches this segment's pattern in full.
    pub fn is_matched_by(&self, value: &str) -> bool {
        self.compiled().is_match(value)
    }

    fn compiled(&self) -> &Regex {
        // custom() fills the cell eagerly, so only catalog patterns compile
        // here, and all of those are valid.
        self.regex
            .get_or_init(|| Regex::new(&anchored(&self.pattern)).expect("catalog pattern compiles"))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

impl From<&Segment> for Segment {
    fn from(segment: &Segment) -> Self {
        segment.clone()
    }
}

/// Four-digit year, like `2021`.
pub static FULL_YEAR: Segment = Segment::builtin("YYYY", "[0-9]{4}");

/// One- or two-digit year, like `1` or `21`.
pub static SHORT_YEAR: Segment = Segment::builtin("YY", "[0-9]{1,2}");

/// Zero-padded two-digit year, like `01`.
pub static ZERO_PADDED_YEAR: Segment = Segment::builtin("OY", "[0-9]{2}");

/// Any number in the major position.
pub static MAJOR: Segment = Segment::builtin("MAJOR", "[0-9]+");

/// One- or two-digit month, like `1` or `12`.
pub static SHORT_MONTH: Segment = Segment::builtin("MM", "[0-9]{1,2}");

/// Zero-padded two-digit month, like `01`.
pub static ZERO_PADDED_MONTH: Segment = Segment::builtin("OM", "[0-9]{2}");

/// Any number in the minor position.
pub static MINOR: Segment = Segment::builtin("MINOR", "[0-9]+");

/// One- or two-digit day, like `5` or `25`.
pub static SHORT_DAY: Segment = Segment::builtin("DD", "[0-9]{1,2}");

/// Zero-padded day.
///
/// Note: this accepts one- or two-digit values, the same as [`SHORT_DAY`].
/// Existing version strings with single-digit days parse under it, so the
/// pattern stays as-is rather than tightening to two digits.
pub static ZERO_PADDED_DAY: Segment = Segment::builtin("OD", "[0-9]{1,2}");

/// Any number in the micro position.
pub static MICRO: Segment = Segment::builtin("MICRO", "[0-9]+");

/// Any number, usable in any position.
pub static ANY_NUM: Segment = Segment::builtin("ANY_NUM", "[0-9]+");
