use core::cmp::Ordering;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::{error::InvalidVersionString, scheme::Scheme};

/// Validates raw version strings against a [`Scheme`] and produces
/// [`Version`] values.
///
/// A parser is cheap to construct and holds only its scheme; keep one around
/// when parsing many strings against the same scheme, or use
/// [`Version::parse`] / [`Scheme::new_version`] for one-shot work.
#[derive(Debug, Clone)]
pub struct Parser {
    scheme: Scheme,
}

impl Parser {
    /// Creates a parser for the given scheme.
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    /// The scheme this parser validates against.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Validates `raw` and, from it, constructs a new [`Version`].
    ///
    /// The input is trimmed, then split on `.` into segments. Each
    /// scheme-defined position must match its segment pattern; up to two
    /// trailing modifier segments beyond the scheme are accepted as-is.
    /// Segments are stored verbatim, so leading zeros survive and
    /// [`Version`]'s rendering round-trips the trimmed input.
    ///
    /// ```
    /// use calver::{Parser, Scheme, FULL_YEAR, ZERO_PADDED_MONTH, ZERO_PADDED_DAY};
    ///
    /// let parser = Parser::new(Scheme::new([&FULL_YEAR, &ZERO_PADDED_MONTH, &ZERO_PADDED_DAY]));
    /// assert!(parser.parse("2021.01.05").is_ok());
    /// assert!(parser.parse("2021.01.05.rc1").is_ok());
    /// assert!(parser.parse("2021.1").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`InvalidVersionString::Blank`] if `raw` trims to nothing.
    /// - [`InvalidVersionString::SegmentCount`] if the number of segments is
    ///   outside `[scheme.len(), scheme.len() + 2]`.
    /// - [`InvalidVersionString::SegmentMismatch`] for the first
    ///   scheme-defined segment that fails its pattern.
    pub fn parse(&self, raw: &str) -> Result<Version, InvalidVersionString> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidVersionString::Blank);
        }

        // splitting is purely positional: consecutive dots yield empty
        // segments, which still count toward arity
        let segments: Vec<String> = trimmed.split('.').map(str::to_owned).collect();

        let scheme_segments = self.scheme.segments();
        let min = scheme_segments.len();
        let max = min + 2;
        if segments.len() < min || segments.len() > max {
            return Err(InvalidVersionString::SegmentCount {
                value: trimmed.to_owned(),
                scheme: self.scheme.to_string(),
                given: segments.len(),
                min,
                max,
            });
        }

        for (position, (pattern, given)) in scheme_segments.iter().zip(&segments).enumerate() {
            if !pattern.is_matched_by(given) {
                return Err(InvalidVersionString::SegmentMismatch {
                    descriptor: pattern.descriptor().to_owned(),
                    position,
                    value: given.clone(),
                });
            }
        }

        Ok(Version {
            scheme: self.scheme.clone(),
            segments,
        })
    }
}

/// A validated calendar version: a shared reference to its [`Scheme`] plus
/// the raw dot-split segments of the original input, stored verbatim.
///
/// Versions come only out of a successful parse ([`Parser::parse`],
/// [`Version::parse`], or [`Scheme::new_version`]) and are immutable
/// afterwards.
///
/// # Ordering
///
/// Versions implement a *partial* order. Two versions of the same scheme
/// compare by their scheme-defined segments, position by position, using
/// ordinary lexicographic string comparison; the first unequal position
/// decides. Modifier segments never participate, so versions differing only
/// in modifiers compare equal. Versions of different schemes are not
/// comparable and [`partial_cmp`](PartialOrd::partial_cmp) returns `None`
/// for them.
///
/// Because comparison is textual, it orders numerically only where segments
/// are fixed-width (zero-padded) or of equal length: under a generic numeric
/// segment, `"10"` sorts before `"9"`.
///
/// ```
/// use calver::{Scheme, Version, FULL_YEAR, ZERO_PADDED_MONTH, ZERO_PADDED_DAY};
///
/// let scheme = Scheme::new([&FULL_YEAR, &ZERO_PADDED_MONTH, &ZERO_PADDED_DAY]);
/// let january = Version::parse(&scheme, "2021.01.05")?;
/// let february = Version::parse(&scheme, "2021.02.01")?;
/// assert!(january < february);
/// assert_eq!("2021.01.05", january.to_string());
/// # Ok::<(), calver::InvalidVersionString>(())
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    scheme: Scheme,
    segments: Vec<String>,
}

impl Version {
    /// One-shot parse: constructs a [`Parser`] for `scheme` and runs it over
    /// `raw`. Pure sugar, no added semantics.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn parse(scheme: &Scheme, raw: &str) -> Result<Self, InvalidVersionString> {
        Parser::new(scheme.clone()).parse(raw)
    }

    /// The scheme this version was validated against.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// All stored segments in order: the scheme-defined ones first, then any
    /// modifiers. Values are exactly as they appeared in the input.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The free-form segments beyond the scheme-defined positions, if any.
    /// Empty for versions with no modifier suffix.
    pub fn modifiers(&self) -> &[String] {
        &self.segments[self.scheme.len()..]
    }
}

impl PartialEq for Version {
    /// Agrees with [`partial_cmp`](PartialOrd::partial_cmp): same scheme and
    /// equal scheme-defined segments. Modifiers are excluded, so two
    /// versions that render differently can still be equal.
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    /// Compares two versions of the same scheme; returns `None` when the
    /// schemes differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.scheme != other.scheme {
            return None;
        }

        for (ours, theirs) in self
            .segments
            .iter()
            .zip(&other.segments)
            .take(self.scheme.len())
        {
            match ours.cmp(theirs) {
                Ordering::Equal => {}
                unequal => return Some(unequal),
            }
        }

        Some(Ordering::Equal)
    }
}

impl Display for Version {
    /// Renders the stored segments joined with `.`, reproducing the trimmed
    /// input exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Renders the version as its string form, so it embeds as a single string
/// field in structured documents.
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
