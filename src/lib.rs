//! # calver
//!
//! A library for defining calendar versioning ([CalVer](https://calver.org/))
//! schemes and validating versions against them.
//!
//! Instead of conforming to one fixed scheme, you describe your own as an
//! ordered sequence of segment patterns, parse raw version strings against
//! it, and compare the versions that come out.
//!
//! ## Examples
//!
//! Quickly validate and compare:
//!
//! ```
//! use calver::prelude::*;
//!
//! let scheme = Scheme::new([&FULL_YEAR, &ZERO_PADDED_MONTH, &ZERO_PADDED_DAY]);
//!
//! let january = scheme.new_version("2021.01.05")?;
//! let february = scheme.new_version("2021.02.01")?;
//! assert!(january < february);
//! # Ok::<(), calver::InvalidVersionString>(())
//! ```
//!
//! Or keep a [`Parser`] around when validating many strings against the same
//! scheme:
//!
//! ```
//! use calver::prelude::*;
//!
//! let parser = Parser::new(Scheme::new([&SHORT_YEAR, &SHORT_MONTH]));
//! assert!(parser.parse("21.1").is_ok());
//! assert!(parser.parse("21.1.rc1").is_ok());   // trailing modifier
//! assert!(parser.parse("21").is_err());        // scheme segments are mandatory
//! ```
//!
//! ## Important Terms
//!
//! - **Segment**: one dot-separated token of a version string, or the
//!   pattern describing what such a token must look like. Modeled by the
//!   [`Segment`] struct.
//! - **Scheme**: the ordered template of segment patterns a version string
//!   must satisfy positionally. Modeled by the [`Scheme`] struct.
//! - **Version**: a concrete string validated against a scheme. Modeled by
//!   the [`Version`] struct. Versions of the same scheme can be compared.
//! - **Modifier**: a free-form token beyond the scheme-defined positions.
//!   Up to two are allowed (for suffixes like `rc1` or a build tag), and
//!   they never participate in comparison.
//!
//! ## Segment catalog
//!
//! | Static | Descriptor | Pattern | Description |
//! |---|---|---|---|
//! | [`FULL_YEAR`] | `YYYY` | `[0-9]{4}` | Four-digit year |
//! | [`SHORT_YEAR`] | `YY` | `[0-9]{1,2}` | One- or two-digit year |
//! | [`ZERO_PADDED_YEAR`] | `OY` | `[0-9]{2}` | Zero-padded two-digit year |
//! | [`MAJOR`] | `MAJOR` | `[0-9]+` | Any number, major position |
//! | [`SHORT_MONTH`] | `MM` | `[0-9]{1,2}` | One- or two-digit month |
//! | [`ZERO_PADDED_MONTH`] | `OM` | `[0-9]{2}` | Zero-padded two-digit month |
//! | [`MINOR`] | `MINOR` | `[0-9]+` | Any number, minor position |
//! | [`SHORT_DAY`] | `DD` | `[0-9]{1,2}` | One- or two-digit day |
//! | [`ZERO_PADDED_DAY`] | `OD` | `[0-9]{1,2}` | Zero-padded day (also accepts a single digit, see its docs) |
//! | [`MICRO`] | `MICRO` | `[0-9]+` | Any number, micro position |
//! | [`ANY_NUM`] | `ANY_NUM` | `[0-9]+` | Any number, any position |
//!
//! Segment validity is purely pattern-based: `2021.13.40` parses happily
//! against `YYYY.OM.OD`, because nothing here knows what a month is. The
//! catalog is not closed, either — [`Segment::custom`] accepts any pattern:
//!
//! ```
//! use calver::prelude::*;
//!
//! let sha = Segment::custom("[0-9a-f]{7}")?;
//! let scheme = Scheme::new([FULL_YEAR.clone(), sha]);
//! assert!(scheme.new_version("2021.1a2b3c4").is_ok());
//! # Ok::<(), regex::Error>(())
//! ```
//!
//! Patterns always match candidate segments in full (never as a substring),
//! and run on the [`regex`] crate's linear-time engine.
//!
//! ## Serde
//!
//! With the `serde` feature enabled, a [`Version`] serializes as its string
//! form, so it embeds naturally in larger configuration or metadata
//! documents. There is no `Deserialize`: parsing needs a scheme in hand.
#![warn(missing_docs)]

mod error;
mod scheme;
mod segment;
mod version;

pub use crate::error::InvalidVersionString;
pub use crate::scheme::Scheme;
pub use crate::segment::{
    Segment, ANY_NUM, FULL_YEAR, MAJOR, MICRO, MINOR, SHORT_DAY, SHORT_MONTH, SHORT_YEAR,
    ZERO_PADDED_DAY, ZERO_PADDED_MONTH, ZERO_PADDED_YEAR,
};
pub use crate::version::{Parser, Version};

/// A convenience module appropriate for glob imports (`use calver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::InvalidVersionString;
    #[doc(no_inline)]
    pub use crate::Parser;
    #[doc(no_inline)]
    pub use crate::Scheme;
    #[doc(no_inline)]
    pub use crate::Segment;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::{
        ANY_NUM, FULL_YEAR, MAJOR, MICRO, MINOR, SHORT_DAY, SHORT_MONTH, SHORT_YEAR,
        ZERO_PADDED_DAY, ZERO_PADDED_MONTH, ZERO_PADDED_YEAR,
    };
}
