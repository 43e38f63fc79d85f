/// The error returned when a string cannot be evaluated as a calendar
/// version.
///
/// All variants are deterministic, pure-input validation failures: nothing is
/// retried and nothing is partially applied. The caller gets a rejection and
/// may try again with corrected input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVersionString {
    /// The input was empty or contained only whitespace.
    #[error("Version string is blank.")]
    Blank,

    /// The number of dot-separated segments falls outside the window the
    /// scheme allows. Every scheme-defined segment is mandatory, and up to
    /// two trailing modifier segments may follow.
    #[error("Value `{value}` has {given} segments, but scheme `{scheme}` expects between {min} and {max}")]
    SegmentCount {
        /// The trimmed version string that was rejected.
        value: String,
        /// Rendering of the scheme the value was parsed against.
        scheme: String,
        /// Number of segments found in the value.
        given: usize,
        /// Fewest segments the scheme accepts.
        min: usize,
        /// Most segments the scheme accepts.
        max: usize,
    },

    /// A scheme-defined segment did not match its pattern.
    #[error("Segment provided for `{descriptor}` at position {position} is not valid: `{value}`")]
    SegmentMismatch {
        /// Descriptor of the segment pattern that rejected the value.
        descriptor: String,
        /// Zero-based position of the offending segment.
        position: usize,
        /// The offending segment value.
        value: String,
    },
}
