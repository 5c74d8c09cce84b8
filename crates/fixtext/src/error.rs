use thiserror::Error;

/// Error returned by checked element access ([`FixedText::at`]).
///
/// This is the only error type in the crate: every capacity-exceeding write
/// clamps silently instead of failing, and search misses are reported as
/// `None` rather than as errors.
///
/// [`FixedText::at`]: crate::FixedText::at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for text of length {len}")]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// The buffer's length at the time of the access.
    pub len: usize,
}
