/// Error returned by the range generators when the bounds cannot produce a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidRangeError {
    /// No start was given and `end` is below the implicit start of 0.
    #[error("end cannot be negative without providing a start value")]
    NegativeEnd { end: i64 },

    #[error("start cannot be of a higher value than end")]
    StartAfterEnd { start: i64, end: i64 },
}

impl InvalidRangeError {
    /// The `end` bound that was rejected.
    pub fn end(&self) -> i64 {
        match self {
            Self::NegativeEnd { end } | Self::StartAfterEnd { end, .. } => *end,
        }
    }
}

/// Error returned when a time unit or interval kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} '{input}' (expected one of: {expected})")]
pub struct ParseNameError {
    pub what: &'static str,
    pub input: String,
    pub expected: &'static str,
}

impl ParseNameError {
    pub(crate) fn new(what: &'static str, input: &str, expected: &'static str) -> Self {
        Self {
            what,
            input: input.to_string(),
            expected,
        }
    }
}
