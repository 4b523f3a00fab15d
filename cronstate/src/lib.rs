//! cronstate — build cron expressions from structured field state.
//!
//! A [`CronState`] holds, for each of the six cron fields, either a list of
//! [`IntervalEntry`] values or nothing at all. [`CronState::to_cron`] renders
//! it as a cron expression. The [`options`] module supplies the value domains
//! a form needs to populate pickers for each field.
//!
//! # Examples
//!
//! ```
//! use cronstate::{CronState, IntervalEntry, TimeUnit};
//!
//! let state = CronState::default();
//! assert_eq!(state.to_cron(), "0 1-15 * * * *");
//!
//! let state = state
//!     .with(TimeUnit::Second, None)
//!     .with(TimeUnit::Minute, Some(vec![IntervalEntry::Every(5)]));
//! assert_eq!(state.to_cron(), "*/5 * * * *");
//! ```

pub mod ast;
pub mod cron;
pub mod display;
pub mod error;
pub mod options;

pub use ast::{CronState, IntervalEntry, IntervalKind, TimeUnit};
pub use error::{InvalidRangeError, ParseNameError};
pub use options::{
    capitalize_first, day_of_week_options, increasing_sequence, month_options, numeric_options,
    options_for, LabeledOption,
};

// --- CronState convenience methods ---

impl CronState {
    /// Render this state as a cron expression.
    pub fn to_cron(&self) -> String {
        cron::to_cron(self)
    }

    /// Parse a state from its JSON form.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this state to JSON. Absent units are written as `null`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
