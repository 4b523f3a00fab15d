use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseNameError;

/// One axis of a cron schedule, in output field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl TimeUnit {
    /// All units in canonical cron field order (seconds first).
    pub const ALL: [TimeUnit; 6] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::DayOfMonth,
        Self::Month,
        Self::DayOfWeek,
    ];

    /// Wire name, as used in serialized state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "dayOfMonth",
            Self::Month => "month",
            Self::DayOfWeek => "dayOfWeek",
        }
    }

    /// Human label for a unit picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        }
    }

    /// Zero-based position of this unit's field in the cron expression.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for TimeUnit {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| {
                ParseNameError::new(
                    "time unit",
                    s,
                    "second, minute, hour, dayOfMonth, month, dayOfWeek",
                )
            })
    }
}

/// How the value of an [`IntervalEntry`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalKind {
    At,
    From,
    Every,
}

impl IntervalKind {
    pub const ALL: [IntervalKind; 3] = [Self::At, Self::From, Self::Every];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::At => "at",
            Self::From => "from",
            Self::Every => "every",
        }
    }

    /// Human label for an interval picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::At => "at",
            Self::From => "from...",
            Self::Every => "every",
        }
    }
}

impl FromStr for IntervalKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseNameError::new("interval kind", s, "at, from, every"))
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for IntervalKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for IntervalKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single value spec within one cron field.
///
/// Serialized as `{"interval": "at", "value": 0}`, with `from` carrying a
/// two-element array: `{"interval": "from", "value": [1, 15]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "interval", content = "value", rename_all = "lowercase")
)]
pub enum IntervalEntry {
    /// A single value: `5`.
    At(i64),
    /// An inclusive range: `1-15`.
    From(i64, i64),
    /// A step: `*` for 1, `*/n` otherwise.
    Every(i64),
}

impl IntervalEntry {
    pub fn kind(&self) -> IntervalKind {
        match self {
            Self::At(_) => IntervalKind::At,
            Self::From(..) => IntervalKind::From,
            Self::Every(_) => IntervalKind::Every,
        }
    }
}

/// Per-unit field configuration for a cron expression.
///
/// Every unit is always present as a field; `None` marks a unit that is
/// omitted from the rendered expression. `Some(vec![])` is a distinct state
/// (present, no entries) but renders the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CronState {
    pub second: Option<Vec<IntervalEntry>>,
    pub minute: Option<Vec<IntervalEntry>>,
    pub hour: Option<Vec<IntervalEntry>>,
    pub day_of_month: Option<Vec<IntervalEntry>>,
    pub month: Option<Vec<IntervalEntry>>,
    pub day_of_week: Option<Vec<IntervalEntry>>,
}

impl Default for CronState {
    /// Second 0, minutes 1 through 15, every hour of every day.
    fn default() -> Self {
        Self {
            second: Some(vec![IntervalEntry::At(0)]),
            minute: Some(vec![IntervalEntry::From(1, 15)]),
            hour: Some(vec![IntervalEntry::Every(1)]),
            day_of_month: Some(vec![IntervalEntry::Every(1)]),
            month: Some(vec![IntervalEntry::Every(1)]),
            day_of_week: Some(vec![IntervalEntry::Every(1)]),
        }
    }
}

impl CronState {
    /// A state with every unit absent.
    pub fn empty() -> Self {
        Self {
            second: None,
            minute: None,
            hour: None,
            day_of_month: None,
            month: None,
            day_of_week: None,
        }
    }

    fn slot(&self, unit: TimeUnit) -> &Option<Vec<IntervalEntry>> {
        match unit {
            TimeUnit::Second => &self.second,
            TimeUnit::Minute => &self.minute,
            TimeUnit::Hour => &self.hour,
            TimeUnit::DayOfMonth => &self.day_of_month,
            TimeUnit::Month => &self.month,
            TimeUnit::DayOfWeek => &self.day_of_week,
        }
    }

    fn slot_mut(&mut self, unit: TimeUnit) -> &mut Option<Vec<IntervalEntry>> {
        match unit {
            TimeUnit::Second => &mut self.second,
            TimeUnit::Minute => &mut self.minute,
            TimeUnit::Hour => &mut self.hour,
            TimeUnit::DayOfMonth => &mut self.day_of_month,
            TimeUnit::Month => &mut self.month,
            TimeUnit::DayOfWeek => &mut self.day_of_week,
        }
    }

    /// Entries for `unit`, or `None` if the unit is absent.
    pub fn get(&self, unit: TimeUnit) -> Option<&[IntervalEntry]> {
        self.slot(unit).as_deref()
    }

    /// Replace the entries for `unit`. `None` marks the unit absent.
    pub fn set(&mut self, unit: TimeUnit, entries: Option<Vec<IntervalEntry>>) {
        *self.slot_mut(unit) = entries;
    }

    /// Builder form of [`CronState::set`].
    pub fn with(mut self, unit: TimeUnit, entries: Option<Vec<IntervalEntry>>) -> Self {
        self.set(unit, entries);
        self
    }

    /// Mark `unit` absent.
    pub fn clear(&mut self, unit: TimeUnit) {
        self.set(unit, None);
    }

    /// Append an entry to `unit`, making the unit present if it was absent.
    pub fn push(&mut self, unit: TimeUnit, entry: IntervalEntry) {
        self.slot_mut(unit).get_or_insert_with(Vec::new).push(entry);
    }

    /// All six units with their entries, in canonical field order.
    pub fn fields(&self) -> impl Iterator<Item = (TimeUnit, Option<&[IntervalEntry]>)> + '_ {
        TimeUnit::ALL.into_iter().map(|unit| (unit, self.get(unit)))
    }
}
