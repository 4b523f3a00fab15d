use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use crate::ast::{IntervalKind, TimeUnit};
use crate::error::InvalidRangeError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A picker entry: display text plus the value written into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LabeledOption {
    pub label: String,
    pub value: i64,
}

impl LabeledOption {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Every integer from `start` (default 0) to `end`, inclusive.
pub fn increasing_sequence(start: Option<i64>, end: i64) -> Result<Vec<i64>, InvalidRangeError> {
    let start = match start {
        None if end < 0 => return Err(InvalidRangeError::NegativeEnd { end }),
        None => 0,
        Some(start) if start > end => {
            return Err(InvalidRangeError::StartAfterEnd { start, end });
        }
        Some(start) => start,
    };
    Ok((start..=end).collect())
}

/// Options labeled with their own decimal value.
pub fn numeric_options(
    start: Option<i64>,
    end: i64,
) -> Result<Vec<LabeledOption>, InvalidRangeError> {
    Ok(increasing_sequence(start, end)?
        .into_iter()
        .map(|n| LabeledOption::new(n.to_string(), n))
        .collect())
}

/// `1 (January)` through `12 (December)`.
pub fn month_options() -> Vec<LabeledOption> {
    MONTH_NAMES
        .iter()
        .zip(1..)
        .map(|(name, n)| LabeledOption::new(format!("{n} ({name})"), n))
        .collect()
}

/// `0 (Sunday)` through `6 (Saturday)`.
pub fn day_of_week_options() -> Vec<LabeledOption> {
    DAY_NAMES
        .iter()
        .zip(0..)
        .map(|(name, n)| LabeledOption::new(format!("{n} ({name})"), n))
        .collect()
}

/// Option lists for one unit: `at` and `from` share the same domain.
struct UnitOptions {
    at_or_from: Vec<LabeledOption>,
    every: Vec<LabeledOption>,
}

/// Picker domains, indexed by `TimeUnit::index()`.
///
/// Day-of-week steps run 1-7 while day-of-week values run 0-6.
static OPTION_TABLE: LazyLock<[UnitOptions; 6]> = LazyLock::new(|| {
    debug!("building picker option table");
    let numeric = |start, end| {
        numeric_options(start, end).unwrap_or_else(|e| unreachable!("fixed bounds: {e}"))
    };
    [
        // second
        UnitOptions {
            at_or_from: numeric(None, 59),
            every: numeric(Some(1), 59),
        },
        // minute
        UnitOptions {
            at_or_from: numeric(None, 59),
            every: numeric(Some(1), 59),
        },
        // hour
        UnitOptions {
            at_or_from: numeric(None, 23),
            every: numeric(Some(1), 23),
        },
        // dayOfMonth
        UnitOptions {
            at_or_from: numeric(Some(1), 31),
            every: numeric(Some(1), 31),
        },
        // month
        UnitOptions {
            at_or_from: month_options(),
            every: numeric(Some(1), 12),
        },
        // dayOfWeek
        UnitOptions {
            at_or_from: day_of_week_options(),
            every: numeric(Some(1), 7),
        },
    ]
});

/// The picker options for a unit and interval kind.
pub fn options_for(unit: TimeUnit, kind: IntervalKind) -> &'static [LabeledOption] {
    let row = &OPTION_TABLE[unit.index()];
    match kind {
        IntervalKind::At | IntervalKind::From => &row.at_or_from,
        IntervalKind::Every => &row.every,
    }
}

/// Upper-case the first character, leaving the rest as is.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(options: &[LabeledOption]) -> Vec<i64> {
        options.iter().map(|o| o.value).collect()
    }

    #[test]
    fn test_sequence_default_start() {
        assert_eq!(increasing_sequence(None, 5).unwrap(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(increasing_sequence(None, 0).unwrap(), vec![0]);
    }

    #[test]
    fn test_sequence_explicit_start() {
        assert_eq!(
            increasing_sequence(Some(12), 16).unwrap(),
            vec![12, 13, 14, 15, 16]
        );
        assert_eq!(
            increasing_sequence(Some(-3), 5).unwrap(),
            vec![-3, -2, -1, 0, 1, 2, 3, 4, 5]
        );
        assert_eq!(increasing_sequence(Some(23), 23).unwrap(), vec![23]);
        assert_eq!(increasing_sequence(Some(-8), -6).unwrap(), vec![-8, -7, -6]);
    }

    #[test]
    fn test_sequence_negative_end_without_start() {
        let err = increasing_sequence(None, -10).unwrap_err();
        assert_eq!(err, InvalidRangeError::NegativeEnd { end: -10 });
        assert!(err
            .to_string()
            .contains("end cannot be negative without providing a start value"));
    }

    #[test]
    fn test_sequence_start_after_end() {
        let err = increasing_sequence(Some(6), 4).unwrap_err();
        assert_eq!(err, InvalidRangeError::StartAfterEnd { start: 6, end: 4 });
        assert!(err
            .to_string()
            .contains("start cannot be of a higher value than end"));
    }

    #[test]
    fn test_numeric_options() {
        let options = numeric_options(Some(1), 3).unwrap();
        assert_eq!(
            options,
            vec![
                LabeledOption::new("1", 1),
                LabeledOption::new("2", 2),
                LabeledOption::new("3", 3),
            ]
        );
        assert!(numeric_options(None, -1).is_err());
    }

    #[test]
    fn test_month_options() {
        let months = month_options();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], LabeledOption::new("1 (January)", 1));
        assert_eq!(months[11], LabeledOption::new("12 (December)", 12));
    }

    #[test]
    fn test_day_of_week_options() {
        let days = day_of_week_options();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], LabeledOption::new("0 (Sunday)", 0));
        assert_eq!(days[6], LabeledOption::new("6 (Saturday)", 6));
    }

    #[test]
    fn test_options_for_numeric_units() {
        use IntervalKind::*;
        use TimeUnit::*;

        let cases = [
            (Second, 0, 59, 1, 59),
            (Minute, 0, 59, 1, 59),
            (Hour, 0, 23, 1, 23),
            (DayOfMonth, 1, 31, 1, 31),
        ];
        for (unit, lo, hi, step_lo, step_hi) in cases {
            for kind in [At, From] {
                let opts = options_for(unit, kind);
                assert_eq!(values(opts), (lo..=hi).collect::<Vec<i64>>(), "{unit} {kind}");
            }
            let steps = options_for(unit, Every);
            assert_eq!(
                values(steps),
                (step_lo..=step_hi).collect::<Vec<i64>>(),
                "{unit} every"
            );
        }
    }

    #[test]
    fn test_options_for_month() {
        assert_eq!(options_for(TimeUnit::Month, IntervalKind::At), month_options());
        assert_eq!(options_for(TimeUnit::Month, IntervalKind::From), month_options());
        let every = options_for(TimeUnit::Month, IntervalKind::Every);
        assert_eq!(values(every), (1..=12).collect::<Vec<i64>>());
        assert_eq!(every[0].label, "1");
    }

    #[test]
    fn test_options_for_day_of_week_asymmetry() {
        let at = options_for(TimeUnit::DayOfWeek, IntervalKind::At);
        assert_eq!(at, day_of_week_options());
        assert_eq!(values(at), (0..=6).collect::<Vec<i64>>());

        let every = options_for(TimeUnit::DayOfWeek, IntervalKind::Every);
        assert_eq!(values(every), (1..=7).collect::<Vec<i64>>());
    }

    #[test]
    fn test_options_for_is_shared() {
        let a = options_for(TimeUnit::Hour, IntervalKind::At);
        let b = options_for(TimeUnit::Hour, IntervalKind::From);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("abc def"), "Abc def");
        assert_eq!(capitalize_first("123 abc"), "123 abc");
        assert_eq!(capitalize_first("day of month"), "Day of month");
        assert_eq!(capitalize_first("aBC"), "ABC");
        assert_eq!(capitalize_first("éte"), "Éte");
    }
}
