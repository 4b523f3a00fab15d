use tracing::trace;

use crate::ast::*;

/// Render a cron state as a cron expression, one field per present unit.
///
/// Units are emitted in canonical order (second through day-of-week). A unit
/// that is absent, or present with no entries, contributes no field and no
/// separator, so the result never has leading, trailing or repeated spaces.
/// Values are not range-checked.
pub fn to_cron(state: &CronState) -> String {
    let mut out = String::new();
    for (unit, entries) in state.fields() {
        let Some(entries) = entries.filter(|e| !e.is_empty()) else {
            trace!(%unit, "skipping field");
            continue;
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&field(entries));
    }
    out
}

/// Render one cron field: the entries' tokens joined with `,`.
pub fn field(entries: &[IntervalEntry]) -> String {
    entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use IntervalEntry::*;

    #[test]
    fn test_to_cron_default() {
        assert_eq!(to_cron(&CronState::default()), "0 1-15 * * * *");
    }

    #[test]
    fn test_to_cron_empty_state() {
        assert_eq!(to_cron(&CronState::empty()), "");
    }

    #[test]
    fn test_to_cron_absent_middle_unit() {
        let state = CronState::default().with(TimeUnit::DayOfMonth, None);
        assert_eq!(to_cron(&state), "0 1-15 * * *");
    }

    #[test]
    fn test_to_cron_absent_first_and_last() {
        let state = CronState::default()
            .with(TimeUnit::Second, None)
            .with(TimeUnit::DayOfWeek, None);
        let cron = to_cron(&state);
        assert_eq!(cron, "1-15 * * *");
        assert!(!cron.starts_with(' '));
        assert!(!cron.ends_with(' '));
    }

    #[test]
    fn test_to_cron_five_field() {
        let state = CronState::empty()
            .with(TimeUnit::Minute, Some(vec![At(0)]))
            .with(TimeUnit::Hour, Some(vec![At(9)]))
            .with(TimeUnit::DayOfMonth, Some(vec![Every(1)]))
            .with(TimeUnit::Month, Some(vec![Every(1)]))
            .with(TimeUnit::DayOfWeek, Some(vec![From(1, 5)]));
        assert_eq!(to_cron(&state), "0 9 * * 1-5");
    }

    #[test]
    fn test_to_cron_multiple_entries() {
        let state = CronState::default().with(TimeUnit::Second, Some(vec![At(0), At(30)]));
        assert_eq!(to_cron(&state), "0,30 1-15 * * * *");
    }

    #[test]
    fn test_to_cron_mixed_entries() {
        let state = CronState::default().with(
            TimeUnit::Hour,
            Some(vec![From(9, 17), Every(4), At(22)]),
        );
        assert_eq!(to_cron(&state), "0 1-15 9-17,*/4,22 * * *");
    }

    #[test]
    fn test_to_cron_step() {
        let state = CronState::default().with(TimeUnit::Minute, Some(vec![Every(5)]));
        assert_eq!(to_cron(&state), "0 */5 * * * *");
    }

    #[test]
    fn test_to_cron_empty_list_renders_like_absent() {
        let empty_list = CronState::default().with(TimeUnit::Month, Some(vec![]));
        let absent = CronState::default().with(TimeUnit::Month, None);
        assert_eq!(to_cron(&empty_list), to_cron(&absent));
        assert!(!to_cron(&empty_list).contains("  "));
    }

    #[test]
    fn test_to_cron_does_not_validate() {
        let state = CronState::empty().with(TimeUnit::Second, Some(vec![At(99)]));
        assert_eq!(to_cron(&state), "99");
    }

    #[test]
    fn test_to_cron_does_not_mutate() {
        let state = CronState::default();
        let before = state.clone();
        let _ = to_cron(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_field() {
        assert_eq!(field(&[At(0), At(30)]), "0,30");
        assert_eq!(field(&[Every(1)]), "*");
        assert_eq!(field(&[]), "");
    }
}
