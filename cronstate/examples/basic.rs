//! Basic cronstate walkthrough: build a state, edit it, render it.

use cronstate::{CronState, IntervalEntry, TimeUnit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The default state fires at second 0 of minutes 1-15, every hour
    let mut state = CronState::default();
    println!("default:        {}", state.to_cron());

    // Add a second value to the seconds field
    state.push(TimeUnit::Second, IntervalEntry::At(30));
    println!("two seconds:    {}", state.to_cron());

    // Drop the seconds field entirely for a classic 5-field expression
    state.clear(TimeUnit::Second);
    state.set(TimeUnit::Minute, Some(vec![IntervalEntry::Every(10)]));
    state.set(TimeUnit::DayOfWeek, Some(vec![IntervalEntry::From(1, 5)]));
    println!("weekdays:       {}", state.to_cron());

    // States travel as JSON between the form layer and the formatter
    let json = state.to_json()?;
    println!("\nas JSON: {json}");
    let back = CronState::from_json(&json)?;
    assert_eq!(back.to_cron(), state.to_cron());

    Ok(())
}
