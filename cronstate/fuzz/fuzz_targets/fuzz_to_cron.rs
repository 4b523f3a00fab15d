#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(state) = cronstate::CronState::from_json(s) {
            let cron = state.to_cron();
            assert!(!cron.contains("  "), "double space in {cron:?}");
            assert_eq!(cron.trim(), cron, "stray whitespace in {cron:?}");
            let reparsed = cronstate::CronState::from_json(
                &state.to_json().expect("state must serialize"),
            )
            .expect("serialized state must parse");
            assert_eq!(reparsed, state, "json roundtrip changed the state");
        }
    }
});
