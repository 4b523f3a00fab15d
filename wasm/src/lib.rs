use cronstate::{CronState, IntervalKind, TimeUnit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    // Structs become plain objects, not Maps.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js(state: JsValue) -> Result<CronState, JsError> {
    serde_wasm_bindgen::from_value(state).map_err(|e| JsError::new(&e.to_string()))
}

/// Convert a JS number to an integer, rejecting fractions, NaN, infinities
/// and anything outside the safe-integer range.
fn safe_integer(name: &str, n: f64) -> Result<i64, String> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(format!("{name} must be an integer, got {n}"));
    }
    if n.abs() > MAX_SAFE_INTEGER {
        return Err(format!("{name} is outside the safe integer range, got {n}"));
    }
    Ok(n as i64)
}

fn sequence(start: Option<f64>, end: f64) -> Result<Vec<f64>, String> {
    let start = start.map(|s| safe_integer("start", s)).transpose()?;
    let end = safe_integer("end", end)?;
    let seq = cronstate::increasing_sequence(start, end).map_err(|e| e.to_string())?;
    // Every element lies between two safe integers, so the cast is exact.
    Ok(seq.into_iter().map(|n| n as f64).collect())
}

/// Render a state object (`{second: [{interval: "at", value: 0}], ...}`) as a cron expression.
#[wasm_bindgen(js_name = "toCron")]
pub fn to_cron(state: JsValue) -> Result<String, JsError> {
    Ok(from_js(state)?.to_cron())
}

/// The default state: second 0, minutes 1-15, every hour.
#[wasm_bindgen(js_name = "defaultState")]
pub fn default_state() -> Result<JsValue, JsError> {
    to_js(&CronState::default())
}

/// Picker options (`[{label, value}]`) for a unit such as `"dayOfWeek"` and a kind such as `"every"`.
#[wasm_bindgen(js_name = "optionsFor")]
pub fn options_for(unit: &str, kind: &str) -> Result<JsValue, JsError> {
    let unit: TimeUnit = unit.parse().map_err(|e| JsError::new(&format!("{e}")))?;
    let kind: IntervalKind = kind.parse().map_err(|e| JsError::new(&format!("{e}")))?;
    to_js(cronstate::options_for(unit, kind))
}

/// Every integer from `start` (default 0) to `end`, inclusive.
#[wasm_bindgen(js_name = "increasingSequence")]
pub fn increasing_sequence(start: Option<f64>, end: f64) -> Result<Vec<f64>, JsError> {
    sequence(start, end).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen(js_name = "capitalizeFirst")]
pub fn capitalize_first(text: &str) -> String {
    cronstate::capitalize_first(text)
}
