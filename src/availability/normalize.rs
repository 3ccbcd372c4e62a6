use super::models::{
    BusinessHours, DayAvailability, DayHours, DayOfWeek, TimeSlot, WorkingHours,
    DEFAULT_DAY_END, DEFAULT_DAY_START,
};
use super::time::normalize_time;
use serde_json::Value;
use tracing::warn;

/// Decode a storage value that may itself be a JSON-encoded string.
///
/// Upstream storage double-encodes some fields (a string containing JSON);
/// a string that fails to parse is treated as absent data.
pub(crate) fn decode_embedded_json(value: &Value) -> Value {
    match value {
        Value::String(raw) => match serde_json::from_str(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Discarding malformed embedded JSON: {}", e);
                Value::Null
            }
        },
        other => other.clone(),
    }
}

fn time_field(entry: &Value, key: &str, fallback: &str) -> String {
    match entry.get(key).and_then(Value::as_str) {
        Some(raw) => normalize_time(raw),
        None => fallback.to_string(),
    }
}

/// Normalize a raw business-hours payload into a complete seven-day week.
///
/// Accepts whatever storage returned: absent, `null`, a JSON-encoded string,
/// a subset of days, or days with missing sub-fields. Missing days are
/// synthesized as 09:00-17:00, enabled on weekdays only; missing sub-fields
/// fall back per-field (`start` 09:00, `end` 17:00, `enabled` true). Never
/// fails.
pub fn normalize_business_hours(raw: Option<&Value>) -> BusinessHours {
    let decoded = raw.map(decode_embedded_json).unwrap_or(Value::Null);

    let mut hours = BusinessHours::defaults();
    let Some(days) = decoded.as_object() else {
        // Any non-object input means "use full defaults"
        return hours;
    };

    for day in DayOfWeek::ALL {
        if let Some(entry) = days.get(day.as_str()) {
            hours.set_day(
                day,
                DayHours {
                    start: time_field(entry, "start", DEFAULT_DAY_START),
                    end: time_field(entry, "end", DEFAULT_DAY_END),
                    enabled: entry.get("enabled").and_then(Value::as_bool).unwrap_or(true),
                },
            );
        }
    }

    hours
}

/// Convert a worker's raw availability payload into business hours.
///
/// The payload may be a JSON-encoded string or an already-parsed object, and
/// may wrap the per-day map in a `workingHours` field. Explicit
/// `available: false` always wins over the weekday default; an available
/// day's window is taken from the first time slot, else the day's top-level
/// `start`/`end`, else the defaults.
pub fn worker_availability_to_business_hours(raw: Option<&Value>) -> BusinessHours {
    let decoded = raw.map(decode_embedded_json).unwrap_or(Value::Null);

    // The per-day map may be nested under workingHours or be the payload itself
    let days = decoded
        .get("workingHours")
        .or_else(|| decoded.get("working_hours"))
        .map(decode_embedded_json)
        .unwrap_or(decoded);

    let mut hours = BusinessHours::defaults();
    let Some(days) = days.as_object() else {
        return hours;
    };

    for day in DayOfWeek::ALL {
        let Some(entry) = days.get(day.as_str()) else {
            continue;
        };

        if entry.get("available").and_then(Value::as_bool) == Some(false) {
            // Unavailability wins over the day-of-week default
            hours.set_day(
                day,
                DayHours {
                    start: DEFAULT_DAY_START.to_string(),
                    end: DEFAULT_DAY_END.to_string(),
                    enabled: false,
                },
            );
            continue;
        }

        // Prefer the first time slot, then the day's own start/end fields
        let first_slot = entry
            .get("timeSlots")
            .or_else(|| entry.get("time_slots"))
            .and_then(Value::as_array)
            .and_then(|slots| slots.first());

        let (start, end) = match first_slot {
            Some(slot) => (
                time_field(slot, "start", DEFAULT_DAY_START),
                time_field(slot, "end", DEFAULT_DAY_END),
            ),
            None => (
                time_field(entry, "start", DEFAULT_DAY_START),
                time_field(entry, "end", DEFAULT_DAY_END),
            ),
        };

        hours.set_day(
            day,
            DayHours {
                start,
                end,
                enabled: true,
            },
        );
    }

    hours
}

/// Convert typed working hours into business hours, keeping only the first
/// window of each day. Days missing from the input fall back to defaults.
pub fn working_hours_to_business_hours(working: &WorkingHours) -> BusinessHours {
    let mut hours = BusinessHours::defaults();

    for (day, availability) in working.iter() {
        if !availability.available {
            hours.set_day(
                day,
                DayHours {
                    start: DEFAULT_DAY_START.to_string(),
                    end: DEFAULT_DAY_END.to_string(),
                    enabled: false,
                },
            );
            continue;
        }

        let (start, end) = match availability.time_slots.first() {
            Some(slot) => (normalize_time(&slot.start), normalize_time(&slot.end)),
            None => (DEFAULT_DAY_START.to_string(), DEFAULT_DAY_END.to_string()),
        };

        hours.set_day(
            day,
            DayHours {
                start,
                end,
                enabled: true,
            },
        );
    }

    hours
}

/// Convert business hours into the worker-side representation.
///
/// An enabled day becomes a single-slot available day; a disabled day becomes
/// unavailable with no slots. The inverse conversion keeps only the first
/// slot, so the round trip is deliberately lossy for multi-slot days.
pub fn business_hours_to_working_hours(hours: &BusinessHours) -> WorkingHours {
    let mut working = WorkingHours::default();

    for (day, entry) in hours.iter() {
        let availability = if entry.enabled {
            DayAvailability {
                available: true,
                time_slots: vec![TimeSlot {
                    start: entry.start.clone(),
                    end: entry.end.clone(),
                }],
            }
        } else {
            DayAvailability {
                available: false,
                time_slots: Vec::new(),
            }
        };
        working.set_day(day, availability);
    }

    working
}
