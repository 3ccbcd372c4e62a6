/// Anchor for generated previews: 8:00 AM, in minutes past midnight
const PREVIEW_ANCHOR_MINUTES: u64 = 480;

/// Effective window length when the template supplies none
const FALLBACK_WINDOW_MINUTES: u64 = 60;

/// Format minutes past midnight as a 12-hour clock string ("8:00 AM")
fn format_clock(minutes_past_midnight: u64) -> String {
    let hour24 = (minutes_past_midnight / 60) % 24;
    let minute = minutes_past_midnight % 60;
    let period = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, minute, period)
}

/// Generate a preview of the arrival windows a timeslot template would
/// produce, as human-readable ranges starting at 8:00 AM.
///
/// Windows are back-to-back: the driving-time buffer is displayed separately
/// in the editor and never offsets the generated boundaries. A zero window
/// length falls back to 60 minutes. Pure and deterministic; always returns
/// exactly `count` strings.
///
/// Window lengths are not range-checked upstream (stored templates accept
/// any `u32`), so the minute math runs in `u64` and saturates.
pub fn generate_example_slots(
    _driving_time_minutes: u32,
    window_length_minutes: u32,
    count: usize,
) -> Vec<String> {
    let window = if window_length_minutes == 0 {
        FALLBACK_WINDOW_MINUTES
    } else {
        u64::from(window_length_minutes)
    };

    let mut slots = Vec::with_capacity(count);
    let mut start = PREVIEW_ANCHOR_MINUTES;
    for _ in 0..count {
        let end = start.saturating_add(window);
        slots.push(format!("{} - {}", format_clock(start), format_clock(end)));
        start = end;
    }

    slots
}
