use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default opening time used when storage supplies nothing better
pub const DEFAULT_DAY_START: &str = "09:00";
/// Default closing time used when storage supplies nothing better
pub const DEFAULT_DAY_END: &str = "17:00";

/// Driving-time buffer choices offered in the settings UI, in minutes
pub const DRIVING_TIME_OPTIONS: [u32; 5] = [0, 15, 30, 45, 60];
/// Arrival-window length choices offered in the template editor, in minutes
pub const ARRIVAL_WINDOW_OPTIONS: [u32; 6] = [30, 60, 90, 120, 180, 240];
/// Timeslot interpretation modes offered in the template editor
pub const TIMESLOT_TYPES: [&str; 2] = ["Arrival windows", "Fixed length"];

/// The seven canonical weekday identifiers, Sunday first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All seven days in canonical (Sunday-first) order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Lowercase name as used in storage payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }

    /// Whether the business defaults to closed on this day
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    /// The canonical day for a chrono weekday
    pub fn from_weekday(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => DayOfWeek::Sunday,
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single day's open window in the business-hours representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time (HH:MM)
    pub start: String,
    /// Closing time (HH:MM)
    pub end: String,
    /// Whether the business is open that day
    pub enabled: bool,
}

impl DayHours {
    /// Default hours for the given day: 09:00-17:00, closed on weekends
    pub fn default_for(day: DayOfWeek) -> Self {
        Self {
            start: DEFAULT_DAY_START.to_string(),
            end: DEFAULT_DAY_END.to_string(),
            enabled: !day.is_weekend(),
        }
    }

    /// Format the day's hours as a human-readable string
    pub fn format(&self) -> String {
        if self.enabled {
            format!("{} - {}", self.start, self.end)
        } else {
            "Closed".to_string()
        }
    }
}

/// Complete weekly business hours: always carries all seven days.
///
/// The completeness invariant is re-established every time external data is
/// ingested (see [`crate::availability::normalize`]); nothing downstream ever
/// sees a partial week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessHours {
    days: BTreeMap<DayOfWeek, DayHours>,
}

impl BusinessHours {
    /// Full default week: 09:00-17:00 Monday-Friday, closed weekends
    pub fn defaults() -> Self {
        let mut days = BTreeMap::new();
        for day in DayOfWeek::ALL {
            days.insert(day, DayHours::default_for(day));
        }
        Self { days }
    }

    /// Get the hours for a day, falling back to that day's default.
    ///
    /// The fallback only fires on a hand-built partial value (e.g. one that
    /// came in through `Deserialize`); everything produced by this crate
    /// carries all seven days.
    pub fn day(&self, day: DayOfWeek) -> DayHours {
        self.days
            .get(&day)
            .cloned()
            .unwrap_or_else(|| DayHours::default_for(day))
    }

    /// Replace the hours for a day
    pub fn set_day(&mut self, day: DayOfWeek, hours: DayHours) {
        self.days.insert(day, hours);
    }

    /// Iterate the week in canonical (Sunday-first) order
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &DayHours)> {
        self.days.iter().map(|(day, hours)| (*day, hours))
    }

    /// Number of days carried (always 7 for normalized values)
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no days are carried
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::defaults()
    }
}

/// One working window in the worker-side representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// A worker's availability for one day: zero or more disjoint windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub available: bool,
    #[serde(rename = "timeSlots", default)]
    pub time_slots: Vec<TimeSlot>,
}

/// Worker-side weekly availability: multi-window, per-day representation.
///
/// Convertible to and from [`BusinessHours`], lossily in one direction: only
/// the first window of a day survives the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingHours {
    days: BTreeMap<DayOfWeek, DayAvailability>,
}

impl WorkingHours {
    /// Get a day's availability, treating a missing day as unavailable
    pub fn day(&self, day: DayOfWeek) -> DayAvailability {
        self.days.get(&day).cloned().unwrap_or(DayAvailability {
            available: false,
            time_slots: Vec::new(),
        })
    }

    /// Replace a day's availability
    pub fn set_day(&mut self, day: DayOfWeek, availability: DayAvailability) {
        self.days.insert(day, availability);
    }

    /// Iterate the week in canonical (Sunday-first) order
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &DayAvailability)> {
        self.days.iter().map(|(day, availability)| (*day, availability))
    }
}

/// A named, reusable override of the default scheduling parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeslotTemplate {
    /// User-facing identifier; the only validated field
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// How generated slots are interpreted; see [`TIMESLOT_TYPES`].
    /// Out-of-enumeration values are accepted as-is.
    #[serde(default)]
    pub timeslot_type: String,
    /// Template-local driving buffer in minutes, independent of the global one
    #[serde(default)]
    pub driving_time: u32,
    /// Length of each generated window in minutes
    #[serde(default)]
    pub arrival_window_length: u32,
}

impl TimeslotTemplate {
    /// Format the template as a human-readable summary line
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {} min windows, {} min driving buffer)",
            self.name, self.timeslot_type, self.arrival_window_length, self.driving_time
        )
    }
}

/// The whole availability-settings document, loaded and saved as a unit.
///
/// There are no partial/patch semantics: every save overwrites the full
/// document, so the last writer wins across concurrent editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySettings {
    pub business_hours: BusinessHours,
    /// Global driving-time buffer in minutes; see [`DRIVING_TIME_OPTIONS`]
    #[serde(rename = "drivingTime")]
    pub driving_time: u32,
    #[serde(rename = "timeslotTemplates")]
    pub templates: Vec<TimeslotTemplate>,
}

impl Default for AvailabilitySettings {
    fn default() -> Self {
        Self {
            business_hours: BusinessHours::defaults(),
            driving_time: 0,
            templates: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_days() {
        let hours = BusinessHours::defaults();
        assert_eq!(hours.len(), 7);
        for day in DayOfWeek::ALL {
            let entry = hours.day(day);
            assert_eq!(entry.start, DEFAULT_DAY_START);
            assert_eq!(entry.end, DEFAULT_DAY_END);
            assert_eq!(entry.enabled, !day.is_weekend());
        }
    }

    #[test]
    fn test_day_ordering_is_sunday_first() {
        let hours = BusinessHours::defaults();
        let order: Vec<DayOfWeek> = hours.iter().map(|(day, _)| day).collect();
        assert_eq!(order[0], DayOfWeek::Sunday);
        assert_eq!(order[6], DayOfWeek::Saturday);
    }

    #[test]
    fn test_from_weekday_covers_the_week() {
        assert_eq!(DayOfWeek::from_weekday(chrono::Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from_weekday(chrono::Weekday::Wed), DayOfWeek::Wednesday);
        assert_eq!(DayOfWeek::from_weekday(chrono::Weekday::Sat), DayOfWeek::Saturday);
    }

    #[test]
    fn test_day_hours_format() {
        let open = DayHours {
            start: "08:00".to_string(),
            end: "16:00".to_string(),
            enabled: true,
        };
        assert_eq!(open.format(), "08:00 - 16:00");

        let closed = DayHours {
            enabled: false,
            ..open
        };
        assert_eq!(closed.format(), "Closed");
    }

    #[test]
    fn test_business_hours_serializes_by_day_name() {
        let json = serde_json::to_value(BusinessHours::defaults()).unwrap();
        assert!(json.get("monday").is_some());
        assert_eq!(json["saturday"]["enabled"], serde_json::json!(false));
    }

    #[test]
    fn test_template_defaults_are_lenient() {
        let template: TimeslotTemplate =
            serde_json::from_value(serde_json::json!({"name": "Downtown"})).unwrap();
        assert_eq!(template.name, "Downtown");
        assert_eq!(template.driving_time, 0);
        assert_eq!(template.arrival_window_length, 0);
    }
}
