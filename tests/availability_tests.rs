use fieldbook::availability::{
    business_hours_to_working_hours, generate_example_slots, normalize_business_hours,
    worker_availability_to_business_hours, working_hours_to_business_hours, BusinessHours,
    DayAvailability, DayOfWeek, TimeSlot, WorkingHours,
};
use serde_json::json;

/// Every input, however broken, normalizes into a complete seven-day week
#[test]
fn test_normalization_completeness() {
    let inputs = [
        None,
        Some(json!(null)),
        Some(json!({})),
        Some(json!("not even json {")),
        Some(json!(17)),
        Some(json!({"monday": {"start": "10:00"}})),
        Some(json!({"tuesday": {}, "saturday": {"enabled": true}})),
    ];

    for input in &inputs {
        let hours = normalize_business_hours(input.as_ref());
        assert_eq!(hours.len(), 7, "missing days for input {:?}", input);
        for day in DayOfWeek::ALL {
            let entry = hours.day(day);
            assert!(!entry.start.is_empty());
            assert!(!entry.end.is_empty());
        }
    }
}

/// Days absent from the input get 09:00-17:00, enabled on weekdays only
#[test]
fn test_weekend_default_rule() {
    let hours = normalize_business_hours(Some(&json!({"wednesday": {"start": "07:00"}})));

    for day in DayOfWeek::ALL {
        if day == DayOfWeek::Wednesday {
            continue;
        }
        let entry = hours.day(day);
        assert_eq!(entry.start, "09:00");
        assert_eq!(entry.end, "17:00");
        assert_eq!(entry.enabled, !day.is_weekend());
    }
}

/// Normalizing an already-normalized week changes nothing
#[test]
fn test_normalization_is_idempotent() {
    let inputs = [
        json!(null),
        json!({}),
        json!({"monday": {"start": "10:00", "end": "18:30", "enabled": false}}),
        json!({"sunday": {"enabled": true}}),
    ];

    for input in inputs {
        let once = normalize_business_hours(Some(&input));
        let reserialized = serde_json::to_value(&once).unwrap();
        let twice = normalize_business_hours(Some(&reserialized));
        assert_eq!(once, twice);
    }
}

/// A multi-slot worker day survives the round trip as its first slot only
#[test]
fn test_lossy_round_trip_keeps_first_slot() {
    let mut worker = WorkingHours::default();
    for day in DayOfWeek::ALL {
        worker.set_day(
            day,
            DayAvailability {
                available: day == DayOfWeek::Monday,
                time_slots: if day == DayOfWeek::Monday {
                    vec![
                        TimeSlot {
                            start: "08:00".to_string(),
                            end: "12:00".to_string(),
                        },
                        TimeSlot {
                            start: "14:00".to_string(),
                            end: "18:00".to_string(),
                        },
                    ]
                } else {
                    Vec::new()
                },
            },
        );
    }

    let business = working_hours_to_business_hours(&worker);
    let round_tripped = business_hours_to_working_hours(&business);

    let monday = round_tripped.day(DayOfWeek::Monday);
    assert!(monday.available);
    assert_eq!(
        monday.time_slots,
        vec![TimeSlot {
            start: "08:00".to_string(),
            end: "12:00".to_string(),
        }]
    );
}

/// Disabled days convert to unavailable days with no slots, and back
#[test]
fn test_disabled_day_conversion() {
    let business = BusinessHours::defaults();
    let working = business_hours_to_working_hours(&business);

    let saturday = working.day(DayOfWeek::Saturday);
    assert!(!saturday.available);
    assert!(saturday.time_slots.is_empty());

    let monday = working.day(DayOfWeek::Monday);
    assert!(monday.available);
    assert_eq!(monday.time_slots.len(), 1);

    // And the whole week converts back to where it started
    assert_eq!(working_hours_to_business_hours(&working), business);
}

/// A worker payload that is not valid JSON behaves exactly like no payload
#[test]
fn test_malformed_worker_payload_tolerance() {
    let malformed = json!("{\"workingHours\": oops");
    let from_malformed = worker_availability_to_business_hours(Some(&malformed));
    let from_absent = worker_availability_to_business_hours(None);

    assert_eq!(from_malformed, from_absent);
    assert_eq!(from_absent, BusinessHours::defaults());
}

/// Example slots depend only on the window length, never the driving buffer
#[test]
fn test_example_slots_ignore_driving_buffer() {
    for driving_time in [0, 15, 30, 45, 60] {
        assert_eq!(
            generate_example_slots(driving_time, 60, 3),
            vec!["8:00 AM - 9:00 AM", "9:00 AM - 10:00 AM", "10:00 AM - 11:00 AM"]
        );
    }
}
