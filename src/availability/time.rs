/// Parse a time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Normalize a time string to the HH:MM format.
///
/// Storage payloads carry times in several spellings ("9", "8.30", "8,30",
/// "09:00"); everything recognizable is folded into zero-padded HH:MM, and
/// anything else is returned unchanged.
pub fn normalize_time(time_str: &str) -> String {
    // Remove any extra whitespace
    let time_str = time_str.trim();

    // Replace commas with periods
    let time_str = time_str.replace(',', ".");

    if time_str.contains(':') {
        // Time already has a colon, just format it properly
        if let Some((hours, minutes)) = parse_time(&time_str) {
            return format!("{:02}:{:02}", hours, minutes);
        }
    } else if time_str.contains('.') {
        // Time has a period (e.g., "8.30")
        let parts: Vec<&str> = time_str.split('.').collect();
        if parts.len() == 2 {
            if let (Ok(hours), Ok(minutes)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                if hours < 24 && minutes < 60 {
                    return format!("{:02}:{:02}", hours, minutes);
                }
            }
        }
    } else {
        // Just a number (e.g., "8"), assume it's hours
        if let Ok(hours) = time_str.parse::<u32>() {
            if hours < 24 {
                return format!("{:02}:00", hours);
            }
        }
    }

    // If all parsing fails, return the original string
    time_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("12:30"), Some((12, 30)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));

        // Invalid cases
        assert_eq!(parse_time("24:00"), None); // Hour out of range
        assert_eq!(parse_time("12:60"), None); // Minute out of range
        assert_eq!(parse_time("12:30:45"), None); // Too many parts
        assert_eq!(parse_time("12"), None); // Too few parts
        assert_eq!(parse_time("12:ab"), None); // Invalid minute
        assert_eq!(parse_time("ab:30"), None); // Invalid hour
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("09:00"), "09:00");
        assert_eq!(normalize_time(" 9:30 "), "09:30");
        assert_eq!(normalize_time("9:5"), "09:05");
        assert_eq!(normalize_time("24:00"), "24:00"); // Rejected by parse_time, returned as-is
        assert_eq!(normalize_time("8.30"), "08:30");
        assert_eq!(normalize_time("8,15"), "08:15");
        assert_eq!(normalize_time("8"), "08:00");
        assert_eq!(normalize_time("25"), "25"); // Out of range, returned as-is
        assert_eq!(normalize_time("hello"), "hello");
    }

    #[test]
    fn test_normalize_time_is_idempotent() {
        for input in ["9", "8.30", "09:00", "garbage"] {
            let once = normalize_time(input);
            assert_eq!(normalize_time(&once), once);
        }
    }
}
