use super::models::TimeslotTemplate;
use std::collections::HashMap;

/// Message shown next to the name field when it is blank
pub const NAME_REQUIRED_MESSAGE: &str = "Template name is required";

/// Outcome of validating a timeslot template: a field -> message mapping,
/// valid iff the mapping is empty. Returned, never thrown; the form displays
/// the messages inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValidation {
    pub errors: HashMap<String, String>,
}

impl TemplateValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a timeslot template before it is added to the catalog.
///
/// Only the name is checked (non-empty after trimming). The remaining fields
/// are accepted as-is, including values outside the offered option sets; the
/// lenient behavior is load-bearing for existing stored templates.
pub fn validate_timeslot_template(template: &TimeslotTemplate) -> TemplateValidation {
    let mut errors = HashMap::new();

    if template.name.trim().is_empty() {
        errors.insert("name".to_string(), NAME_REQUIRED_MESSAGE.to_string());
    }

    TemplateValidation { errors }
}

/// Append a template to the ordered list.
///
/// The caller is responsible for validating first; no re-validation and no
/// deduplication by name happens here. The returned list is persisted in
/// full with the rest of the settings document.
pub fn add_timeslot_template(
    mut existing: Vec<TimeslotTemplate>,
    candidate: TimeslotTemplate,
) -> Vec<TimeslotTemplate> {
    existing.push(candidate);
    existing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str) -> TimeslotTemplate {
        TimeslotTemplate {
            name: name.to_string(),
            description: String::new(),
            timeslot_type: "Arrival windows".to_string(),
            driving_time: 15,
            arrival_window_length: 60,
        }
    }

    #[test]
    fn test_blank_names_are_rejected() {
        for name in ["", "  ", "\t\n"] {
            let result = validate_timeslot_template(&template(name));
            assert!(!result.is_valid());
            assert_eq!(
                result.errors.get("name").map(String::as_str),
                Some(NAME_REQUIRED_MESSAGE)
            );
        }
    }

    #[test]
    fn test_named_template_is_valid() {
        let result = validate_timeslot_template(&template("Downtown"));
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_out_of_enumeration_values_pass() {
        let mut odd = template("Odd");
        odd.timeslot_type = "Teleportation".to_string();
        odd.driving_time = 7;
        odd.arrival_window_length = 11;
        assert!(validate_timeslot_template(&odd).is_valid());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let list = add_timeslot_template(
            add_timeslot_template(vec![template("a")], template("b")),
            template("a"),
        );
        let names: Vec<&str> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "a"]);
    }
}
