use serde::{Deserialize, Serialize};

/// One validated registration row.
///
/// Required fields are carried verbatim from the source, even when empty.
/// Optional fields hold `None` when the source cell was the empty string.
/// A `Participant` is constructed once during parsing and never mutated
/// afterwards; the renderer derives display values but writes nothing back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Registration number. Displayed zero-padded, but stored as read.
    /// Not guaranteed unique; see `Roster::duplicate_ids`.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub chinese_name: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub affiliated_church: String,
    pub title_in_church: String,
    pub zone_or_group_name: Option<String>,
    pub workshop_session_a: String,
    pub workshop_session_b: String,
    pub need_accommodation: Option<String>,
    pub need_children_care: Option<String>,
    pub children_care_number: Option<String>,
    pub tshirt_size: String,
    pub need_saturday_tour_guide: String,
    pub need_lunch_sunday: String,
    pub other_questions: Option<String>,
    pub emergency_contact: Option<String>,
    pub promo_code: Option<String>,
    pub need_dinner_friday: String,
    pub payment_info: Option<String>,
}

/// Normalize an optional source cell: the empty string becomes `None`,
/// anything else is kept as read.
pub fn empty_to_none(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Remove every whitespace character, not just leading and trailing.
///
/// Applied to first and last names only; exports routinely carry stray
/// spaces inside name cells.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_to_none_keeps_non_empty() {
        assert_eq!(empty_to_none(""), None);
        assert_eq!(empty_to_none(" "), Some(" ".to_string()));
        assert_eq!(empty_to_none("G3"), Some("G3".to_string()));
    }

    #[test]
    fn strip_whitespace_removes_internal_spaces() {
        assert_eq!(strip_whitespace(" Mei Ling "), "MeiLing");
        assert_eq!(strip_whitespace("王 小明"), "王小明");
        assert_eq!(strip_whitespace("Chen"), "Chen");
    }
}
