//! Positional column schema for the registration export.
//!
//! The export is produced by a form tool with a fixed question order, so
//! cells are addressed by position. The schema names every position once,
//! and the parser validates row width against `COLUMN_COUNT` instead of
//! trusting bare indices.

use std::fmt;

/// Rows reserved for human-readable headers at the top of the export.
pub const HEADER_ROWS: usize = 2;

/// Number of cells a data row must carry.
pub const COLUMN_COUNT: usize = Column::ALL.len();

/// Named column positions, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    FirstName,
    LastName,
    ChineseName,
    PhoneNumber,
    Email,
    AffiliatedChurch,
    TitleInChurch,
    ZoneOrGroupName,
    WorkshopSessionA,
    WorkshopSessionB,
    NeedAccommodation,
    NeedChildrenCare,
    ChildrenCareNumber,
    TshirtSize,
    NeedSaturdayTourGuide,
    NeedLunchSunday,
    OtherQuestions,
    EmergencyContact,
    PromoCode,
    NeedDinnerFriday,
    PaymentInfo,
}

impl Column {
    /// Every column in source order; the array position is the cell index.
    pub const ALL: [Column; 22] = [
        Column::Id,
        Column::FirstName,
        Column::LastName,
        Column::ChineseName,
        Column::PhoneNumber,
        Column::Email,
        Column::AffiliatedChurch,
        Column::TitleInChurch,
        Column::ZoneOrGroupName,
        Column::WorkshopSessionA,
        Column::WorkshopSessionB,
        Column::NeedAccommodation,
        Column::NeedChildrenCare,
        Column::ChildrenCareNumber,
        Column::TshirtSize,
        Column::NeedSaturdayTourGuide,
        Column::NeedLunchSunday,
        Column::OtherQuestions,
        Column::EmergencyContact,
        Column::PromoCode,
        Column::NeedDinnerFriday,
        Column::PaymentInfo,
    ];

    /// Cell index of this column within a data row. Declaration order and
    /// `Column::ALL` order are the same, which the tests pin down.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case field name, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::ChineseName => "chinese_name",
            Column::PhoneNumber => "phone_number",
            Column::Email => "email",
            Column::AffiliatedChurch => "affiliated_church",
            Column::TitleInChurch => "title_in_church",
            Column::ZoneOrGroupName => "zone_or_group_name",
            Column::WorkshopSessionA => "workshop_session_a",
            Column::WorkshopSessionB => "workshop_session_b",
            Column::NeedAccommodation => "need_accommodation",
            Column::NeedChildrenCare => "need_children_care",
            Column::ChildrenCareNumber => "children_care_number",
            Column::TshirtSize => "tshirt_size",
            Column::NeedSaturdayTourGuide => "need_saturday_tour_guide",
            Column::NeedLunchSunday => "need_lunch_sunday",
            Column::OtherQuestions => "other_questions",
            Column::EmergencyContact => "emergency_contact",
            Column::PromoCode => "promo_code",
            Column::NeedDinnerFriday => "need_dinner_friday",
            Column::PaymentInfo => "payment_info",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_array_positions() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position, "column {column}");
        }
    }

    #[test]
    fn schema_width_is_stable() {
        assert_eq!(COLUMN_COUNT, 22);
        assert_eq!(Column::Id.index(), 0);
        assert_eq!(Column::FirstName.index(), 1);
        assert_eq!(Column::NeedDinnerFriday.index(), 20);
        assert_eq!(Column::PaymentInfo.index(), 21);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Column::ALL.iter().map(|column| column.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COLUMN_COUNT);
    }
}
