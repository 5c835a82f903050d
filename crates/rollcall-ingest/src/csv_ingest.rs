#![deny(unsafe_code)]

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use rollcall_model::{
    COLUMN_COUNT, Column, HEADER_ROWS, Participant, Roster, empty_to_none, strip_whitespace,
};

use crate::error::{IngestError, Result};

/// Read a registration export from disk into a [`Roster`].
///
/// The reader is configured without header handling and with flexible row
/// widths: the first two rows are human-readable titles, not a CSV header,
/// and row-width validation belongs to [`parse_rows`] so that a short row
/// fails with its index and missing column rather than a reader error.
pub fn read_roster(path: &Path) -> Result<Roster> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let participants = parse_rows(&rows)?;
    info!(
        path = %path.display(),
        rows = rows.len(),
        participants = participants.len(),
        "parsed registration export"
    );
    Ok(Roster::new(participants))
}

/// Map raw rows to participants against the fixed column schema.
///
/// - The first [`HEADER_ROWS`] rows are skipped unconditionally; an input
///   with no data rows yields an empty result, which is valid.
/// - A row whose first-name and last-name cells are both empty is not a
///   participant and is skipped. Cells a short row lacks count as empty
///   here, so trailing blank lines in an export do not abort the run.
/// - Any remaining row must carry at least [`COLUMN_COUNT`] cells; fewer is
///   fatal for the whole parse. Extra cells are ignored.
/// - Row order is preserved; it becomes rendering and audit order.
pub fn parse_rows(rows: &[Vec<String>]) -> Result<Vec<Participant>> {
    let mut participants = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if index < HEADER_ROWS {
            continue;
        }
        let first_name = cell(row, Column::FirstName);
        let last_name = cell(row, Column::LastName);
        if first_name.is_empty() && last_name.is_empty() {
            debug!(row = index, "skipping row without names");
            continue;
        }
        if row.len() < COLUMN_COUNT {
            return Err(IngestError::RowTooShort {
                row: index,
                expected: COLUMN_COUNT,
                found: row.len(),
                column: Column::ALL[row.len()].as_str(),
            });
        }
        participants.push(participant_from_row(row));
    }
    Ok(participants)
}

fn cell(row: &[String], column: Column) -> &str {
    row.get(column.index()).map_or("", String::as_str)
}

fn participant_from_row(row: &[String]) -> Participant {
    let required = |column: Column| cell(row, column).to_string();
    let optional = |column: Column| empty_to_none(cell(row, column));

    Participant {
        id: required(Column::Id),
        first_name: strip_whitespace(cell(row, Column::FirstName)),
        last_name: strip_whitespace(cell(row, Column::LastName)),
        chinese_name: optional(Column::ChineseName),
        phone_number: required(Column::PhoneNumber),
        email: required(Column::Email),
        affiliated_church: required(Column::AffiliatedChurch),
        title_in_church: required(Column::TitleInChurch),
        zone_or_group_name: optional(Column::ZoneOrGroupName),
        workshop_session_a: required(Column::WorkshopSessionA),
        workshop_session_b: required(Column::WorkshopSessionB),
        need_accommodation: optional(Column::NeedAccommodation),
        need_children_care: optional(Column::NeedChildrenCare),
        children_care_number: optional(Column::ChildrenCareNumber),
        tshirt_size: required(Column::TshirtSize),
        need_saturday_tour_guide: required(Column::NeedSaturdayTourGuide),
        need_lunch_sunday: required(Column::NeedLunchSunday),
        other_questions: optional(Column::OtherQuestions),
        emergency_contact: optional(Column::EmergencyContact),
        promo_code: optional(Column::PromoCode),
        need_dinner_friday: required(Column::NeedDinnerFriday),
        payment_info: optional(Column::PaymentInfo),
    }
}
