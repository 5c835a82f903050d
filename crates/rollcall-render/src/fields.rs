//! Typed projection of a participant into the template's placeholders.
//!
//! Every value the template references is a field here, so a placeholder
//! without a source is a compile error rather than a runtime substitution
//! failure.

use rollcall_model::{MatchTable, Participant};

/// Width the registration number is padded to in the document.
pub const ID_DISPLAY_WIDTH: usize = 3;

/// Sentinel the form writes when a participant explicitly declined the
/// Friday dinner order.
pub const DINNER_DECLINED: &str = "不需代訂";

/// Fixed token rendered for a declined or unanswered dinner question.
pub const ANSWER_NO: &str = "否";

/// All values substituted into the notification template, fully derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFields {
    pub first_name: String,
    pub last_name: String,
    pub display_id: String,
    pub tshirt_size: String,
    pub session_a: String,
    pub room_a: String,
    pub session_b: String,
    pub room_b: String,
    pub dinner_friday: String,
    pub saturday_tour_guide: String,
    pub lunch_sunday: String,
}

impl DocumentFields {
    /// Derive the template values from one record and the room table.
    /// Reads only; the participant is never written back.
    pub fn project(participant: &Participant, rooms: &MatchTable) -> Self {
        Self {
            first_name: participant.first_name.clone(),
            last_name: participant.last_name.clone(),
            display_id: pad_id(&participant.id),
            tshirt_size: participant.tshirt_size.clone(),
            session_a: participant.workshop_session_a.clone(),
            room_a: resolve_room(rooms, &participant.workshop_session_a),
            session_b: participant.workshop_session_b.clone(),
            room_b: resolve_room(rooms, &participant.workshop_session_b),
            dinner_friday: normalize_dinner(&participant.need_dinner_friday).to_string(),
            saturday_tour_guide: participant.need_saturday_tour_guide.clone(),
            lunch_sunday: participant.need_lunch_sunday.clone(),
        }
    }
}

/// An unresolved session renders as an empty room cell, never an error.
fn resolve_room(rooms: &MatchTable, session: &str) -> String {
    rooms.resolve(session).unwrap_or_default().to_string()
}

/// Left-pad the registration number with zeros to [`ID_DISPLAY_WIDTH`].
/// Cosmetic only: longer ids pass through untouched, never truncated.
pub fn pad_id(id: &str) -> String {
    format!("{id:0>width$}", width = ID_DISPLAY_WIDTH)
}

/// Collapse "no answer" and the explicit decline sentinel into one fixed
/// "no" token; any other answer passes through verbatim.
pub fn normalize_dinner(raw: &str) -> &str {
    if raw.is_empty() || raw == DINNER_DECLINED {
        ANSWER_NO
    } else {
        raw
    }
}
