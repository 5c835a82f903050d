//! Tests for rollcall-model types.

use rollcall_model::{COLUMN_COUNT, Column, MatchTable, Participant, Roster};

fn participant(id: &str) -> Participant {
    Participant {
        id: id.to_string(),
        first_name: "安".to_string(),
        last_name: "陳".to_string(),
        chinese_name: Some("陳安".to_string()),
        phone_number: "408-555-0100".to_string(),
        email: "an.chen@example.com".to_string(),
        affiliated_church: "生命河靈糧堂".to_string(),
        title_in_church: "小組長".to_string(),
        zone_or_group_name: None,
        workshop_session_a: "先知性預言與禱告訓練".to_string(),
        workshop_session_b: "職場宣教".to_string(),
        need_accommodation: None,
        need_children_care: Some("是".to_string()),
        children_care_number: Some("2".to_string()),
        tshirt_size: "L".to_string(),
        need_saturday_tour_guide: "是".to_string(),
        need_lunch_sunday: "否".to_string(),
        other_questions: None,
        emergency_contact: None,
        promo_code: None,
        need_dinner_friday: "素".to_string(),
        payment_info: None,
    }
}

#[test]
fn participant_serializes() {
    let original = participant("42");
    let json = serde_json::to_string(&original).expect("serialize participant");
    let round: Participant = serde_json::from_str(&json).expect("deserialize participant");
    assert_eq!(round, original);
}

#[test]
fn schema_covers_every_participant_field() {
    // One named column per record field, in export order.
    assert_eq!(COLUMN_COUNT, 22);
    assert_eq!(Column::ALL[0].as_str(), "id");
    assert_eq!(Column::ALL[COLUMN_COUNT - 1].as_str(), "payment_info");
}

#[test]
fn roster_counts_are_independent() {
    let roster = Roster::new(vec![participant("7"), participant("7"), participant("8")]);
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.unique_id_count(), 2);
    assert_eq!(roster.duplicate_ids(), vec!["7"]);
}

#[test]
fn lookup_resolution_order_is_declaration_order() {
    let table = MatchTable::from_prefix_entries([("敬拜", "G11"), ("敬拜讚美", "F2")]);
    assert_eq!(table.resolve("敬拜讚美"), Some("G11"));
}
