//! Parse-ordered collection of participants with aggregate diagnostics.

use std::collections::{BTreeMap, HashSet};

use crate::participant::Participant;

/// All participants from one export, in row order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Number of distinct `id` values. Diagnostic only: records sharing an
    /// id are all kept and all processed.
    pub fn unique_id_count(&self) -> usize {
        self.participants
            .iter()
            .map(|participant| participant.id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Ids carried by more than one participant, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut order: Vec<&str> = Vec::new();
        for participant in &self.participants {
            let count = counts.entry(participant.id.as_str()).or_insert(0);
            if *count == 0 {
                order.push(participant.id.as_str());
            }
            *count += 1;
        }
        order.retain(|id| counts[id] > 1);
        order
    }

    /// Iterate in parse order; this is also rendering and audit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str, email: &str) -> Participant {
        Participant {
            id: id.to_string(),
            first_name: "An".to_string(),
            last_name: "Chen".to_string(),
            chinese_name: None,
            phone_number: "555-0100".to_string(),
            email: email.to_string(),
            affiliated_church: "River of Life".to_string(),
            title_in_church: "member".to_string(),
            zone_or_group_name: None,
            workshop_session_a: "學生事工".to_string(),
            workshop_session_b: "敬拜讚美".to_string(),
            need_accommodation: None,
            need_children_care: None,
            children_care_number: None,
            tshirt_size: "M".to_string(),
            need_saturday_tour_guide: "是".to_string(),
            need_lunch_sunday: "是".to_string(),
            other_questions: None,
            emergency_contact: None,
            promo_code: None,
            need_dinner_friday: "葷".to_string(),
            payment_info: None,
        }
    }

    #[test]
    fn unique_id_count_does_not_dedupe_records() {
        let roster = Roster::new(vec![
            participant("7", "a@example.com"),
            participant("7", "b@example.com"),
        ]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.unique_id_count(), 1);
    }

    #[test]
    fn duplicate_ids_lists_each_once() {
        let roster = Roster::new(vec![
            participant("1", "a@example.com"),
            participant("2", "b@example.com"),
            participant("1", "c@example.com"),
            participant("1", "d@example.com"),
        ]);
        assert_eq!(roster.duplicate_ids(), vec!["1"]);
    }

    #[test]
    fn iteration_preserves_parse_order() {
        let roster = Roster::new(vec![
            participant("3", "first@example.com"),
            participant("1", "second@example.com"),
        ]);
        let emails: Vec<&str> = roster.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails, vec!["first@example.com", "second@example.com"]);
    }

    #[test]
    fn empty_roster() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert_eq!(roster.unique_id_count(), 0);
        assert!(roster.duplicate_ids().is_empty());
    }
}
