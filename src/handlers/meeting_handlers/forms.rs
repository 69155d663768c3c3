use std::collections::HashMap;

use crate::models::meeting::{AttendanceStatus, Attendee, Meeting};

const ATTENDEE_PREFIX: &str = "attendee_";

/// Meeting form as posted: `title`, `date`, `csrf_token` and one
/// `attendee_<member id>` key per ticked checkbox.
#[derive(Debug, Clone, Default)]
pub struct MeetingForm {
    pub title: String,
    pub date: String,
    pub csrf_token: String,
    pub member_ids: Vec<i64>,
}

impl MeetingForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |k: &str| fields.get(k).cloned().unwrap_or_default();
        let mut member_ids: Vec<i64> = fields
            .keys()
            .filter_map(|k| k.strip_prefix(ATTENDEE_PREFIX))
            .filter_map(|id| id.parse().ok())
            .collect();
        member_ids.sort_unstable();
        Self {
            title: get("title"),
            date: get("date"),
            csrf_token: get("csrf_token"),
            member_ids,
        }
    }

    pub fn from_meeting(m: &Meeting) -> Self {
        Self {
            title: m.title.clone(),
            date: m.date.clone(),
            csrf_token: String::new(),
            member_ids: m.attendees.iter().map(|a| a.member_id).collect(),
        }
    }

    /// Selected members as attendees. Members already on `existing` keep their
    /// status; everyone else starts `Present`. Names are filled in later.
    pub fn attendees(&self, existing: Option<&Meeting>) -> Vec<Attendee> {
        self.member_ids
            .iter()
            .map(|&member_id| Attendee {
                member_id,
                name: String::new(),
                status: existing
                    .and_then(|m| m.attendee(member_id))
                    .map(|a| a.status)
                    .unwrap_or(AttendanceStatus::Present),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_ticked_attendees_and_keeps_known_status() {
        let fields: HashMap<String, String> = [
            ("title", "Camp prep"),
            ("date", "2024-03-01"),
            ("csrf_token", "t"),
            ("attendee_3", "on"),
            ("attendee_1", "on"),
            ("attendee_x", "on"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let form = MeetingForm::from_fields(&fields);
        assert_eq!(form.member_ids, vec![1, 3]);

        let existing = Meeting {
            id: 9,
            title: "old".into(),
            date: "2024-02-01".into(),
            attendees: vec![Attendee { member_id: 3, name: "C".into(), status: AttendanceStatus::Absent }],
        };
        let attendees = form.attendees(Some(&existing));
        assert_eq!(attendees[0].status, AttendanceStatus::Present);
        assert_eq!(attendees[1].status, AttendanceStatus::Absent);
    }
}
