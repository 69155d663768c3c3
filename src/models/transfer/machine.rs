//! Lifecycle of a transfer record: `pending` → `completed`, nothing else.
//!
//! Requesting a transfer only queues a record. Completing it is the single
//! place where a member's department changes.

use std::fmt;
use std::str::FromStr;

use super::types::{NewTransfer, TransferRecord, TransferStatus};
use crate::models::member::Member;

/// What to do when a pending record for the same member and destination
/// already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every request; the review page shows them all.
    #[default]
    Allow,
    /// Refuse a second identical pending request.
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "allow" | "yes" | "1" => Ok(DuplicatePolicy::Allow),
            "false" | "reject" | "no" | "0" => Ok(DuplicatePolicy::Reject),
            other => Err(format!("unknown duplicate transfer policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTransfer {
    pub existing_id: i64,
}

impl fmt::Display for DuplicateTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A pending transfer for this member to that department already exists (#{})", self.existing_id)
    }
}

/// Build the pending request for `member` into `to_department_id`.
///
/// Caller has already checked the actor may request it.
pub fn request(
    records: &[TransferRecord],
    member: &Member,
    to_department_id: i64,
    transferred_by: &str,
    transfer_date: &str,
    policy: DuplicatePolicy,
) -> Result<NewTransfer, DuplicateTransfer> {
    if policy == DuplicatePolicy::Reject {
        if let Some(existing) = records
            .iter()
            .find(|r| r.matches_pending(member.id, to_department_id))
        {
            return Err(DuplicateTransfer { existing_id: existing.id });
        }
    }
    Ok(NewTransfer {
        member_id: member.id,
        member_name: member.full_name_en.clone(),
        from_department_id: member.department_id,
        to_department_id,
        transfer_date: transfer_date.to_string(),
        transferred_by: transferred_by.to_string(),
    })
}

/// Ids of the pending records that a completion of `(member_id, department_id)`
/// would flip.
pub fn pending_matches(records: &[TransferRecord], member_id: i64, department_id: i64) -> Vec<i64> {
    records
        .iter()
        .filter(|r| r.matches_pending(member_id, department_id))
        .map(|r| r.id)
        .collect()
}

/// Apply a completion to loaded collections. Returns the ids of the records
/// flipped; when empty, neither slice was touched.
pub fn complete_in_place(
    records: &mut [TransferRecord],
    members: &mut [Member],
    member_id: i64,
    department_id: i64,
) -> Vec<i64> {
    let mut flipped = Vec::new();
    for record in records.iter_mut() {
        if record.matches_pending(member_id, department_id) {
            record.status = TransferStatus::Completed;
            flipped.push(record.id);
        }
    }
    if !flipped.is_empty() {
        if let Some(member) = members.iter_mut().find(|m| m.id == member_id) {
            member.department_id = department_id;
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::{MemberRole, MemberStatus};

    fn member(id: i64, dept: i64) -> Member {
        Member {
            id,
            first_name_ar: "أ".into(),
            second_name_ar: "ب".into(),
            third_name_ar: "ت".into(),
            fourth_name_ar: "ث".into(),
            full_name_en: format!("Member {id}"),
            birth_date: "2010-01-01".into(),
            national_id: format!("{id}000"),
            location: "Hawalli".into(),
            phone_number: "+965".into(),
            email: None,
            role: MemberRole::Member,
            department_id: dept,
            status: MemberStatus::Active,
            join_date: "2020-01-01".into(),
        }
    }

    fn record(id: i64, member_id: i64, from: i64, to: i64, status: TransferStatus) -> TransferRecord {
        TransferRecord {
            id,
            member_id,
            member_name: format!("Member {member_id}"),
            from_department_id: from,
            to_department_id: to,
            transfer_date: "2023-06-15".into(),
            transferred_by: "Admin".into(),
            status,
        }
    }

    #[test]
    fn request_snapshots_member_and_keeps_department() {
        let m = member(7, 2);
        let t = request(&[], &m, 1, "bar3me", "2024-01-02", DuplicatePolicy::Allow).unwrap();
        assert_eq!(t.member_name, "Member 7");
        assert_eq!(t.from_department_id, 2);
        assert_eq!(t.to_department_id, 1);
        assert_eq!(t.clone().into_record(3).status, TransferStatus::Pending);
        assert_eq!(m.department_id, 2);
    }

    #[test]
    fn duplicate_policy_controls_second_request() {
        let m = member(7, 2);
        let existing = vec![record(4, 7, 2, 1, TransferStatus::Pending)];
        assert!(request(&existing, &m, 1, "Admin", "2024-01-02", DuplicatePolicy::Allow).is_ok());
        assert_eq!(
            request(&existing, &m, 1, "Admin", "2024-01-02", DuplicatePolicy::Reject),
            Err(DuplicateTransfer { existing_id: 4 })
        );
        // A different destination is not a duplicate.
        assert!(request(&existing, &m, 3, "Admin", "2024-01-02", DuplicatePolicy::Reject).is_ok());
    }

    #[test]
    fn completion_without_pending_match_changes_nothing() {
        let mut records = vec![
            record(1, 7, 2, 1, TransferStatus::Completed),
            record(2, 8, 2, 1, TransferStatus::Pending),
        ];
        let mut members = vec![member(7, 2), member(8, 2)];
        let (before_r, before_m) = (records.clone(), members.clone());
        assert!(complete_in_place(&mut records, &mut members, 7, 1).is_empty());
        assert_eq!(records, before_r);
        assert_eq!(members, before_m);
    }

    #[test]
    fn completion_flips_record_and_moves_only_that_member() {
        let mut records = vec![
            record(1, 7, 2, 1, TransferStatus::Pending),
            record(2, 8, 2, 1, TransferStatus::Pending),
        ];
        let mut members = vec![member(7, 2), member(8, 2)];
        assert_eq!(complete_in_place(&mut records, &mut members, 7, 1), vec![1]);
        assert_eq!(records[0].status, TransferStatus::Completed);
        assert_eq!(records[1].status, TransferStatus::Pending);
        assert_eq!(members[0].department_id, 1);
        assert_eq!(members[1].department_id, 2);
    }

    #[test]
    fn policy_parses_from_config_values() {
        assert_eq!("true".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Allow));
        assert_eq!("reject".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Reject));
        assert!("maybe".parse::<DuplicatePolicy>().is_err());
    }
}
