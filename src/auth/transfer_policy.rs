use serde::Serialize;

use crate::auth::accounts::UserRole;
use crate::auth::visibility::Scope;
use crate::models::department::Department;
use crate::models::member::Member;
use crate::models::transfer::TransferLadder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferEligibility {
    pub allowed: bool,
    pub candidates: Vec<Department>,
}

impl TransferEligibility {
    fn denied() -> Self {
        Self { allowed: false, candidates: Vec::new() }
    }

    pub fn permits(&self, department_id: i64) -> bool {
        self.allowed && self.candidates.iter().any(|d| d.id == department_id)
    }
}

/// Admin and CEO may send anyone anywhere, the member's current department
/// included. Heads may only move `Rover`/`Member` members one step up the
/// ladder.
pub fn can_request_transfer(
    role: &UserRole,
    member: &Member,
    departments: &[Department],
    ladder: &TransferLadder,
) -> TransferEligibility {
    if role.is_privileged() {
        return TransferEligibility {
            allowed: true,
            candidates: departments.to_vec(),
        };
    }
    if member.role.is_leadership() {
        return TransferEligibility::denied();
    }
    let candidates: Vec<Department> = ladder
        .next_department(member.department_id)
        .and_then(|next| departments.iter().find(|d| d.id == next))
        .cloned()
        .into_iter()
        .collect();
    TransferEligibility {
        allowed: !candidates.is_empty(),
        candidates,
    }
}

/// Completing a transfer into `department_id` is for privileged roles and the
/// head of the receiving department.
pub fn can_complete_transfer(role: &UserRole, scope: Scope, department_id: i64) -> bool {
    role.is_privileged() || scope.department_id() == Some(department_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::{MemberRole, MemberStatus};

    fn departments() -> Vec<Department> {
        [(1, "2ashbal"), (2, "bar3me"), (3, "kashaf"), (6, "gawala")]
            .into_iter()
            .map(|(id, name)| Department { id, name: name.into() })
            .collect()
    }

    fn member(role: MemberRole, dept: i64) -> Member {
        Member {
            id: 1,
            first_name_ar: "أ".into(),
            second_name_ar: "ب".into(),
            third_name_ar: "ت".into(),
            fourth_name_ar: "ث".into(),
            full_name_en: "Test".into(),
            birth_date: "2012-03-04".into(),
            national_id: "1".into(),
            location: "Kuwait".into(),
            phone_number: "1".into(),
            email: None,
            role,
            department_id: dept,
            status: MemberStatus::Active,
            join_date: "2022-01-01".into(),
        }
    }

    #[test]
    fn head_gets_single_ladder_step() {
        let head = UserRole::from_account_id("bar3me").unwrap();
        let e = can_request_transfer(&head, &member(MemberRole::Member, 2), &departments(), &TransferLadder::default());
        assert!(e.allowed);
        assert_eq!(e.candidates.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);
        assert!(e.permits(1));
        assert!(!e.permits(3));
    }

    #[test]
    fn heads_cannot_move_any_leadership_role() {
        let head = UserRole::from_account_id("bar3me").unwrap();
        for role in [MemberRole::Leader, MemberRole::SubLeader, MemberRole::Gawala] {
            let e = can_request_transfer(&head, &member(role, 2), &departments(), &TransferLadder::default());
            assert_eq!(e, TransferEligibility::denied(), "{role:?}");
        }
    }

    #[test]
    fn terminal_department_has_no_candidates() {
        let head = UserRole::from_account_id("gawala").unwrap();
        let e = can_request_transfer(&head, &member(MemberRole::Rover, 6), &departments(), &TransferLadder::default());
        assert_eq!(e, TransferEligibility::denied());
    }

    #[test]
    fn ladder_target_missing_from_roster_yields_nothing() {
        // 3 -> 4, but department 4 is not in the list.
        let head = UserRole::from_account_id("kashaf").unwrap();
        let e = can_request_transfer(&head, &member(MemberRole::Member, 3), &departments(), &TransferLadder::default());
        assert!(!e.allowed);
    }

    #[test]
    fn completion_rights() {
        assert!(can_complete_transfer(&UserRole::Admin, Scope::All, 5));
        let head = UserRole::from_account_id("2ashbal").unwrap();
        assert!(can_complete_transfer(&head, Scope::Department(1), 1));
        assert!(!can_complete_transfer(&head, Scope::Department(1), 2));
        assert!(!can_complete_transfer(&head, Scope::Nothing, 1));
    }
}
