//! Who sees what.
//!
//! Every list the application renders goes through one of the `visible_*`
//! functions below. They are pure: the caller passes the role, the role
//! assignments and the full collection, and gets back the permitted subset.

use std::collections::HashSet;

use crate::auth::accounts::UserRole;
use crate::models::department::{Department, RoleAssignment};
use crate::models::meeting::Meeting;
use crate::models::member::Member;
use crate::models::transfer::TransferRecord;

/// The slice of the organisation an account may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Department(i64),
    /// A head account with no role assignment. Sees nothing.
    Nothing,
}

impl Scope {
    pub fn department_id(&self) -> Option<i64> {
        match self {
            Scope::Department(id) => Some(*id),
            _ => None,
        }
    }

    pub fn includes_department(&self, department_id: i64) -> bool {
        match self {
            Scope::All => true,
            Scope::Department(id) => *id == department_id,
            Scope::Nothing => false,
        }
    }
}

pub fn resolve_scope(role: &UserRole, assignments: &[RoleAssignment]) -> Scope {
    if role.is_privileged() {
        return Scope::All;
    }
    match assignments.iter().find(|a| a.role == role.id()) {
        Some(a) => Scope::Department(a.department_id),
        None => {
            log::warn!("No department assigned to role '{}'", role.id());
            Scope::Nothing
        }
    }
}

pub fn visible_departments(scope: Scope, departments: &[Department]) -> Vec<Department> {
    departments
        .iter()
        .filter(|d| scope.includes_department(d.id))
        .cloned()
        .collect()
}

pub fn visible_members(scope: Scope, members: &[Member]) -> Vec<Member> {
    members
        .iter()
        .filter(|m| scope.includes_department(m.department_id))
        .cloned()
        .collect()
}

pub fn can_see_member(scope: Scope, member: &Member) -> bool {
    scope.includes_department(member.department_id)
}

/// A head sees a meeting when at least one attendee currently belongs to
/// their department.
pub fn visible_meetings(scope: Scope, members: &[Member], meetings: &[Meeting]) -> Vec<Meeting> {
    match scope {
        Scope::All => meetings.to_vec(),
        Scope::Nothing => Vec::new(),
        Scope::Department(dept) => {
            let ids: HashSet<i64> = members
                .iter()
                .filter(|m| m.department_id == dept)
                .map(|m| m.id)
                .collect();
            meetings
                .iter()
                .filter(|mt| mt.attendees.iter().any(|a| ids.contains(&a.member_id)))
                .cloned()
                .collect()
        }
    }
}

/// Records leaving or entering the scope's department.
pub fn visible_transfers(scope: Scope, records: &[TransferRecord]) -> Vec<TransferRecord> {
    records
        .iter()
        .filter(|r| {
            scope.includes_department(r.from_department_id)
                || scope.includes_department(r.to_department_id)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments() -> Vec<RoleAssignment> {
        vec![
            RoleAssignment { role: "2ashbal".into(), department_id: 1 },
            RoleAssignment { role: "bar3me".into(), department_id: 2 },
        ]
    }

    #[test]
    fn privileged_roles_resolve_to_everything() {
        assert_eq!(resolve_scope(&UserRole::Admin, &[]), Scope::All);
        assert_eq!(resolve_scope(&UserRole::Ceo, &assignments()), Scope::All);
    }

    #[test]
    fn heads_resolve_through_assignments_not_names() {
        let bar3me = UserRole::from_account_id("bar3me").unwrap();
        assert_eq!(resolve_scope(&bar3me, &assignments()), Scope::Department(2));

        let kashaf = UserRole::from_account_id("kashaf").unwrap();
        assert_eq!(resolve_scope(&kashaf, &assignments()), Scope::Nothing);
    }

    #[test]
    fn transfer_visible_from_either_end() {
        let record = TransferRecord {
            id: 1,
            member_id: 1,
            member_name: "x".into(),
            from_department_id: 2,
            to_department_id: 1,
            transfer_date: "2023-06-15".into(),
            transferred_by: "Admin".into(),
            status: crate::models::transfer::TransferStatus::Pending,
        };
        let records = vec![record];
        assert_eq!(visible_transfers(Scope::Department(1), &records).len(), 1);
        assert_eq!(visible_transfers(Scope::Department(2), &records).len(), 1);
        assert!(visible_transfers(Scope::Department(3), &records).is_empty());
        assert!(visible_transfers(Scope::Nothing, &records).is_empty());
    }
}
