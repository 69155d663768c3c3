//! Who sees what: privileged accounts see everything, heads see their own
//! department, and unassigned heads see nothing.

mod common;

use rollcall::auth::accounts::UserRole;
use rollcall::auth::visibility::Scope;
use common::*;

fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    let mut out: Vec<i64> = items.iter().map(id).collect();
    out.sort();
    out
}

#[tokio::test]
async fn test_privileged_accounts_see_everything() {
    let roster = demo_roster().await;
    let snap = roster.snapshot();

    for role in [UserRole::Admin, UserRole::Ceo] {
        assert_eq!(snap.scope_for(&role), Scope::All);
        assert_eq!(snap.departments_for(&role).len(), 6);
        assert_eq!(ids(&snap.members_for(&role), |m| m.id), vec![1, 2, 3]);
        assert_eq!(snap.meetings_for(&role).len(), 2);
        assert_eq!(snap.transfers_for(&role).len(), 3);
    }
}

#[tokio::test]
async fn test_privileged_accounts_see_an_empty_roster_whole() {
    let roster = empty_roster().await;
    let snap = roster.snapshot();

    for role in [UserRole::Admin, UserRole::Ceo] {
        assert_eq!(snap.scope_for(&role), Scope::All);
        assert_eq!(snap.departments_for(&role).len(), 6);
        assert!(snap.members_for(&role).is_empty());
        assert!(snap.meetings_for(&role).is_empty());
        assert!(snap.transfers_for(&role).is_empty());
    }
}

#[tokio::test]
async fn test_head_sees_only_own_department_members() {
    let roster = demo_roster().await;
    let snap = roster.snapshot();

    let ashbal = head("2ashbal");
    assert_eq!(snap.scope_for(&ashbal), Scope::Department(DEPT_2ASHBAL));
    assert_eq!(ids(&snap.members_for(&ashbal), |m| m.id), vec![LEADER_2ASHBAL, MEMBER_2ASHBAL]);
    assert_eq!(ids(&snap.departments_for(&ashbal), |d| d.id), vec![DEPT_2ASHBAL]);

    let bar3me = head("bar3me");
    assert_eq!(ids(&snap.members_for(&bar3me), |m| m.id), vec![SUBLEADER_BAR3ME]);
}

#[tokio::test]
async fn test_head_sees_meetings_with_an_attendee_from_their_department() {
    let roster = demo_roster().await;
    let snap = roster.snapshot();

    // Fatima (bar3me) attends both demo meetings.
    assert_eq!(snap.meetings_for(&head("bar3me")).len(), 2);
    // Nobody from kashaf is invited anywhere.
    assert!(snap.meetings_for(&head("kashaf")).is_empty());
}

#[tokio::test]
async fn test_head_sees_transfers_into_or_out_of_their_department() {
    let roster = demo_roster().await;
    let snap = roster.snapshot();

    assert_eq!(ids(&snap.transfers_for(&head("2ashbal")), |t| t.id), vec![1, 2, 3]);
    assert_eq!(ids(&snap.transfers_for(&head("bar3me")), |t| t.id), vec![1]);
    assert_eq!(ids(&snap.transfers_for(&head("kashaf")), |t| t.id), vec![2, 3]);
    assert!(snap.transfers_for(&head("gawala")).is_empty());
}

#[tokio::test]
async fn test_hidden_member_reads_as_not_found() {
    let roster = demo_roster().await;
    let snap = roster.snapshot();

    assert!(snap.visible_member(&head("2ashbal"), MEMBER_2ASHBAL).is_ok());
    assert!(matches!(
        snap.visible_member(&head("bar3me"), MEMBER_2ASHBAL),
        Err(rollcall::errors::AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_unassigned_head_sees_nothing() {
    let roster = demo_roster().await;
    let mut snap = (*roster.snapshot()).clone();
    snap.assignments.retain(|a| a.role != "gawala");

    let gawala = head("gawala");
    assert_eq!(snap.scope_for(&gawala), Scope::Nothing);
    assert!(snap.departments_for(&gawala).is_empty());
    assert!(snap.members_for(&gawala).is_empty());
    assert!(snap.meetings_for(&gawala).is_empty());
    assert!(snap.transfers_for(&gawala).is_empty());
}
