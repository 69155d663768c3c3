//! Roster behaviour when the backend misbehaves, and member management rules.

mod common;

use rollcall::auth::accounts::UserRole;
use rollcall::errors::AppError;
use rollcall::models::member::MemberRole;
use common::*;

// ---------------------------------------------------------------------------
// Backend failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_failed_write_leaves_snapshot_untouched() {
    let roster = demo_roster().await;
    let before = roster.snapshot();
    set_offline(&roster, true);

    let err = roster
        .add_member(&UserRole::Admin, new_member("Offline Add", MemberRole::Member, DEPT_2ASHBAL))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    let err = roster
        .advance_attendance(&UserRole::Admin, 1, LEADER_2ASHBAL)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    let err = roster
        .complete_transfer(&head("kashaf"), MEMBER_2ASHBAL, DEPT_KASHAF)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    let after = roster.snapshot();
    assert_eq!(after.members, before.members);
    assert_eq!(after.meetings, before.meetings);
    assert_eq!(after.transfers, before.transfers);
}

#[tokio::test]
async fn test_failed_refresh_leaves_empty_collections() {
    let roster = demo_roster().await;
    assert_eq!(roster.snapshot().members.len(), 3);

    set_offline(&roster, true);
    roster.refresh().await;
    let snap = roster.snapshot();
    assert!(snap.departments.is_empty());
    assert!(snap.members.is_empty());
    assert!(snap.meetings.is_empty());
    assert!(snap.transfers.is_empty());

    set_offline(&roster, false);
    roster.refresh().await;
    assert_eq!(roster.snapshot().members.len(), 3);
}

// ---------------------------------------------------------------------------
// Member management
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_head_cannot_add_to_another_department() {
    let roster = demo_roster().await;
    let err = roster
        .add_member(&head("bar3me"), new_member("Elsewhere", MemberRole::Member, DEPT_KASHAF))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
    assert_eq!(roster.snapshot().members.len(), 3);
}

#[tokio::test]
async fn test_unknown_department_is_a_validation_error() {
    let roster = demo_roster().await;
    let err = roster
        .add_member(&UserRole::Admin, new_member("Nowhere", MemberRole::Member, 99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_blank_fields_are_filled_on_add() {
    let roster = demo_roster().await;
    let mut new = new_member("", MemberRole::Rover, DEPT_2ASHBAL);
    new.national_id.clear();
    new.birth_date.clear();
    new.phone_number.clear();

    let id = roster.add_member(&head("2ashbal"), new).await.expect("add");
    let snap = roster.snapshot();
    let m = snap.visible_member(&head("2ashbal"), id).expect("visible");
    assert!(!m.full_name_en.is_empty());
    assert!(!m.national_id.is_empty());
    assert!(!m.birth_date.is_empty());
    assert!(!m.phone_number.is_empty());
}

#[tokio::test]
async fn test_head_cannot_edit_or_delete_hidden_members() {
    let roster = demo_roster().await;
    let mut fatima = roster.snapshot().members[2].clone();
    fatima.location = "Farwaniya".into();

    let err = roster.update_member(&head("2ashbal"), fatima).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let err = roster.delete_member(&head("2ashbal"), SUBLEADER_BAR3ME).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(roster.snapshot().members.len(), 3);
}

#[tokio::test]
async fn test_head_cannot_move_a_member_by_editing_department() {
    let roster = demo_roster().await;
    let mut ahmed = roster.snapshot().members[1].clone();
    ahmed.department_id = DEPT_KASHAF;

    let err = roster.update_member(&head("2ashbal"), ahmed).await.unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
}
