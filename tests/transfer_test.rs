//! Transfer requests and completion, end to end through the roster.
//!
//! Requests only queue a pending record; the member's department changes when
//! the receiving side completes it.

mod common;

use rollcall::auth::accounts::UserRole;
use rollcall::errors::AppError;
use rollcall::models::member::MemberRole;
use rollcall::models::transfer::{DuplicatePolicy, TransferStatus};
use common::*;

fn department_of(roster: &rollcall::roster::Roster, member_id: i64) -> i64 {
    roster
        .snapshot()
        .members
        .iter()
        .find(|m| m.id == member_id)
        .map(|m| m.department_id)
        .expect("member loaded")
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_head_may_move_a_plain_member_one_step_up() {
    let roster = demo_roster().await;
    let bar3me = head("bar3me");
    let id = roster
        .add_member(&bar3me, new_member("Yousef Khaled", MemberRole::Member, DEPT_BAR3ME))
        .await
        .expect("add member");

    let (member, eligibility) = roster.transfer_options(&bar3me, id).expect("options");
    assert_eq!(member.department_id, DEPT_BAR3ME);
    assert!(eligibility.allowed);
    let candidates: Vec<i64> = eligibility.candidates.iter().map(|d| d.id).collect();
    assert_eq!(candidates, vec![DEPT_2ASHBAL]);
    assert!(eligibility.permits(DEPT_2ASHBAL));
    assert!(!eligibility.permits(DEPT_KASHAF));
}

#[tokio::test]
async fn test_no_leadership_role_is_movable_by_a_head() {
    let roster = demo_roster().await;
    let bar3me = head("bar3me");
    for role in [MemberRole::Leader, MemberRole::SubLeader, MemberRole::Gawala] {
        let id = roster
            .add_member(&bar3me, new_member(&format!("{role:?} Candidate"), role, DEPT_BAR3ME))
            .await
            .expect("add");
        let (_, eligibility) = roster.transfer_options(&bar3me, id).expect("options");
        assert!(!eligibility.allowed, "{role:?}");
        assert!(eligibility.candidates.is_empty(), "{role:?}");
    }
}

#[tokio::test]
async fn test_head_may_not_move_leadership() {
    let roster = demo_roster().await;
    let (_, eligibility) = roster
        .transfer_options(&head("bar3me"), SUBLEADER_BAR3ME)
        .expect("options");
    assert!(!eligibility.allowed);
    assert!(eligibility.candidates.is_empty());

    let err = roster
        .request_transfer(&head("bar3me"), SUBLEADER_BAR3ME, DEPT_2ASHBAL)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
}

#[tokio::test]
async fn test_last_department_has_no_destination() {
    let roster = demo_roster().await;
    let gawala = head("gawala");
    let id = roster
        .add_member(&gawala, new_member("Rover At The Top", MemberRole::Rover, DEPT_GAWALA))
        .await
        .expect("add member");

    let (_, eligibility) = roster.transfer_options(&gawala, id).expect("options");
    assert!(!eligibility.allowed);
    assert!(eligibility.candidates.is_empty());
}

#[tokio::test]
async fn test_privileged_accounts_get_every_department() {
    let roster = demo_roster().await;
    for role in [UserRole::Admin, UserRole::Ceo] {
        let (_, eligibility) = roster.transfer_options(&role, SUBLEADER_BAR3ME).expect("options");
        assert!(eligibility.allowed);
        assert_eq!(eligibility.candidates.len(), 6);
        // Includes the member's current department.
        assert!(eligibility.permits(DEPT_BAR3ME));
    }
}

#[tokio::test]
async fn test_hidden_member_has_no_transfer_options() {
    let roster = demo_roster().await;
    let result = roster.transfer_options(&head("kashaf"), MEMBER_2ASHBAL);
    assert!(matches!(result, Err(AppError::NotFound)));
}

// ---------------------------------------------------------------------------
// Request → complete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_request_queues_without_moving_the_member() {
    let roster = demo_roster().await;
    let bar3me = head("bar3me");
    let id = roster
        .add_member(&bar3me, new_member("Yousef Khaled", MemberRole::Member, DEPT_BAR3ME))
        .await
        .expect("add member");

    let record = roster
        .request_transfer(&bar3me, id, DEPT_2ASHBAL)
        .await
        .expect("request");
    assert_eq!(record.status, TransferStatus::Pending);
    assert_eq!(record.from_department_id, DEPT_BAR3ME);
    assert_eq!(record.to_department_id, DEPT_2ASHBAL);
    assert_eq!(record.transferred_by, "bar3me");
    assert_eq!(record.member_name, "Yousef Khaled");

    assert_eq!(department_of(&roster, id), DEPT_BAR3ME);
    assert!(roster.snapshot().transfers.iter().any(|t| t.id == record.id && t.is_pending()));
}

#[tokio::test]
async fn test_request_to_an_off_ladder_department_is_rejected() {
    let roster = demo_roster().await;
    let bar3me = head("bar3me");
    let id = roster
        .add_member(&bar3me, new_member("Yousef Khaled", MemberRole::Member, DEPT_BAR3ME))
        .await
        .expect("add member");

    let err = roster.request_transfer(&bar3me, id, DEPT_KASHAF).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(roster.snapshot().transfers.len(), 3);
}

#[tokio::test]
async fn test_receiving_head_completes_and_member_moves() {
    let roster = demo_roster().await;
    let bar3me = head("bar3me");
    let id = roster
        .add_member(&bar3me, new_member("Yousef Khaled", MemberRole::Member, DEPT_BAR3ME))
        .await
        .expect("add member");
    roster.request_transfer(&bar3me, id, DEPT_2ASHBAL).await.expect("request");

    // The sending head cannot complete a transfer into another department.
    let err = roster.complete_transfer(&bar3me, id, DEPT_2ASHBAL).await.unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
    assert_eq!(department_of(&roster, id), DEPT_BAR3ME);

    let completed = roster
        .complete_transfer(&head("2ashbal"), id, DEPT_2ASHBAL)
        .await
        .expect("complete");
    assert_eq!(completed, 1);
    assert_eq!(department_of(&roster, id), DEPT_2ASHBAL);

    let snap = roster.snapshot();
    assert!(snap.visible_member(&bar3me, id).is_err());
    assert!(snap.visible_member(&head("2ashbal"), id).is_ok());
    assert!(
        snap.transfers
            .iter()
            .filter(|t| t.member_id == id)
            .all(|t| t.status == TransferStatus::Completed)
    );

    // The store agrees with the patched snapshot.
    roster.refresh().await;
    assert_eq!(department_of(&roster, id), DEPT_2ASHBAL);
}

#[tokio::test]
async fn test_completion_without_a_pending_record_changes_nothing() {
    let roster = demo_roster().await;
    let before = roster.snapshot();

    let completed = roster
        .complete_transfer(&UserRole::Admin, MEMBER_2ASHBAL, DEPT_GAWALA)
        .await
        .expect("complete");
    assert_eq!(completed, 0);

    let after = roster.snapshot();
    assert_eq!(after.members, before.members);
    assert_eq!(after.transfers, before.transfers);
}

#[tokio::test]
async fn test_completion_flips_every_matching_pending_record() {
    let roster = demo_roster().await;
    // Demo record #3 already queues Ahmed into kashaf; queue a second one.
    roster
        .request_transfer(&UserRole::Admin, MEMBER_2ASHBAL, DEPT_KASHAF)
        .await
        .expect("duplicate request allowed");

    let completed = roster
        .complete_transfer(&head("kashaf"), MEMBER_2ASHBAL, DEPT_KASHAF)
        .await
        .expect("complete");
    assert_eq!(completed, 2);
    assert_eq!(department_of(&roster, MEMBER_2ASHBAL), DEPT_KASHAF);
    assert!(
        roster
            .snapshot()
            .transfers
            .iter()
            .filter(|t| t.member_id == MEMBER_2ASHBAL)
            .all(|t| !t.is_pending())
    );
}

#[tokio::test]
async fn test_reject_policy_refuses_duplicate_pending_request() {
    let roster = demo_roster_with(DuplicatePolicy::Reject).await;
    let err = roster
        .request_transfer(&UserRole::Admin, MEMBER_2ASHBAL, DEPT_KASHAF)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(roster.snapshot().transfers.len(), 3);
}
