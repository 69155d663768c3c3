//! Attendance status cycling and meeting edits through the roster.

mod common;

use rollcall::auth::accounts::UserRole;
use rollcall::errors::AppError;
use rollcall::models::meeting::{AttendanceStatus, Attendee, NewMeeting};
use common::*;

fn status_of(roster: &rollcall::roster::Roster, meeting_id: i64, member_id: i64) -> AttendanceStatus {
    roster
        .snapshot()
        .meetings
        .iter()
        .find(|m| m.id == meeting_id)
        .and_then(|m| m.attendee(member_id))
        .map(|a| a.status)
        .expect("attendee loaded")
}

fn attendee(member_id: i64) -> Attendee {
    Attendee {
        member_id,
        name: String::new(),
        status: AttendanceStatus::Present,
    }
}

#[tokio::test]
async fn test_three_advances_return_to_the_start() {
    let roster = demo_roster().await;
    let admin = UserRole::Admin;
    assert_eq!(status_of(&roster, 1, LEADER_2ASHBAL), AttendanceStatus::Present);

    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(
            roster
                .advance_attendance(&admin, 1, LEADER_2ASHBAL)
                .await
                .expect("advance"),
        );
    }
    assert_eq!(
        seen,
        vec![AttendanceStatus::Excused, AttendanceStatus::Absent, AttendanceStatus::Present]
    );
    assert_eq!(status_of(&roster, 1, LEADER_2ASHBAL), AttendanceStatus::Present);
}

#[tokio::test]
async fn test_advance_is_persisted() {
    let roster = demo_roster().await;
    roster
        .advance_attendance(&head("2ashbal"), 1, MEMBER_2ASHBAL)
        .await
        .expect("advance");
    assert_eq!(status_of(&roster, 1, MEMBER_2ASHBAL), AttendanceStatus::Present);

    roster.refresh().await;
    assert_eq!(status_of(&roster, 1, MEMBER_2ASHBAL), AttendanceStatus::Present);
}

#[tokio::test]
async fn test_head_cannot_mark_a_member_of_another_department() {
    let roster = demo_roster().await;
    // Meeting 1 is visible to bar3me, but Ahmed is not.
    let err = roster
        .advance_attendance(&head("bar3me"), 1, MEMBER_2ASHBAL)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(status_of(&roster, 1, MEMBER_2ASHBAL), AttendanceStatus::Absent);
}

#[tokio::test]
async fn test_non_attendee_cannot_be_marked() {
    let roster = demo_roster().await;
    let err = roster
        .advance_attendance(&UserRole::Admin, 2, MEMBER_2ASHBAL)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_meeting_needs_title_date_and_attendees() {
    let roster = demo_roster().await;
    let err = roster
        .create_meeting(
            &UserRole::Admin,
            NewMeeting { title: " ".into(), date: "15/06/2023".into(), attendees: Vec::new() },
        )
        .await
        .unwrap_err();
    match err {
        AppError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation errors, got {other:?}"),
    }
    assert_eq!(roster.snapshot().meetings.len(), 2);
}

#[tokio::test]
async fn test_created_meeting_takes_names_from_the_roster() {
    let roster = demo_roster().await;
    let id = roster
        .create_meeting(
            &head("2ashbal"),
            NewMeeting {
                title: "Camp briefing".into(),
                date: "2023-07-01".into(),
                attendees: vec![attendee(LEADER_2ASHBAL), attendee(MEMBER_2ASHBAL)],
            },
        )
        .await
        .expect("create");

    let snap = roster.snapshot();
    let meeting = snap.meetings.iter().find(|m| m.id == id).expect("meeting loaded");
    assert_eq!(meeting.attendees.len(), 2);
    assert_eq!(meeting.attendees[0].name, "Mohammed Ali Hussein Al-Salem");
    assert!(meeting.attendees.iter().all(|a| a.status == AttendanceStatus::Present));
}

#[tokio::test]
async fn test_head_cannot_invite_hidden_members() {
    let roster = demo_roster().await;
    let err = roster
        .create_meeting(
            &head("bar3me"),
            NewMeeting {
                title: "Cross-department".into(),
                date: "2023-07-01".into(),
                attendees: vec![attendee(SUBLEADER_BAR3ME), attendee(MEMBER_2ASHBAL)],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_head_edit_keeps_attendees_they_cannot_see() {
    let roster = demo_roster().await;
    let bar3me = head("bar3me");
    let mut meeting = roster.snapshot().visible_meeting(&bar3me, 1).expect("visible");
    meeting.title = "Renamed".into();
    meeting.attendees = vec![attendee(SUBLEADER_BAR3ME)];

    roster.update_meeting(&bar3me, meeting).await.expect("update");

    let snap = roster.snapshot();
    let updated = snap.meetings.iter().find(|m| m.id == 1).expect("meeting loaded");
    assert_eq!(updated.title, "Renamed");
    let mut ids: Vec<i64> = updated.attendees.iter().map(|a| a.member_id).collect();
    ids.sort();
    assert_eq!(ids, vec![LEADER_2ASHBAL, MEMBER_2ASHBAL, SUBLEADER_BAR3ME]);
}

#[tokio::test]
async fn test_deleting_a_member_drops_their_attendance() {
    let roster = demo_roster().await;
    roster
        .delete_member(&UserRole::Admin, SUBLEADER_BAR3ME)
        .await
        .expect("delete");

    let snap = roster.snapshot();
    assert!(snap.meetings.iter().all(|m| !m.has_attendee(SUBLEADER_BAR3ME)));
    assert!(snap.meetings_for(&head("bar3me")).is_empty());
}
