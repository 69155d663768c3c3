use sqlx::PgPool;
use std::collections::HashMap;

use super::types::{AttendanceStatus, Attendee, Meeting, NewMeeting};

const UNKNOWN_MEMBER: &str = "Unknown Member";

/// All meetings with their attendees. Attendee names come from the member
/// row; deleted members show as "Unknown Member".
pub async fn find_all(pool: &PgPool) -> Result<Vec<Meeting>, sqlx::Error> {
    let meetings: Vec<(i64, String, String)> =
        sqlx::query_as("SELECT id, title, date FROM meetings ORDER BY date DESC, id DESC")
            .fetch_all(pool)
            .await?;

    let rows: Vec<(i64, i64, String, Option<String>)> = sqlx::query_as(
        "SELECT a.meeting_id, a.member_id, a.status, m.full_name_en \
         FROM attendees a \
         LEFT JOIN members m ON m.id = a.member_id \
         ORDER BY a.meeting_id, a.position",
    )
    .fetch_all(pool)
    .await?;

    let mut by_meeting: HashMap<i64, Vec<Attendee>> = HashMap::new();
    for (meeting_id, member_id, status, name) in rows {
        let status = AttendanceStatus::parse(&status).unwrap_or_else(|| {
            log::warn!("Attendee {member_id} of meeting {meeting_id} has unknown status '{status}'");
            AttendanceStatus::Absent
        });
        by_meeting.entry(meeting_id).or_default().push(Attendee {
            member_id,
            name: name.unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
            status,
        });
    }

    Ok(meetings
        .into_iter()
        .map(|(id, title, date)| Meeting {
            id,
            title,
            date,
            attendees: by_meeting.remove(&id).unwrap_or_default(),
        })
        .collect())
}

async fn insert_attendees(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    meeting_id: i64,
    attendees: &[Attendee],
) -> Result<(), sqlx::Error> {
    for (position, a) in attendees.iter().enumerate() {
        sqlx::query(
            "INSERT INTO attendees (meeting_id, member_id, status, position) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(meeting_id)
        .bind(a.member_id)
        .bind(a.status.as_str())
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Insert a meeting and its attendee rows atomically; returns the new id.
pub async fn create(pool: &PgPool, meeting: &NewMeeting) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO meetings (title, date) VALUES ($1, $2) RETURNING id")
            .bind(&meeting.title)
            .bind(&meeting.date)
            .fetch_one(&mut *tx)
            .await?;
    insert_attendees(&mut tx, id, &meeting.attendees).await?;
    tx.commit().await?;
    Ok(id)
}

/// Update title/date and replace the attendee set wholesale.
pub async fn update(pool: &PgPool, meeting: &Meeting) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("UPDATE meetings SET title = $1, date = $2 WHERE id = $3")
        .bind(&meeting.title)
        .bind(&meeting.date)
        .bind(meeting.id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(0);
    }
    sqlx::query("DELETE FROM attendees WHERE meeting_id = $1")
        .bind(meeting.id)
        .execute(&mut *tx)
        .await?;
    insert_attendees(&mut tx, meeting.id, &meeting.attendees).await?;
    tx.commit().await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM attendees WHERE meeting_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.rows_affected())
}

pub async fn update_attendance(
    pool: &PgPool,
    meeting_id: i64,
    member_id: i64,
    status: AttendanceStatus,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE attendees SET status = $1 WHERE meeting_id = $2 AND member_id = $3")
            .bind(status.as_str())
            .bind(meeting_id)
            .bind(member_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}
