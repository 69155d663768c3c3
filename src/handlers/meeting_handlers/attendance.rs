use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::csrf;
use crate::auth::session::require_role;
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::helpers::{flash_store_failure, redirect};
use crate::models::member::{self, is_leadership_role};
use crate::roster::Roster;
use crate::templates_structs::{AttendanceTemplate, AttendeeRow, PageContext};

/// GET /meetings/{id}/attendance — leaders listed apart from members.
pub async fn view(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "meetings");
    let snap = roster.snapshot();
    let meeting = snap.visible_meeting(&role, path.into_inner())?;
    let visible = snap.members_for(&role);

    let mut leaders = Vec::new();
    let mut members = Vec::new();
    for a in &meeting.attendees {
        let Some(m) = member::find(&visible, a.member_id) else { continue };
        let row = AttendeeRow {
            member_id: a.member_id,
            name: a.name.clone(),
            status: a.status.as_str().to_string(),
            status_class: a.status.as_str().to_lowercase(),
        };
        if is_leadership_role(m.role) {
            leaders.push(row);
        } else {
            members.push(row);
        }
    }

    render(AttendanceTemplate {
        ctx,
        meeting_id: meeting.id,
        title: meeting.title,
        date: meeting.date,
        leaders,
        members,
    })
}

/// POST /meetings/{id}/attendance/{member_id} — advance to the next status.
pub async fn advance(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<(i64, i64)>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;
    let (meeting_id, member_id) = path.into_inner();
    let back = format!("/meetings/{meeting_id}/attendance");

    let result = async {
        roster.advance_attendance(&role, meeting_id, member_id).await?;
        Ok::<_, AppError>(redirect(&back))
    }
    .await;
    flash_store_failure(&session, result, "Failed to update attendance. Please try again.", &back)
}
