use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::require_role;
use crate::errors::AppError;
use crate::models::meeting::filter_by_month;
use crate::roster::Roster;
use crate::templates_structs::ApiAttendanceResponse;

use super::json_error;

#[derive(Deserialize)]
pub struct MeetingsQuery {
    #[serde(default)]
    pub month: String,
}

/// GET /api/v1/meetings?month=YYYY-MM
pub async fn list(
    roster: web::Data<Roster>,
    session: Session,
    query: web::Query<MeetingsQuery>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let meetings = filter_by_month(roster.snapshot().meetings_for(&role), query.month.trim());
    Ok(HttpResponse::Ok().json(meetings))
}

/// POST /api/v1/meetings/{id}/attendance/{member_id} — advance one step.
pub async fn advance_attendance(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let (meeting_id, member_id) = path.into_inner();
    match roster.advance_attendance(&role, meeting_id, member_id).await {
        Ok(status) => Ok(HttpResponse::Ok().json(ApiAttendanceResponse { meeting_id, member_id, status })),
        Err(e) => json_error(e),
    }
}
