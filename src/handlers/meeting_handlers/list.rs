use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::require_role;
use crate::errors::{AppError, render};
use crate::models::meeting::{AttendanceStatus, available_months, filter_by_month};
use crate::roster::Roster;
use crate::templates_structs::{MeetingCard, MeetingsListTemplate, PageContext, SelectOption};

#[derive(Deserialize)]
pub struct MonthQuery {
    #[serde(default)]
    pub month: String,
}

/// GET /meetings?month=YYYY-MM
pub async fn list(
    roster: web::Data<Roster>,
    session: Session,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "meetings");
    let snap = roster.snapshot();
    let month = query.month.trim();

    let visible = snap.meetings_for(&role);
    let mut month_options = vec![SelectOption::new("all", "All months", month.is_empty() || month == "all")];
    month_options.extend(
        available_months(&visible)
            .into_iter()
            .map(|m| SelectOption::new(m.clone(), m.clone(), m == month)),
    );

    let mut meetings: Vec<MeetingCard> = filter_by_month(visible, month)
        .into_iter()
        .map(|m| {
            let count = |s: AttendanceStatus| m.attendees.iter().filter(|a| a.status == s).count() as u32;
            MeetingCard {
                present: count(AttendanceStatus::Present),
                excused: count(AttendanceStatus::Excused),
                absent: count(AttendanceStatus::Absent),
                total: m.attendees.len(),
                id: m.id,
                title: m.title,
                date: m.date,
            }
        })
        .collect();
    meetings.sort_by(|a, b| b.date.cmp(&a.date));

    render(MeetingsListTemplate { ctx, meetings, month_options })
}
