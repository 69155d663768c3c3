use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::require_role;
use crate::errors::{AppError, render};
use crate::models::meeting::{AttendanceStatus, build_overview};
use crate::roster::Roster;
use crate::templates_structs::{OverviewRow, OverviewTemplate, PageContext};

fn cell(status: Option<AttendanceStatus>) -> String {
    match status {
        Some(AttendanceStatus::Present) => "P",
        Some(AttendanceStatus::Excused) => "E",
        Some(AttendanceStatus::Absent) => "A",
        None => "",
    }
    .to_string()
}

/// GET /overview — attendance matrix for the visible members.
pub async fn index(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "overview");
    let snap = roster.snapshot();

    let overview = build_overview(&snap.members_for(&role), &snap.meetings);
    let columns = overview
        .meetings
        .iter()
        .map(|m| (m.title.clone(), m.date.clone()))
        .collect();
    let rows = overview
        .rows
        .into_iter()
        .map(|r| OverviewRow {
            department: snap.department_name(r.member.department_id),
            name: r.member.full_name_en,
            cells: r.cells.into_iter().map(cell).collect(),
            present: r.stats.present,
            excused: r.stats.excused,
            absent: r.stats.absent,
            total: r.stats.total,
            percentage: r.stats.percentage,
        })
        .collect();

    render(OverviewTemplate { ctx, columns, rows })
}
