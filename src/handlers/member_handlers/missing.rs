use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::require_role;
use crate::errors::{AppError, render};
use crate::models::member::members_with_missing_info;
use crate::roster::Roster;
use crate::templates_structs::{MissingInfoRow, MissingInfoTemplate, PageContext};

/// GET /members/missing — visible members still carrying placeholder values.
pub async fn list(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "missing");
    let snap = roster.snapshot();

    let rows = members_with_missing_info(&snap.members_for(&role))
        .into_iter()
        .map(|row| MissingInfoRow {
            id: row.member.id,
            department: snap.department_name(row.member.department_id),
            full_name_en: row.member.full_name_en,
            missing_fields: row.missing_fields.join(", "),
        })
        .collect();

    render(MissingInfoTemplate { ctx, rows })
}
