use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::auth::session::require_role;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::member::MemberFilter;
use crate::roster::Roster;

use super::json_error;

/// GET /api/v1/members — visible members, same filters as the HTML list.
pub async fn list(
    roster: web::Data<Roster>,
    session: Session,
    query: web::Query<MemberFilter>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let members = query.apply(roster.snapshot().members_for(&role));
    Ok(HttpResponse::Ok().json(members))
}

#[derive(Serialize)]
struct TransferOptions {
    member_id: i64,
    allowed: bool,
    candidates: Vec<Department>,
}

/// GET /api/v1/members/{id}/transfer-options
pub async fn transfer_options(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    match roster.transfer_options(&role, path.into_inner()) {
        Ok((member, eligibility)) => Ok(HttpResponse::Ok().json(TransferOptions {
            member_id: member.id,
            allowed: eligibility.allowed,
            candidates: eligibility.candidates,
        })),
        Err(e) => json_error(e),
    }
}
