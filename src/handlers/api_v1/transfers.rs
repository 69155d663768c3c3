use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::require_role;
use crate::errors::AppError;
use crate::roster::Roster;
use crate::templates_structs::{ApiCompleteRequest, ApiCompleteResponse, ApiTransferRequest};

use super::json_error;

/// GET /api/v1/transfers
pub async fn list(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    Ok(HttpResponse::Ok().json(roster.snapshot().transfers_for(&role)))
}

/// POST /api/v1/transfers — queue a request; 201 with the pending record.
pub async fn request(
    roster: web::Data<Roster>,
    session: Session,
    body: web::Json<ApiTransferRequest>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    match roster.request_transfer(&role, body.member_id, body.to_department_id).await {
        Ok(record) => Ok(HttpResponse::Created().json(record)),
        Err(e) => json_error(e),
    }
}

/// POST /api/v1/transfers/complete — `completed: 0` when nothing was pending.
pub async fn complete(
    roster: web::Data<Roster>,
    session: Session,
    body: web::Json<ApiCompleteRequest>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    match roster.complete_transfer(&role, body.member_id, body.department_id).await {
        Ok(completed) => Ok(HttpResponse::Ok().json(ApiCompleteResponse { completed })),
        Err(e) => json_error(e),
    }
}
