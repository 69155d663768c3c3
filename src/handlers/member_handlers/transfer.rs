use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{require_role, set_flash};
use crate::errors::{AppError, render};
use crate::handlers::helpers::{flash_store_failure, member_item, redirect};
use crate::roster::Roster;
use crate::templates_structs::{PageContext, SelectOption, TransferFormTemplate};

#[derive(Deserialize)]
pub struct TransferForm {
    #[serde(default)]
    pub to_department_id: String,
    pub csrf_token: String,
}

async fn form_page(
    roster: &Roster,
    session: &Session,
    member_id: i64,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(session)?;
    let snap = roster.snapshot();
    let (member, eligibility) = roster.transfer_options(&role, member_id)?;

    let options = eligibility
        .candidates
        .iter()
        .map(|d| {
            let label = if d.id == member.department_id {
                format!("{} (current)", d.name)
            } else {
                d.name.clone()
            };
            SelectOption::new(d.id.to_string(), label, eligibility.candidates.len() == 1)
        })
        .collect();

    let tmpl = TransferFormTemplate {
        ctx: PageContext::build(session, &role, "members"),
        member: member_item(&snap, &role, roster.ladder(), &member),
        allowed: eligibility.allowed,
        options,
        errors,
    };
    render(tmpl)
}

/// GET /members/{id}/transfer
pub async fn form(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    form_page(&roster, &session, path.into_inner(), Vec::new()).await
}

/// POST /members/{id}/transfer — queue a transfer request.
pub async fn submit(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<TransferForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;
    let member_id = path.into_inner();

    let Ok(to_department_id) = form.to_department_id.trim().parse::<i64>() else {
        return form_page(&roster, &session, member_id, vec!["Please choose a department".to_string()]).await;
    };

    match roster.request_transfer(&role, member_id, to_department_id).await {
        Ok(record) => {
            let snap = roster.snapshot();
            set_flash(
                &session,
                &format!(
                    "Transfer of {} to {} requested",
                    record.member_name,
                    snap.department_name(record.to_department_id)
                ),
            );
            Ok(redirect("/members"))
        }
        Err(AppError::Validation(errors)) => form_page(&roster, &session, member_id, errors).await,
        Err(e) => flash_store_failure(
            &session,
            Err(e),
            "Failed to request transfer. Please try again.",
            "/members",
        ),
    }
}
