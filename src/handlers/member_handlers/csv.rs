use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{require_role, set_flash};
use crate::errors::{AppError, render};
use crate::handlers::helpers::{redirect, today};
use crate::models::data_manager::{MEMBER_CSV_HEADER, members_to_csv};
use crate::roster::Roster;
use crate::templates_structs::{MemberImportTemplate, PageContext};

#[derive(Deserialize)]
pub struct ImportForm {
    #[serde(default)]
    pub csv: String,
    pub csrf_token: String,
}

/// GET /members/export.csv — visible members only.
pub async fn export(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let snap = roster.snapshot();
    let body = members_to_csv(&snap.members_for(&role), &snap.departments);
    let filename = format!("members_{}.csv", today().format("%Y-%m-%d"));
    log::info!("{} exported members", role.id());

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(("Content-Disposition", format!("attachment; filename=\"{filename}\"")))
        .body(body))
}

fn import_page(session: &Session, role: &crate::auth::accounts::UserRole, errors: Vec<String>) -> Result<HttpResponse, AppError> {
    render(MemberImportTemplate {
        ctx: PageContext::build(session, role, "members"),
        header: MEMBER_CSV_HEADER.join(","),
        errors,
    })
}

/// GET /members/import
pub async fn import_form(session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    import_page(&session, &role, Vec::new())
}

/// POST /members/import — the file's text arrives in the `csv` field.
pub async fn import(
    roster: web::Data<Roster>,
    session: Session,
    form: web::Form<ImportForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;

    match roster.import_members(&role, &form.csv).await {
        Ok(report) => {
            set_flash(&session, &report.message());
            Ok(redirect("/members"))
        }
        Err(AppError::Import(e)) => import_page(&session, &role, vec![e.to_string()]),
        Err(e) => Err(e),
    }
}
