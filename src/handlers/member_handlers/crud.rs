use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::accounts::UserRole;
use crate::auth::csrf;
use crate::auth::session::{require_role, set_flash};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::helpers::{department_options, flash_store_failure, redirect, role_options, status_options, today};
use crate::roster::{Roster, Snapshot};
use crate::templates_structs::{MemberFormTemplate, PageContext};

use super::forms::MemberForm;

fn form_template(
    session: &Session,
    role: &UserRole,
    snap: &Snapshot,
    form: MemberForm,
    member_id: Option<i64>,
    errors: Vec<String>,
) -> MemberFormTemplate {
    let (heading, form_action) = match member_id {
        Some(id) => ("Edit Member".to_string(), format!("/members/{id}")),
        None => ("Add Member".to_string(), "/members".to_string()),
    };
    MemberFormTemplate {
        ctx: PageContext::build(session, role, "members"),
        heading,
        form_action,
        role_options: role_options(form.role.trim(), None),
        status_options: status_options(form.status.trim(), None),
        department_options: department_options(&snap.departments_for(role), form.department(), None),
        form,
        errors,
        member_id,
    }
}

/// GET /members/new
pub async fn new_form(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let snap = roster.snapshot();
    let preset = snap.scope_for(&role).department_id();
    let form = MemberForm::blank(preset, &today().format("%Y-%m-%d").to_string());
    render(form_template(&session, &role, &snap, form, None, Vec::new()))
}

/// POST /members
pub async fn create(
    roster: web::Data<Roster>,
    session: Session,
    form: web::Form<MemberForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;
    let form = form.into_inner();

    let new = match form.to_new_member() {
        Ok(new) => new,
        Err(errors) => {
            let snap = roster.snapshot();
            return render(form_template(&session, &role, &snap, form, None, errors));
        }
    };

    let result = async {
        roster.add_member(&role, new).await?;
        set_flash(&session, "Member added");
        Ok::<_, AppError>(redirect("/members"))
    }
    .await;
    flash_store_failure(&session, result, "Failed to add member. Please try again.", "/members")
}

/// GET /members/{id}/edit
pub async fn edit_form(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let snap = roster.snapshot();
    let member = snap.visible_member(&role, path.into_inner())?;
    let form = MemberForm::from_member(member);
    render(form_template(&session, &role, &snap, form, Some(member.id), Vec::new()))
}

/// POST /members/{id}
pub async fn update(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<MemberForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;
    let id = path.into_inner();
    let form = form.into_inner();

    let updated = match form.to_member_update() {
        Ok(new) => new.with_id(id),
        Err(errors) => {
            let snap = roster.snapshot();
            snap.visible_member(&role, id)?;
            return render(form_template(&session, &role, &snap, form, Some(id), errors));
        }
    };

    let result = async {
        roster.update_member(&role, updated).await?;
        set_flash(&session, "Member updated");
        Ok::<_, AppError>(redirect("/members"))
    }
    .await;
    flash_store_failure(&session, result, "Failed to update member. Please try again.", "/members")
}

/// POST /members/{id}/delete — also removes the member from every meeting.
pub async fn delete(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;

    let result = async {
        roster.delete_member(&role, path.into_inner()).await?;
        set_flash(&session, "Member deleted");
        Ok::<_, AppError>(redirect("/members"))
    }
    .await;
    flash_store_failure(&session, result, "Failed to delete member. Please try again.", "/members")
}
