use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::accounts::UserRole;
use crate::auth::csrf;
use crate::auth::session::{require_role, set_flash};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::handlers::helpers::{flash_store_failure, redirect, today};
use crate::models::meeting::{Meeting, NewMeeting};
use crate::roster::{Roster, Snapshot};
use crate::templates_structs::{AttendeeChoice, MeetingFormTemplate, PageContext};

use super::forms::MeetingForm;

fn form_template(
    session: &Session,
    role: &UserRole,
    snap: &Snapshot,
    form: &MeetingForm,
    meeting_id: Option<i64>,
    errors: Vec<String>,
) -> MeetingFormTemplate {
    let (heading, form_action) = match meeting_id {
        Some(id) => ("Edit Meeting".to_string(), format!("/meetings/{id}")),
        None => ("Create Meeting".to_string(), "/meetings".to_string()),
    };
    let choices = snap
        .members_for(role)
        .into_iter()
        .map(|m| AttendeeChoice {
            checked: form.member_ids.contains(&m.id),
            department: snap.department_name(m.department_id),
            member_id: m.id,
            name: m.full_name_en,
        })
        .collect();
    MeetingFormTemplate {
        ctx: PageContext::build(session, role, "meetings"),
        heading,
        form_action,
        title: form.title.clone(),
        date: form.date.clone(),
        choices,
        errors,
        meeting_id,
    }
}

/// GET /meetings/new
pub async fn new_form(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let form = MeetingForm {
        date: today().format("%Y-%m-%d").to_string(),
        ..MeetingForm::default()
    };
    render(form_template(&session, &role, &roster.snapshot(), &form, None, Vec::new()))
}

/// POST /meetings
pub async fn create(
    roster: web::Data<Roster>,
    session: Session,
    fields: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let form = MeetingForm::from_fields(&fields);
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;

    let new = NewMeeting {
        title: form.title.clone(),
        date: form.date.clone(),
        attendees: form.attendees(None),
    };
    match roster.create_meeting(&role, new).await {
        Ok(_) => {
            set_flash(&session, "Meeting created");
            Ok(redirect("/meetings"))
        }
        Err(AppError::Validation(errors)) => {
            render(form_template(&session, &role, &roster.snapshot(), &form, None, errors))
        }
        Err(e) => flash_store_failure(&session, Err(e), "Failed to create meeting. Please try again.", "/meetings"),
    }
}

/// GET /meetings/{id}/edit
pub async fn edit_form(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let snap = roster.snapshot();
    let meeting = snap.visible_meeting(&role, path.into_inner())?;
    let form = MeetingForm::from_meeting(&meeting);
    render(form_template(&session, &role, &snap, &form, Some(meeting.id), Vec::new()))
}

/// POST /meetings/{id}
pub async fn update(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
    fields: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let form = MeetingForm::from_fields(&fields);
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;
    let id = path.into_inner();
    let existing = roster.snapshot().visible_meeting(&role, id)?;

    let updated = Meeting {
        id,
        title: form.title.clone(),
        date: form.date.clone(),
        attendees: form.attendees(Some(&existing)),
    };
    match roster.update_meeting(&role, updated).await {
        Ok(()) => {
            set_flash(&session, "Meeting updated");
            Ok(redirect("/meetings"))
        }
        Err(AppError::Validation(errors)) => {
            render(form_template(&session, &role, &roster.snapshot(), &form, Some(id), errors))
        }
        Err(e) => flash_store_failure(&session, Err(e), "Failed to update meeting. Please try again.", "/meetings"),
    }
}

/// POST /meetings/{id}/delete
pub async fn delete(
    roster: web::Data<Roster>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;

    let result = async {
        roster.delete_meeting(&role, path.into_inner()).await?;
        set_flash(&session, "Meeting deleted");
        Ok::<_, AppError>(redirect("/meetings"))
    }
    .await;
    flash_store_failure(&session, result, "Failed to delete meeting. Please try again.", "/meetings")
}
