use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::require_role;
use crate::auth::visibility::Scope;
use crate::errors::{AppError, render};
use crate::models::member::members_with_missing_info;
use crate::roster::Roster;
use crate::templates_structs::{DashboardTemplate, PageContext};

pub async fn index(roster: web::Data<Roster>, session: Session) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "dashboard");
    let snap = roster.snapshot();

    let members = snap.members_for(&role);
    let scope_label = match snap.scope_for(&role) {
        Scope::All => "All departments".to_string(),
        Scope::Department(id) => snap.department_name(id),
        Scope::Nothing => "No department assigned".to_string(),
    };

    let tmpl = DashboardTemplate {
        ctx,
        scope_label,
        member_count: members.len(),
        meeting_count: snap.meetings_for(&role).len(),
        pending_transfer_count: snap.transfers_for(&role).iter().filter(|t| t.is_pending()).count(),
        missing_info_count: members_with_missing_info(&members).len(),
    };
    render(tmpl)
}
