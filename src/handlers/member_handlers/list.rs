use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::require_role;
use crate::errors::{AppError, render};
use crate::handlers::helpers::{department_options, member_item, role_options, status_options};
use crate::models::member::MemberFilter;
use crate::roster::Roster;
use crate::templates_structs::{MembersListTemplate, PageContext};

/// GET /members?q=&role=&status=&department=
pub async fn list(
    roster: web::Data<Roster>,
    session: Session,
    query: web::Query<MemberFilter>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "members");
    let snap = roster.snapshot();
    let filter = query.into_inner();

    let members: Vec<_> = filter
        .apply(snap.members_for(&role))
        .iter()
        .map(|m| member_item(&snap, &role, roster.ladder(), m))
        .collect();

    // The department filter only means something to accounts that see more
    // than one department.
    let department_options = if role.is_privileged() {
        department_options(&snap.departments, filter.department_id(), Some("All departments"))
    } else {
        Vec::new()
    };

    let tmpl = MembersListTemplate {
        ctx,
        total: members.len(),
        members,
        role_options: role_options(filter.role.trim(), Some("All roles")),
        status_options: status_options(filter.status.trim(), Some("All statuses")),
        department_options,
        q: filter.q,
    };
    render(tmpl)
}
