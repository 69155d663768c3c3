use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{require_role, set_flash};
use crate::auth::transfer_policy::can_complete_transfer;
use crate::errors::{AppError, render};
use crate::handlers::helpers::{department_options, flash_store_failure, redirect};
use crate::models::transfer::TransferRecord;
use crate::models::transfer::review::{SortDir, TransferSortKey, pending_into, search_and_sort, summarize};
use crate::roster::Roster;
use crate::templates_structs::{DepartmentPending, PageContext, TransferListItem, TransferReviewTemplate};

#[derive(Deserialize)]
pub struct ReviewQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub sort: TransferSortKey,
    #[serde(default)]
    pub dir: SortDir,
    /// Narrow the pending section to one department.
    #[serde(default)]
    pub department: String,
}

#[derive(Deserialize)]
pub struct CompleteForm {
    pub member_id: i64,
    pub department_id: i64,
    pub csrf_token: String,
}

/// GET /transfers
pub async fn review(
    roster: web::Data<Roster>,
    session: Session,
    query: web::Query<ReviewQuery>,
) -> Result<HttpResponse, AppError> {
    let role = require_role(&session)?;
    let ctx = PageContext::build(&session, &role, "transfers");
    let snap = roster.snapshot();
    let scope = snap.scope_for(&role);
    let query = query.into_inner();

    let visible = snap.transfers_for(&role);
    let item = |r: &TransferRecord| TransferListItem {
        id: r.id,
        member_id: r.member_id,
        member_name: r.member_name.clone(),
        from_department: snap.department_name(r.from_department_id),
        to_department: snap.department_name(r.to_department_id),
        to_department_id: r.to_department_id,
        transfer_date: r.transfer_date.clone(),
        transferred_by: r.transferred_by.clone(),
        status: r.status.label().to_string(),
        pending: r.is_pending(),
        can_complete: r.is_pending() && can_complete_transfer(&role, scope, r.to_department_id),
    };

    let departments = snap.departments_for(&role);
    let selected: Option<i64> = query.department.trim().parse().ok();
    let pending_by_department = departments
        .iter()
        .filter(|d| selected.is_none_or(|id| id == d.id))
        .map(|d| DepartmentPending {
            name: d.name.clone(),
            records: pending_into(&visible, d.id).iter().map(item).collect(),
        })
        .filter(|p| !p.records.is_empty())
        .collect();

    let summary = summarize(&visible);
    let records = search_and_sort(visible, &query.q, query.sort, query.dir)
        .iter()
        .map(item)
        .collect();

    let tmpl = TransferReviewTemplate {
        ctx,
        summary,
        records,
        pending_by_department,
        department_options: department_options(&departments, selected, Some("All departments")),
        search: query.q,
        sort: match query.sort {
            TransferSortKey::Date => "date".to_string(),
            TransferSortKey::Name => "name".to_string(),
        },
        dir: query.dir.as_str().to_string(),
        next_dir: query.dir.toggled().as_str().to_string(),
    };
    render(tmpl)
}

/// POST /transfers/complete — the only place a member's department changes
/// through the transfer flow.
pub async fn complete(
    roster: web::Data<Roster>,
    session: Session,
    form: web::Form<CompleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let role = require_role(&session)?;

    let result = async {
        let completed = roster.complete_transfer(&role, form.member_id, form.department_id).await?;
        if completed == 0 {
            set_flash(&session, "No pending transfer found for that member and department");
        } else {
            let snap = roster.snapshot();
            set_flash(
                &session,
                &format!("Member moved to {}", snap.department_name(form.department_id)),
            );
        }
        Ok::<_, AppError>(redirect("/transfers"))
    }
    .await;
    flash_store_failure(&session, result, "Failed to complete transfer. Please try again.", "/transfers")
}
