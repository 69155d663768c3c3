use askama::Template;

use crate::models::transfer::review::TransferSummary;
use super::{PageContext, SelectOption};

pub struct TransferListItem {
    pub id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub from_department: String,
    pub to_department: String,
    pub to_department_id: i64,
    pub transfer_date: String,
    pub transferred_by: String,
    pub status: String,
    pub pending: bool,
    pub can_complete: bool,
}

pub struct DepartmentPending {
    pub name: String,
    pub records: Vec<TransferListItem>,
}

#[derive(Template)]
#[template(path = "transfers/review.html")]
pub struct TransferReviewTemplate {
    pub ctx: PageContext,
    pub summary: TransferSummary,
    pub records: Vec<TransferListItem>,
    pub pending_by_department: Vec<DepartmentPending>,
    pub department_options: Vec<SelectOption>,
    pub search: String,
    pub sort: String,
    pub dir: String,
    /// Direction a click on the active sort header switches to.
    pub next_dir: String,
}
