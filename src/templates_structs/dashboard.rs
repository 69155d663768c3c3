use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    /// "All departments" for privileged roles.
    pub scope_label: String,
    pub member_count: usize,
    pub meeting_count: usize,
    pub pending_transfer_count: usize,
    pub missing_info_count: usize,
}
