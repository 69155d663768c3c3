// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::auth::accounts::UserRole;
use crate::auth::csrf;
use crate::auth::session::take_flash;

pub const APP_NAME: &str = "Rollcall";

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.role_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub role_id: String,
    pub role_name: String,
    pub is_privileged: bool,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    /// Sidebar entry to highlight.
    pub active: &'static str,
}

impl PageContext {
    pub fn build(session: &Session, role: &UserRole, active: &'static str) -> Self {
        Self {
            role_id: role.id().to_string(),
            role_name: role.display_name().to_string(),
            is_privileged: role.is_privileged(),
            flash: take_flash(session),
            app_name: APP_NAME.to_string(),
            csrf_token: csrf::get_or_create_token(session),
            active,
        }
    }
}

/// One `<option>` of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self { value: value.into(), label: label.into(), selected }
    }
}

mod api;
mod common;
mod dashboard;
mod meeting;
mod member;
mod transfer;

pub use self::api::{ApiAttendanceResponse, ApiCompleteRequest, ApiCompleteResponse, ApiErrorResponse, ApiTransferRequest};
pub use self::common::LoginTemplate;
pub use self::dashboard::DashboardTemplate;
pub use self::meeting::{
    AttendanceTemplate, AttendeeChoice, AttendeeRow, MeetingCard, MeetingFormTemplate,
    MeetingsListTemplate, OverviewRow, OverviewTemplate,
};
pub use self::member::{
    MemberFormTemplate, MemberImportTemplate, MemberListItem, MembersListTemplate, MissingInfoRow,
    MissingInfoTemplate, TransferFormTemplate,
};
pub use self::transfer::{DepartmentPending, TransferListItem, TransferReviewTemplate};
