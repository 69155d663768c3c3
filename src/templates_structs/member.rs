use askama::Template;

use crate::handlers::member_handlers::forms::MemberForm;
use super::{PageContext, SelectOption};

/// A member as shown in lists.
pub struct MemberListItem {
    pub id: i64,
    pub full_name_en: String,
    pub full_name_ar: String,
    pub role: String,
    pub status: String,
    pub department: String,
    /// Empty when the birth date is unusable.
    pub age: String,
    pub phone_number: String,
    pub email: String,
    pub national_id: String,
    pub join_date: String,
    pub is_leader: bool,
    pub can_transfer: bool,
}

#[derive(Template)]
#[template(path = "members/list.html")]
pub struct MembersListTemplate {
    pub ctx: PageContext,
    pub members: Vec<MemberListItem>,
    pub q: String,
    pub role_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub department_options: Vec<SelectOption>,
    pub total: usize,
}

#[derive(Template)]
#[template(path = "members/form.html")]
pub struct MemberFormTemplate {
    pub ctx: PageContext,
    pub heading: String,
    pub form_action: String,
    pub form: MemberForm,
    pub role_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub department_options: Vec<SelectOption>,
    pub errors: Vec<String>,
    /// Set when editing; enables the delete button.
    pub member_id: Option<i64>,
}

pub struct MissingInfoRow {
    pub id: i64,
    pub full_name_en: String,
    pub department: String,
    pub missing_fields: String,
}

#[derive(Template)]
#[template(path = "members/missing.html")]
pub struct MissingInfoTemplate {
    pub ctx: PageContext,
    pub rows: Vec<MissingInfoRow>,
}

#[derive(Template)]
#[template(path = "members/transfer.html")]
pub struct TransferFormTemplate {
    pub ctx: PageContext,
    pub member: MemberListItem,
    pub allowed: bool,
    pub options: Vec<SelectOption>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "members/import.html")]
pub struct MemberImportTemplate {
    pub ctx: PageContext,
    pub header: String,
    pub errors: Vec<String>,
}
