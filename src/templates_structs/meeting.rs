use askama::Template;

use super::{PageContext, SelectOption};

pub struct MeetingCard {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub present: u32,
    pub excused: u32,
    pub absent: u32,
    pub total: usize,
}

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingsListTemplate {
    pub ctx: PageContext,
    pub meetings: Vec<MeetingCard>,
    pub month_options: Vec<SelectOption>,
}

/// Checkbox for one member on the meeting form.
pub struct AttendeeChoice {
    pub member_id: i64,
    pub name: String,
    pub department: String,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "meetings/form.html")]
pub struct MeetingFormTemplate {
    pub ctx: PageContext,
    pub heading: String,
    pub form_action: String,
    pub title: String,
    pub date: String,
    pub choices: Vec<AttendeeChoice>,
    pub errors: Vec<String>,
    pub meeting_id: Option<i64>,
}

pub struct AttendeeRow {
    pub member_id: i64,
    pub name: String,
    pub status: String,
    /// CSS modifier, lowercase status.
    pub status_class: String,
}

#[derive(Template)]
#[template(path = "meetings/attendance.html")]
pub struct AttendanceTemplate {
    pub ctx: PageContext,
    pub meeting_id: i64,
    pub title: String,
    pub date: String,
    pub leaders: Vec<AttendeeRow>,
    pub members: Vec<AttendeeRow>,
}

pub struct OverviewRow {
    pub name: String,
    pub department: String,
    /// One short label per meeting column; empty when not invited.
    pub cells: Vec<String>,
    pub present: u32,
    pub excused: u32,
    pub absent: u32,
    pub total: u32,
    pub percentage: u32,
}

#[derive(Template)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    pub ctx: PageContext,
    /// `(title, date)` per column, newest first.
    pub columns: Vec<(String, String)>,
    pub rows: Vec<OverviewRow>,
}
