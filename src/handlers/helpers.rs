use actix_session::Session;
use actix_web::HttpResponse;
use chrono::NaiveDate;

use crate::auth::accounts::UserRole;
use crate::auth::session::set_flash;
use crate::auth::transfer_policy;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::member::{self, Member, MemberRole, MemberStatus};
use crate::models::transfer::TransferLadder;
use crate::roster::Snapshot;
use crate::templates_structs::{MemberListItem, SelectOption};

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A failed store call becomes a flash message and a redirect; local state
/// is untouched. Every other error propagates.
pub fn flash_store_failure(
    session: &Session,
    result: Result<HttpResponse, AppError>,
    message: &str,
    location: &str,
) -> Result<HttpResponse, AppError> {
    match result {
        Err(AppError::Store(e)) => {
            log::error!("{message} ({e})");
            set_flash(session, message);
            Ok(redirect(location))
        }
        other => other,
    }
}

pub fn member_item(snap: &Snapshot, role: &UserRole, ladder: &TransferLadder, m: &Member) -> MemberListItem {
    let eligibility = transfer_policy::can_request_transfer(role, m, &snap.departments, ladder);
    MemberListItem {
        id: m.id,
        full_name_en: m.full_name_en.clone(),
        full_name_ar: [&m.first_name_ar, &m.second_name_ar, &m.third_name_ar, &m.fourth_name_ar]
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        role: m.role.as_str().to_string(),
        status: m.status.as_str().to_string(),
        department: snap.department_name(m.department_id),
        age: member::calculate_age(&m.birth_date, today())
            .map(|a| a.to_string())
            .unwrap_or_default(),
        phone_number: m.phone_number.clone(),
        email: m.email.clone().unwrap_or_default(),
        national_id: m.national_id.clone(),
        join_date: m.join_date.clone(),
        is_leader: m.role.is_leadership(),
        can_transfer: eligibility.allowed,
    }
}

pub fn role_options(selected: &str, any_label: Option<&str>) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = any_label
        .map(|label| SelectOption::new("", label, selected.is_empty()))
        .into_iter()
        .collect();
    options.extend(
        MemberRole::ALL
            .iter()
            .map(|r| SelectOption::new(r.as_str(), r.as_str(), r.as_str() == selected)),
    );
    options
}

pub fn status_options(selected: &str, any_label: Option<&str>) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = any_label
        .map(|label| SelectOption::new("", label, selected.is_empty()))
        .into_iter()
        .collect();
    options.extend(
        MemberStatus::ALL
            .iter()
            .map(|s| SelectOption::new(s.as_str(), s.as_str(), s.as_str() == selected)),
    );
    options
}

pub fn department_options(departments: &[Department], selected: Option<i64>, any_label: Option<&str>) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = any_label
        .map(|label| SelectOption::new("", label, selected.is_none()))
        .into_iter()
        .collect();
    options.extend(
        departments
            .iter()
            .map(|d| SelectOption::new(d.id.to_string(), d.name.clone(), Some(d.id) == selected)),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_option_is_selected_only_without_a_choice() {
        let opts = role_options("", Some("All roles"));
        assert_eq!(opts.len(), MemberRole::ALL.len() + 1);
        assert!(opts[0].selected);

        let opts = role_options("Rover", Some("All roles"));
        assert!(!opts[0].selected);
        assert_eq!(opts.iter().filter(|o| o.selected).count(), 1);
        assert!(opts.iter().any(|o| o.value == "Rover" && o.selected));
    }

    #[test]
    fn department_options_mark_selection() {
        let departments = vec![
            Department { id: 1, name: "2ashbal".into() },
            Department { id: 2, name: "bar3me".into() },
        ];
        let opts = department_options(&departments, Some(2), None);
        assert_eq!(opts.len(), 2);
        assert!(opts[1].selected && !opts[0].selected);
    }
}
