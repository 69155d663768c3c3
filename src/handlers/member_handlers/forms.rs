use serde::Deserialize;

use crate::auth::validate::{validate_date, validate_optional, validate_optional_email, validate_required};
use crate::models::member::{Member, MemberRole, MemberStatus, NewMember};

/// Add/edit member form. Adding requires every detail except email; on edit
/// blanks are replaced by placeholders before the member is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberForm {
    #[serde(default)]
    pub first_name_ar: String,
    #[serde(default)]
    pub second_name_ar: String,
    #[serde(default)]
    pub third_name_ar: String,
    #[serde(default)]
    pub fourth_name_ar: String,
    #[serde(default)]
    pub full_name_en: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl MemberForm {
    /// Blank form preset to the given department.
    pub fn blank(department_id: Option<i64>, today: &str) -> Self {
        Self {
            role: MemberRole::Member.as_str().to_string(),
            status: MemberStatus::Active.as_str().to_string(),
            department_id: department_id.map(|d| d.to_string()).unwrap_or_default(),
            join_date: today.to_string(),
            ..Self::default()
        }
    }

    pub fn from_member(m: &Member) -> Self {
        Self {
            first_name_ar: m.first_name_ar.clone(),
            second_name_ar: m.second_name_ar.clone(),
            third_name_ar: m.third_name_ar.clone(),
            fourth_name_ar: m.fourth_name_ar.clone(),
            full_name_en: m.full_name_en.clone(),
            birth_date: m.birth_date.clone(),
            national_id: m.national_id.clone(),
            location: m.location.clone(),
            phone_number: m.phone_number.clone(),
            email: m.email.clone().unwrap_or_default(),
            role: m.role.as_str().to_string(),
            department_id: m.department_id.to_string(),
            status: m.status.as_str().to_string(),
            join_date: m.join_date.clone(),
            csrf_token: String::new(),
        }
    }

    pub fn department(&self) -> Option<i64> {
        self.department_id.trim().parse().ok()
    }

    /// Validate an add. Checked before any store call.
    pub fn to_new_member(&self) -> Result<NewMember, Vec<String>> {
        self.convert(true)
    }

    /// Validate an edit; blank details fall back to placeholders later.
    pub fn to_member_update(&self) -> Result<NewMember, Vec<String>> {
        self.convert(false)
    }

    fn convert(&self, details_required: bool) -> Result<NewMember, Vec<String>> {
        let text = |value: &str, name: &str, max_len: usize| {
            if details_required {
                validate_required(value, name, max_len)
            } else {
                validate_optional(value, name, max_len)
            }
        };
        let mut errors: Vec<String> = [
            text(&self.first_name_ar, "First name (AR)", 100),
            text(&self.second_name_ar, "Second name (AR)", 100),
            text(&self.third_name_ar, "Third name (AR)", 100),
            text(&self.fourth_name_ar, "Fourth name (AR)", 100),
            text(&self.full_name_en, "Full name (English)", 200),
            text(&self.national_id, "National ID", 50),
            text(&self.location, "Location", 200),
            text(&self.phone_number, "Phone number", 50),
            validate_optional_email(&self.email),
        ]
        .into_iter()
        .flatten()
        .collect();

        for (value, name) in [(&self.birth_date, "Birth date"), (&self.join_date, "Join date")] {
            if details_required || !value.trim().is_empty() {
                errors.extend(validate_date(value, name));
            }
        }

        let role = MemberRole::parse(self.role.trim());
        if role.is_none() {
            errors.push("Please choose a role".to_string());
        }
        let status = MemberStatus::parse(self.status.trim());
        if status.is_none() {
            errors.push("Please choose a status".to_string());
        }
        let department_id = self.department();
        if department_id.is_none() {
            errors.push("Please choose a department".to_string());
        }

        match (role, status, department_id) {
            (Some(role), Some(status), Some(department_id)) if errors.is_empty() => Ok(NewMember {
                first_name_ar: self.first_name_ar.trim().to_string(),
                second_name_ar: self.second_name_ar.trim().to_string(),
                third_name_ar: self.third_name_ar.trim().to_string(),
                fourth_name_ar: self.fourth_name_ar.trim().to_string(),
                full_name_en: self.full_name_en.trim().to_string(),
                birth_date: self.birth_date.trim().to_string(),
                national_id: self.national_id.trim().to_string(),
                location: self.location.trim().to_string(),
                phone_number: self.phone_number.trim().to_string(),
                email: Some(self.email.trim().to_string()).filter(|e| !e.is_empty()),
                role,
                department_id,
                status,
                join_date: self.join_date.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}
