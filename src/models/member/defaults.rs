use chrono::NaiveDate;

use super::types::{Member, NewMember};

/// Arabic for "unspecified".
pub const UNSPECIFIED: &str = "غير محدد";
pub const UNNAMED_MEMBER: &str = "Unnamed Member";
pub const SENTINEL_BIRTH_DATE: &str = "1900-01-01";
pub const NATIONAL_ID_PLACEHOLDER_PREFIX: &str = "NID-";

/// `NID-<millis>`, unique enough for one form submission.
pub fn placeholder_national_id(now_millis: i64) -> String {
    format!("{NATIONAL_ID_PLACEHOLDER_PREFIX}{now_millis}")
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Backfill every empty field of a member before it is written.
pub fn apply_defaults(member: NewMember, today: NaiveDate, now_millis: i64) -> NewMember {
    let national_id = if member.national_id.trim().is_empty() {
        placeholder_national_id(now_millis)
    } else {
        member.national_id
    };
    NewMember {
        first_name_ar: or_default(member.first_name_ar, UNSPECIFIED),
        second_name_ar: or_default(member.second_name_ar, UNSPECIFIED),
        third_name_ar: or_default(member.third_name_ar, UNSPECIFIED),
        fourth_name_ar: or_default(member.fourth_name_ar, UNSPECIFIED),
        full_name_en: or_default(member.full_name_en, UNNAMED_MEMBER),
        birth_date: or_default(member.birth_date, SENTINEL_BIRTH_DATE),
        national_id,
        location: or_default(member.location, UNSPECIFIED),
        phone_number: or_default(member.phone_number, UNSPECIFIED),
        email: member.email.filter(|e| !e.trim().is_empty()),
        role: member.role,
        department_id: member.department_id,
        status: member.status,
        join_date: or_default(member.join_date, &today.format("%Y-%m-%d").to_string()),
    }
}

/// Same backfill for an existing member; the id is preserved.
pub fn apply_defaults_existing(member: Member, today: NaiveDate, now_millis: i64) -> Member {
    let id = member.id;
    apply_defaults(NewMember::from(member), today, now_millis).with_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::{MemberRole, MemberStatus};

    fn blank() -> NewMember {
        NewMember {
            first_name_ar: String::new(),
            second_name_ar: " ".into(),
            third_name_ar: String::new(),
            fourth_name_ar: String::new(),
            full_name_en: String::new(),
            birth_date: String::new(),
            national_id: String::new(),
            location: String::new(),
            phone_number: String::new(),
            email: Some(String::new()),
            role: MemberRole::Member,
            department_id: 1,
            status: MemberStatus::Pending,
            join_date: String::new(),
        }
    }

    #[test]
    fn blank_member_gets_every_sentinel() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let m = apply_defaults(blank(), today, 1700000000000);
        assert_eq!(m.first_name_ar, UNSPECIFIED);
        assert_eq!(m.second_name_ar, UNSPECIFIED);
        assert_eq!(m.full_name_en, UNNAMED_MEMBER);
        assert_eq!(m.birth_date, SENTINEL_BIRTH_DATE);
        assert_eq!(m.national_id, "NID-1700000000000");
        assert_eq!(m.location, UNSPECIFIED);
        assert_eq!(m.phone_number, UNSPECIFIED);
        assert_eq!(m.email, None);
        assert_eq!(m.join_date, "2024-03-09");
    }

    #[test]
    fn provided_values_are_kept() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut input = blank();
        input.full_name_en = "Sara Khalid".into();
        input.national_id = "2990101".into();
        input.email = Some("sara@example.com".into());
        let m = apply_defaults(input, today, 1);
        assert_eq!(m.full_name_en, "Sara Khalid");
        assert_eq!(m.national_id, "2990101");
        assert_eq!(m.email.as_deref(), Some("sara@example.com"));
    }
}
