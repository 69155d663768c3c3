use serde::Serialize;

use super::defaults::{
    NATIONAL_ID_PLACEHOLDER_PREFIX, SENTINEL_BIRTH_DATE, UNNAMED_MEMBER, UNSPECIFIED,
};
use super::types::Member;

/// A member still carrying at least one placeholder value.
#[derive(Debug, Clone, Serialize)]
pub struct MemberWithMissingInfo {
    pub member: Member,
    pub missing_fields: Vec<&'static str>,
}

/// Labels of the fields that still hold a placeholder, in form order.
pub fn missing_fields(m: &Member) -> Vec<&'static str> {
    let checks = [
        (m.first_name_ar == UNSPECIFIED, "First Name (Arabic)"),
        (m.second_name_ar == UNSPECIFIED, "Second Name (Arabic)"),
        (m.third_name_ar == UNSPECIFIED, "Third Name (Arabic)"),
        (m.fourth_name_ar == UNSPECIFIED, "Fourth Name (Arabic)"),
        (m.full_name_en == UNNAMED_MEMBER, "Full Name (English)"),
        (m.birth_date == SENTINEL_BIRTH_DATE, "Birth Date"),
        (m.national_id.starts_with(NATIONAL_ID_PLACEHOLDER_PREFIX), "National ID"),
        (m.location == UNSPECIFIED, "Location"),
        (m.phone_number == UNSPECIFIED, "Phone Number"),
    ];
    checks
        .into_iter()
        .filter_map(|(missing, label)| missing.then_some(label))
        .collect()
}

pub fn members_with_missing_info(members: &[Member]) -> Vec<MemberWithMissingInfo> {
    members
        .iter()
        .filter_map(|m| {
            let missing = missing_fields(m);
            (!missing.is_empty()).then(|| MemberWithMissingInfo {
                member: m.clone(),
                missing_fields: missing,
            })
        })
        .collect()
}
