use serde::Deserialize;

use super::types::{Member, MemberRole, MemberStatus};

/// Query-string filter for the members list. Empty strings mean "any".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberFilter {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub department: String,
}

impl MemberFilter {
    pub fn department_id(&self) -> Option<i64> {
        self.department.trim().parse().ok()
    }

    pub fn matches(&self, m: &Member) -> bool {
        let needle = self.q.trim().to_lowercase();
        if !needle.is_empty() && !m.full_name_en.to_lowercase().contains(&needle) {
            return false;
        }
        if let Some(role) = MemberRole::parse(self.role.trim()) {
            if m.role != role {
                return false;
            }
        }
        if let Some(status) = MemberStatus::parse(self.status.trim()) {
            if m.status != status {
                return false;
            }
        }
        if let Some(dept) = self.department_id() {
            if m.department_id != dept {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, members: Vec<Member>) -> Vec<Member> {
        members.into_iter().filter(|m| self.matches(m)).collect()
    }
}
