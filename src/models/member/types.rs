use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed role set a member can hold inside a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    Leader,
    #[serde(rename = "Sub-Leader")]
    SubLeader,
    Gawala,
    Rover,
    Member,
}

impl MemberRole {
    pub const ALL: [MemberRole; 5] = [
        MemberRole::Leader,
        MemberRole::SubLeader,
        MemberRole::Gawala,
        MemberRole::Rover,
        MemberRole::Member,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Leader => "Leader",
            MemberRole::SubLeader => "Sub-Leader",
            MemberRole::Gawala => "Gawala",
            MemberRole::Rover => "Rover",
            MemberRole::Member => "Member",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn is_leadership(&self) -> bool {
        is_leadership_role(*self)
    }
}

/// Leader, Sub-Leader and Gawala are leadership roles. Every leader-ish check
/// in the application goes through here.
pub fn is_leadership_role(role: MemberRole) -> bool {
    matches!(
        role,
        MemberRole::Leader | MemberRole::SubLeader | MemberRole::Gawala
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Pending,
    Inactive,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 3] = [
        MemberStatus::Active,
        MemberStatus::Pending,
        MemberStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Pending => "Pending",
            MemberStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub first_name_ar: String,
    pub second_name_ar: String,
    pub third_name_ar: String,
    pub fourth_name_ar: String,
    pub full_name_en: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub national_id: String,
    pub location: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub role: MemberRole,
    pub department_id: i64,
    pub status: MemberStatus,
    /// `YYYY-MM-DD`
    pub join_date: String,
}

/// A member that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name_ar: String,
    pub second_name_ar: String,
    pub third_name_ar: String,
    pub fourth_name_ar: String,
    pub full_name_en: String,
    pub birth_date: String,
    pub national_id: String,
    pub location: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub role: MemberRole,
    pub department_id: i64,
    pub status: MemberStatus,
    pub join_date: String,
}

impl NewMember {
    pub fn with_id(self, id: i64) -> Member {
        Member {
            id,
            first_name_ar: self.first_name_ar,
            second_name_ar: self.second_name_ar,
            third_name_ar: self.third_name_ar,
            fourth_name_ar: self.fourth_name_ar,
            full_name_en: self.full_name_en,
            birth_date: self.birth_date,
            national_id: self.national_id,
            location: self.location,
            phone_number: self.phone_number,
            email: self.email,
            role: self.role,
            department_id: self.department_id,
            status: self.status,
            join_date: self.join_date,
        }
    }
}

impl From<Member> for NewMember {
    fn from(m: Member) -> Self {
        NewMember {
            first_name_ar: m.first_name_ar,
            second_name_ar: m.second_name_ar,
            third_name_ar: m.third_name_ar,
            fourth_name_ar: m.fourth_name_ar,
            full_name_en: m.full_name_en,
            birth_date: m.birth_date,
            national_id: m.national_id,
            location: m.location,
            phone_number: m.phone_number,
            email: m.email,
            role: m.role,
            department_id: m.department_id,
            status: m.status,
            join_date: m.join_date,
        }
    }
}

/// Raw `members` row. Role and status are stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct MemberRow {
    pub id: i64,
    pub first_name_ar: String,
    pub second_name_ar: String,
    pub third_name_ar: String,
    pub fourth_name_ar: String,
    pub full_name_en: String,
    pub birth_date: String,
    pub national_id: String,
    pub location: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub role: String,
    pub department_id: i64,
    pub status: String,
    pub join_date: String,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        let role = MemberRole::parse(&row.role).unwrap_or_else(|| {
            log::warn!("Member {} has unknown role '{}', treating as Member", row.id, row.role);
            MemberRole::Member
        });
        let status = MemberStatus::parse(&row.status).unwrap_or_else(|| {
            log::warn!("Member {} has unknown status '{}', treating as Pending", row.id, row.status);
            MemberStatus::Pending
        });
        Member {
            id: row.id,
            first_name_ar: row.first_name_ar,
            second_name_ar: row.second_name_ar,
            third_name_ar: row.third_name_ar,
            fourth_name_ar: row.fourth_name_ar,
            full_name_en: row.full_name_en,
            birth_date: row.birth_date,
            national_id: row.national_id,
            location: row.location,
            phone_number: row.phone_number,
            email: row.email,
            role,
            department_id: row.department_id,
            status,
            join_date: row.join_date,
        }
    }
}

/// Find a member by id in a loaded roster.
pub fn find<'a>(members: &'a [Member], id: i64) -> Option<&'a Member> {
    members.iter().find(|m| m.id == id)
}
