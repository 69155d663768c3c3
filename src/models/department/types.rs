use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Links a department-head account to the department it administers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RoleAssignment {
    pub role: String,
    pub department_id: i64,
}

/// Look up a department by id.
pub fn find<'a>(departments: &'a [Department], id: i64) -> Option<&'a Department> {
    departments.iter().find(|d| d.id == id)
}

/// Department name for display; `"Unknown"` when the id is not in the roster.
pub fn name_of(departments: &[Department], id: i64) -> String {
    find(departments, id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}
