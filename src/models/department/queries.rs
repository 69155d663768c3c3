use sqlx::PgPool;

use super::types::{Department, RoleAssignment};

/// All departments ordered by id.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id ASC")
        .fetch_all(pool)
        .await
}

pub async fn find_role_assignments(pool: &PgPool) -> Result<Vec<RoleAssignment>, sqlx::Error> {
    sqlx::query_as::<_, RoleAssignment>(
        "SELECT role, department_id FROM role_assignments ORDER BY department_id ASC",
    )
    .fetch_all(pool)
    .await
}
