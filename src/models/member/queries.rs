use sqlx::PgPool;

use super::types::{Member, MemberRow, NewMember};

const SELECT_MEMBER: &str = "\
    SELECT id, first_name_ar, second_name_ar, third_name_ar, fourth_name_ar, \
           full_name_en, birth_date, national_id, location, phone_number, email, \
           role, department_id, status, join_date \
    FROM members";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
    let sql = format!("{SELECT_MEMBER} ORDER BY id ASC");
    let rows = sqlx::query_as::<_, MemberRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Member::from).collect())
}

/// Insert a member; returns the new id. Callers backfill defaults first.
pub async fn create(pool: &PgPool, m: &NewMember) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO members \
            (first_name_ar, second_name_ar, third_name_ar, fourth_name_ar, full_name_en, \
             birth_date, national_id, location, phone_number, email, role, department_id, \
             status, join_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         RETURNING id",
    )
    .bind(&m.first_name_ar)
    .bind(&m.second_name_ar)
    .bind(&m.third_name_ar)
    .bind(&m.fourth_name_ar)
    .bind(&m.full_name_en)
    .bind(&m.birth_date)
    .bind(&m.national_id)
    .bind(&m.location)
    .bind(&m.phone_number)
    .bind(&m.email)
    .bind(m.role.as_str())
    .bind(m.department_id)
    .bind(m.status.as_str())
    .bind(&m.join_date)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Overwrite every column of an existing member. Returns rows affected.
pub async fn update(pool: &PgPool, m: &Member) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE members SET \
            first_name_ar = $1, second_name_ar = $2, third_name_ar = $3, fourth_name_ar = $4, \
            full_name_en = $5, birth_date = $6, national_id = $7, location = $8, \
            phone_number = $9, email = $10, role = $11, department_id = $12, status = $13, \
            join_date = $14 \
         WHERE id = $15",
    )
    .bind(&m.first_name_ar)
    .bind(&m.second_name_ar)
    .bind(&m.third_name_ar)
    .bind(&m.fourth_name_ar)
    .bind(&m.full_name_en)
    .bind(&m.birth_date)
    .bind(&m.national_id)
    .bind(&m.location)
    .bind(&m.phone_number)
    .bind(&m.email)
    .bind(m.role.as_str())
    .bind(m.department_id)
    .bind(m.status.as_str())
    .bind(&m.join_date)
    .bind(m.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Delete a member and its attendance rows in one transaction.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM attendees WHERE member_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.rows_affected())
}
