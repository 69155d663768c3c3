use sqlx::PgPool;

use super::types::{NewTransfer, TransferRecord, TransferRow};

pub async fn find_all(pool: &PgPool) -> Result<Vec<TransferRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TransferRow>(
        "SELECT id, member_id, member_name, from_department_id, to_department_id, \
                transfer_date, transferred_by, status \
         FROM transfer_records ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(TransferRecord::from).collect())
}

/// Insert a pending record; returns the new id.
pub async fn create(pool: &PgPool, t: &NewTransfer) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO transfer_records \
            (member_id, member_name, from_department_id, to_department_id, transfer_date, \
             transferred_by, status) \
         VALUES ($1, $2, $3, $4, $5, $6, 'pending') RETURNING id",
    )
    .bind(t.member_id)
    .bind(&t.member_name)
    .bind(t.from_department_id)
    .bind(t.to_department_id)
    .bind(&t.transfer_date)
    .bind(&t.transferred_by)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Mark the pending records for `(member_id, department_id)` completed and move
/// the member, in one transaction. Returns the number of records completed;
/// when it is zero nothing was changed.
pub async fn complete(pool: &PgPool, member_id: i64, department_id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let flipped = sqlx::query(
        "UPDATE transfer_records SET status = 'completed' \
         WHERE member_id = $1 AND to_department_id = $2 AND status = 'pending'",
    )
    .bind(member_id)
    .bind(department_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if flipped == 0 {
        tx.rollback().await?;
        return Ok(0);
    }

    sqlx::query("UPDATE members SET department_id = $1 WHERE id = $2")
        .bind(department_id)
        .bind(member_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(flipped)
}
