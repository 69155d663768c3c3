use std::collections::HashMap;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::meeting::{self, Attendee, NewMeeting};
use crate::models::member::{self, NewMember};
use crate::models::transfer::{self, NewTransfer};
use crate::store::demo;

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Insert the demo roster when the members table is empty. Demo ids are
/// remapped to whatever the database assigns.
pub async fn seed_demo(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        log::info!("Members present, skipping demo seed");
        return Ok(());
    }

    let mut ids: HashMap<i64, i64> = HashMap::new();
    for m in demo::members() {
        let demo_id = m.id;
        let id = member::create(pool, &NewMember::from(m)).await?;
        ids.insert(demo_id, id);
    }

    for mt in demo::meetings() {
        let attendees: Vec<Attendee> = mt
            .attendees
            .into_iter()
            .filter_map(|a| {
                ids.get(&a.member_id).map(|&member_id| Attendee { member_id, ..a })
            })
            .collect();
        meeting::create(pool, &NewMeeting { title: mt.title, date: mt.date, attendees }).await?;
    }

    for t in demo::transfers() {
        let Some(&member_id) = ids.get(&t.member_id) else { continue };
        let completed = !t.is_pending();
        let new = NewTransfer {
            member_id,
            member_name: t.member_name,
            from_department_id: t.from_department_id,
            to_department_id: t.to_department_id,
            transfer_date: t.transfer_date,
            transferred_by: t.transferred_by,
        };
        let id = transfer::create(pool, &new).await?;
        if completed {
            sqlx::query("UPDATE transfer_records SET status = 'completed' WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        }
    }

    log::info!("Seeded demo roster ({} members)", ids.len());
    Ok(())
}
