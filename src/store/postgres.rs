use sqlx::PgPool;

use super::{Store, StoreError, expect_rows};
use crate::models::department::{self, Department, RoleAssignment};
use crate::models::meeting::{self, AttendanceStatus, Meeting, NewMeeting};
use crate::models::member::{self, Member, NewMember};
use crate::models::transfer::{self, NewTransfer, TransferRecord};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Store for PgStore {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError> {
        Ok(department::find_all(&self.pool).await?)
    }

    async fn fetch_role_assignments(&self) -> Result<Vec<RoleAssignment>, StoreError> {
        Ok(department::find_role_assignments(&self.pool).await?)
    }

    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError> {
        Ok(member::find_all(&self.pool).await?)
    }

    async fn fetch_meetings(&self) -> Result<Vec<Meeting>, StoreError> {
        Ok(meeting::find_all(&self.pool).await?)
    }

    async fn fetch_transfers(&self) -> Result<Vec<TransferRecord>, StoreError> {
        Ok(transfer::find_all(&self.pool).await?)
    }

    async fn add_member(&self, m: &NewMember) -> Result<i64, StoreError> {
        Ok(member::create(&self.pool, m).await?)
    }

    async fn update_member(&self, m: &Member) -> Result<(), StoreError> {
        expect_rows(member::update(&self.pool, m).await?)
    }

    async fn delete_member(&self, id: i64) -> Result<(), StoreError> {
        expect_rows(member::delete(&self.pool, id).await?)
    }

    async fn add_meeting(&self, m: &NewMeeting) -> Result<i64, StoreError> {
        Ok(meeting::create(&self.pool, m).await?)
    }

    async fn update_meeting(&self, m: &Meeting) -> Result<(), StoreError> {
        expect_rows(meeting::update(&self.pool, m).await?)
    }

    async fn delete_meeting(&self, id: i64) -> Result<(), StoreError> {
        expect_rows(meeting::delete(&self.pool, id).await?)
    }

    async fn update_attendance(
        &self,
        meeting_id: i64,
        member_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), StoreError> {
        expect_rows(meeting::update_attendance(&self.pool, meeting_id, member_id, status).await?)
    }

    async fn add_transfer(&self, t: &NewTransfer) -> Result<i64, StoreError> {
        Ok(transfer::create(&self.pool, t).await?)
    }

    async fn complete_transfer(&self, member_id: i64, department_id: i64) -> Result<u64, StoreError> {
        Ok(transfer::complete(&self.pool, member_id, department_id).await?)
    }
}
