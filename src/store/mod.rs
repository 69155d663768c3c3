//! The persistence boundary.
//!
//! Every write reports success or failure through `Result`; callers must
//! check it before touching their in-memory state.

pub mod demo;
pub mod memory;
pub mod postgres;

use std::fmt;

use crate::models::department::{Department, RoleAssignment};
use crate::models::meeting::{AttendanceStatus, Meeting, NewMeeting};
use crate::models::member::{Member, NewMember};
use crate::models::transfer::{NewTransfer, TransferRecord};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    Db(sqlx::Error),
    /// The write matched no row.
    NotFound,
    /// Backend refused the call without a database error.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Db(e) => write!(f, "Database error: {e}"),
            StoreError::NotFound => write!(f, "Record not found"),
            StoreError::Unavailable(msg) => write!(f, "Backend unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Db(e)
    }
}

/// Rows-affected of zero means the target did not exist.
pub(crate) fn expect_rows(affected: u64) -> Result<(), StoreError> {
    if affected == 0 { Err(StoreError::NotFound) } else { Ok(()) }
}

#[allow(async_fn_in_trait)]
pub trait Store {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError>;
    async fn fetch_role_assignments(&self) -> Result<Vec<RoleAssignment>, StoreError>;
    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError>;
    async fn fetch_meetings(&self) -> Result<Vec<Meeting>, StoreError>;
    async fn fetch_transfers(&self) -> Result<Vec<TransferRecord>, StoreError>;

    async fn add_member(&self, member: &NewMember) -> Result<i64, StoreError>;
    async fn update_member(&self, member: &Member) -> Result<(), StoreError>;
    /// Also removes the member from every meeting.
    async fn delete_member(&self, id: i64) -> Result<(), StoreError>;

    async fn add_meeting(&self, meeting: &NewMeeting) -> Result<i64, StoreError>;
    async fn update_meeting(&self, meeting: &Meeting) -> Result<(), StoreError>;
    async fn delete_meeting(&self, id: i64) -> Result<(), StoreError>;
    async fn update_attendance(
        &self,
        meeting_id: i64,
        member_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), StoreError>;

    async fn add_transfer(&self, transfer: &NewTransfer) -> Result<i64, StoreError>;
    /// Completes every pending record for `(member_id, department_id)` and
    /// moves the member. Returns how many records were completed; zero means
    /// nothing changed.
    async fn complete_transfer(&self, member_id: i64, department_id: i64) -> Result<u64, StoreError>;
}

/// Runtime choice of backend.
pub enum Backend {
    Postgres(PgStore),
    Memory(MemoryStore),
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Postgres(_) => "postgres",
            Backend::Memory(_) => "memory",
        }
    }
}

impl Store for Backend {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError> {
        match self {
            Backend::Postgres(s) => s.fetch_departments().await,
            Backend::Memory(s) => s.fetch_departments().await,
        }
    }

    async fn fetch_role_assignments(&self) -> Result<Vec<RoleAssignment>, StoreError> {
        match self {
            Backend::Postgres(s) => s.fetch_role_assignments().await,
            Backend::Memory(s) => s.fetch_role_assignments().await,
        }
    }

    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError> {
        match self {
            Backend::Postgres(s) => s.fetch_members().await,
            Backend::Memory(s) => s.fetch_members().await,
        }
    }

    async fn fetch_meetings(&self) -> Result<Vec<Meeting>, StoreError> {
        match self {
            Backend::Postgres(s) => s.fetch_meetings().await,
            Backend::Memory(s) => s.fetch_meetings().await,
        }
    }

    async fn fetch_transfers(&self) -> Result<Vec<TransferRecord>, StoreError> {
        match self {
            Backend::Postgres(s) => s.fetch_transfers().await,
            Backend::Memory(s) => s.fetch_transfers().await,
        }
    }

    async fn add_member(&self, member: &NewMember) -> Result<i64, StoreError> {
        match self {
            Backend::Postgres(s) => s.add_member(member).await,
            Backend::Memory(s) => s.add_member(member).await,
        }
    }

    async fn update_member(&self, member: &Member) -> Result<(), StoreError> {
        match self {
            Backend::Postgres(s) => s.update_member(member).await,
            Backend::Memory(s) => s.update_member(member).await,
        }
    }

    async fn delete_member(&self, id: i64) -> Result<(), StoreError> {
        match self {
            Backend::Postgres(s) => s.delete_member(id).await,
            Backend::Memory(s) => s.delete_member(id).await,
        }
    }

    async fn add_meeting(&self, meeting: &NewMeeting) -> Result<i64, StoreError> {
        match self {
            Backend::Postgres(s) => s.add_meeting(meeting).await,
            Backend::Memory(s) => s.add_meeting(meeting).await,
        }
    }

    async fn update_meeting(&self, meeting: &Meeting) -> Result<(), StoreError> {
        match self {
            Backend::Postgres(s) => s.update_meeting(meeting).await,
            Backend::Memory(s) => s.update_meeting(meeting).await,
        }
    }

    async fn delete_meeting(&self, id: i64) -> Result<(), StoreError> {
        match self {
            Backend::Postgres(s) => s.delete_meeting(id).await,
            Backend::Memory(s) => s.delete_meeting(id).await,
        }
    }

    async fn update_attendance(
        &self,
        meeting_id: i64,
        member_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), StoreError> {
        match self {
            Backend::Postgres(s) => s.update_attendance(meeting_id, member_id, status).await,
            Backend::Memory(s) => s.update_attendance(meeting_id, member_id, status).await,
        }
    }

    async fn add_transfer(&self, transfer: &NewTransfer) -> Result<i64, StoreError> {
        match self {
            Backend::Postgres(s) => s.add_transfer(transfer).await,
            Backend::Memory(s) => s.add_transfer(transfer).await,
        }
    }

    async fn complete_transfer(&self, member_id: i64, department_id: i64) -> Result<u64, StoreError> {
        match self {
            Backend::Postgres(s) => s.complete_transfer(member_id, department_id).await,
            Backend::Memory(s) => s.complete_transfer(member_id, department_id).await,
        }
    }
}
