use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Store, StoreError, demo};
use crate::models::department::{Department, RoleAssignment};
use crate::models::meeting::{AttendanceStatus, Meeting, NewMeeting};
use crate::models::member::{Member, NewMember};
use crate::models::transfer::{self, NewTransfer, TransferRecord};

#[derive(Default)]
struct Tables {
    departments: Vec<Department>,
    assignments: Vec<RoleAssignment>,
    members: Vec<Member>,
    meetings: Vec<Meeting>,
    transfers: Vec<TransferRecord>,
    next_member_id: i64,
    next_meeting_id: i64,
    next_transfer_id: i64,
}

impl Tables {
    fn resequence(&mut self) {
        self.next_member_id = self.members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.next_meeting_id = self.meetings.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.next_transfer_id = self.transfers.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    }
}

/// Process-local backend. Used when no database is configured and by tests;
/// `set_offline(true)` makes every call fail like an unreachable server.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Departments and role assignments only.
    pub fn new() -> Self {
        let mut tables = Tables {
            departments: demo::departments(),
            assignments: demo::role_assignments(),
            ..Tables::default()
        };
        tables.resequence();
        Self {
            tables: Mutex::new(tables),
            offline: AtomicBool::new(false),
        }
    }

    /// Reference data plus the demo members, meetings and transfers.
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        {
            let mut t = store.lock();
            t.members = demo::members();
            t.meetings = demo::meetings();
            t.transfers = demo::transfers();
            t.resequence();
        }
        store
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn online(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(self.lock())
    }
}

impl Store for MemoryStore {
    async fn fetch_departments(&self) -> Result<Vec<Department>, StoreError> {
        Ok(self.online()?.departments.clone())
    }

    async fn fetch_role_assignments(&self) -> Result<Vec<RoleAssignment>, StoreError> {
        Ok(self.online()?.assignments.clone())
    }

    async fn fetch_members(&self) -> Result<Vec<Member>, StoreError> {
        Ok(self.online()?.members.clone())
    }

    async fn fetch_meetings(&self) -> Result<Vec<Meeting>, StoreError> {
        let t = self.online()?;
        // Attendee names follow the member table, like the SQL join does.
        let meetings = t
            .meetings
            .iter()
            .cloned()
            .map(|mut m| {
                for a in &mut m.attendees {
                    a.name = t
                        .members
                        .iter()
                        .find(|mem| mem.id == a.member_id)
                        .map(|mem| mem.full_name_en.clone())
                        .unwrap_or_else(|| "Unknown Member".to_string());
                }
                m
            })
            .collect();
        Ok(meetings)
    }

    async fn fetch_transfers(&self) -> Result<Vec<TransferRecord>, StoreError> {
        Ok(self.online()?.transfers.clone())
    }

    async fn add_member(&self, member: &NewMember) -> Result<i64, StoreError> {
        let mut t = self.online()?;
        let id = t.next_member_id;
        t.next_member_id += 1;
        t.members.push(member.clone().with_id(id));
        Ok(id)
    }

    async fn update_member(&self, member: &Member) -> Result<(), StoreError> {
        let mut t = self.online()?;
        let slot = t
            .members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or(StoreError::NotFound)?;
        *slot = member.clone();
        Ok(())
    }

    async fn delete_member(&self, id: i64) -> Result<(), StoreError> {
        let mut t = self.online()?;
        let before = t.members.len();
        t.members.retain(|m| m.id != id);
        if t.members.len() == before {
            return Err(StoreError::NotFound);
        }
        for meeting in &mut t.meetings {
            meeting.attendees.retain(|a| a.member_id != id);
        }
        Ok(())
    }

    async fn add_meeting(&self, meeting: &NewMeeting) -> Result<i64, StoreError> {
        let mut t = self.online()?;
        let id = t.next_meeting_id;
        t.next_meeting_id += 1;
        t.meetings.push(Meeting {
            id,
            title: meeting.title.clone(),
            date: meeting.date.clone(),
            attendees: meeting.attendees.clone(),
        });
        Ok(id)
    }

    async fn update_meeting(&self, meeting: &Meeting) -> Result<(), StoreError> {
        let mut t = self.online()?;
        let slot = t
            .meetings
            .iter_mut()
            .find(|m| m.id == meeting.id)
            .ok_or(StoreError::NotFound)?;
        *slot = meeting.clone();
        Ok(())
    }

    async fn delete_meeting(&self, id: i64) -> Result<(), StoreError> {
        let mut t = self.online()?;
        let before = t.meetings.len();
        t.meetings.retain(|m| m.id != id);
        if t.meetings.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn update_attendance(
        &self,
        meeting_id: i64,
        member_id: i64,
        status: AttendanceStatus,
    ) -> Result<(), StoreError> {
        let mut t = self.online()?;
        let attendee = t
            .meetings
            .iter_mut()
            .find(|m| m.id == meeting_id)
            .and_then(|m| m.attendees.iter_mut().find(|a| a.member_id == member_id))
            .ok_or(StoreError::NotFound)?;
        attendee.status = status;
        Ok(())
    }

    async fn add_transfer(&self, new: &NewTransfer) -> Result<i64, StoreError> {
        let mut t = self.online()?;
        let id = t.next_transfer_id;
        t.next_transfer_id += 1;
        t.transfers.push(new.clone().into_record(id));
        Ok(id)
    }

    async fn complete_transfer(&self, member_id: i64, department_id: i64) -> Result<u64, StoreError> {
        let mut t = self.online()?;
        let Tables { transfers, members, .. } = &mut *t;
        let flipped = transfer::machine::complete_in_place(transfers, members, member_id, department_id);
        Ok(flipped.len() as u64)
    }
}
