//! Application state.
//!
//! `Roster` owns the in-memory copy of departments, members, meetings and
//! transfer records, and is the only way to change them. Every command checks
//! the actor's rights, calls the store, and only on success touches the
//! snapshot: either by refetching everything or, for attendance and transfer
//! completion, by patching the loaded copy.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use serde_json::json;

use crate::audit;
use crate::auth::accounts::UserRole;
use crate::auth::transfer_policy::{self, TransferEligibility};
use crate::auth::validate::{validate_date, validate_required};
use crate::auth::visibility::{self, Scope};
use crate::errors::AppError;
use crate::models::data_manager::{self, ImportReport};
use crate::models::department::{Department, RoleAssignment};
use crate::models::meeting::{AttendanceStatus, Attendee, Meeting, NewMeeting};
use crate::models::member::{self, Member, NewMember, defaults};
use crate::models::transfer::{self, DuplicatePolicy, TransferLadder, TransferRecord};
use crate::store::{Backend, Store};

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub departments: Vec<Department>,
    pub assignments: Vec<RoleAssignment>,
    pub members: Vec<Member>,
    pub meetings: Vec<Meeting>,
    pub transfers: Vec<TransferRecord>,
}

impl Snapshot {
    pub fn scope_for(&self, role: &UserRole) -> Scope {
        visibility::resolve_scope(role, &self.assignments)
    }

    pub fn departments_for(&self, role: &UserRole) -> Vec<Department> {
        visibility::visible_departments(self.scope_for(role), &self.departments)
    }

    pub fn members_for(&self, role: &UserRole) -> Vec<Member> {
        visibility::visible_members(self.scope_for(role), &self.members)
    }

    pub fn meetings_for(&self, role: &UserRole) -> Vec<Meeting> {
        visibility::visible_meetings(self.scope_for(role), &self.members, &self.meetings)
    }

    pub fn transfers_for(&self, role: &UserRole) -> Vec<TransferRecord> {
        visibility::visible_transfers(self.scope_for(role), &self.transfers)
    }

    /// A member the role may see, or `NotFound` (hidden members do not exist
    /// as far as the caller is concerned).
    pub fn visible_member(&self, role: &UserRole, id: i64) -> Result<&Member, AppError> {
        member::find(&self.members, id)
            .filter(|m| visibility::can_see_member(self.scope_for(role), m))
            .ok_or(AppError::NotFound)
    }

    pub fn visible_meeting(&self, role: &UserRole, id: i64) -> Result<Meeting, AppError> {
        self.meetings_for(role)
            .into_iter()
            .find(|m| m.id == id)
            .ok_or(AppError::NotFound)
    }

    pub fn department_name(&self, id: i64) -> String {
        crate::models::department::name_of(&self.departments, id)
    }
}

pub struct Roster {
    store: Backend,
    snapshot: RwLock<Arc<Snapshot>>,
    /// Serialises commands so a refetch never races another write.
    commands: tokio::sync::Mutex<()>,
    ladder: TransferLadder,
    duplicates: DuplicatePolicy,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn record_audit(actor: &UserRole, action: &str, target_type: &str, target_id: i64, details: serde_json::Value) {
    if let Err(e) = audit::log(actor.id(), action, target_type, target_id, details) {
        log::warn!("Audit entry for {action} dropped: {e}");
    }
}

impl Roster {
    pub fn new(store: Backend, ladder: TransferLadder, duplicates: DuplicatePolicy) -> Self {
        Self {
            store,
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
            commands: tokio::sync::Mutex::new(()),
            ladder,
            duplicates,
        }
    }

    pub fn store(&self) -> &Backend {
        &self.store
    }

    pub fn ladder(&self) -> &TransferLadder {
        &self.ladder
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn replace(&self, next: Snapshot) {
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(next);
    }

    fn patch(&self, f: impl FnOnce(&mut Snapshot)) {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        f(Arc::make_mut(&mut guard));
    }

    /// Reload everything. A failed fetch is logged and leaves that collection
    /// empty; it never fails the caller.
    pub async fn refresh(&self) {
        let (departments, assignments, members, meetings, transfers) = tokio::join!(
            self.store.fetch_departments(),
            self.store.fetch_role_assignments(),
            self.store.fetch_members(),
            self.store.fetch_meetings(),
            self.store.fetch_transfers(),
        );
        self.replace(Snapshot {
            departments: or_empty("departments", departments),
            assignments: or_empty("role assignments", assignments),
            members: or_empty("members", members),
            meetings: or_empty("meetings", meetings),
            transfers: or_empty("transfer records", transfers),
        });
    }

    // -- members ------------------------------------------------------------

    fn check_department(snap: &Snapshot, actor: &UserRole, department_id: i64) -> Result<(), AppError> {
        if crate::models::department::find(&snap.departments, department_id).is_none() {
            return Err(AppError::Validation(vec!["Please choose a valid department".to_string()]));
        }
        if !snap.scope_for(actor).includes_department(department_id) {
            return Err(AppError::PermissionDenied(format!(
                "{actor} cannot manage members of department {department_id}"
            )));
        }
        Ok(())
    }

    pub async fn add_member(&self, actor: &UserRole, new: NewMember) -> Result<i64, AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        Self::check_department(&snap, actor, new.department_id)?;

        let new = defaults::apply_defaults(new, today(), now_millis());
        let id = self.store.add_member(&new).await?;
        record_audit(actor, "member.created", "member", id, json!({
            "name": new.full_name_en,
            "department_id": new.department_id,
        }));
        self.refresh().await;
        Ok(id)
    }

    pub async fn update_member(&self, actor: &UserRole, updated: Member) -> Result<(), AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        snap.visible_member(actor, updated.id)?;
        Self::check_department(&snap, actor, updated.department_id)?;

        let updated = defaults::apply_defaults_existing(updated, today(), now_millis());
        self.store.update_member(&updated).await?;
        record_audit(actor, "member.updated", "member", updated.id, json!({
            "name": updated.full_name_en,
            "department_id": updated.department_id,
            "role": updated.role.as_str(),
            "status": updated.status.as_str(),
        }));
        self.refresh().await;
        Ok(())
    }

    pub async fn delete_member(&self, actor: &UserRole, id: i64) -> Result<(), AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        let name = snap.visible_member(actor, id)?.full_name_en.clone();

        self.store.delete_member(id).await?;
        record_audit(actor, "member.deleted", "member", id, json!({ "name": name }));
        self.refresh().await;
        Ok(())
    }

    /// Parse a members CSV and insert the rows one at a time. Heads can only
    /// import into their own department.
    pub async fn import_members(&self, actor: &UserRole, csv: &str) -> Result<ImportReport, AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        let departments = snap.departments_for(actor);
        let rows = data_manager::parse_members_csv(csv, &departments, today(), now_millis())?;

        let mut report = ImportReport { imported: 0, attempted: rows.len() };
        for row in &rows {
            match self.store.add_member(row).await {
                Ok(_) => report.imported += 1,
                Err(e) => log::error!("Import of '{}' failed: {e}", row.full_name_en),
            }
        }
        record_audit(actor, "members.imported", "member", 0, json!({
            "imported": report.imported,
            "attempted": report.attempted,
        }));
        self.refresh().await;
        Ok(report)
    }

    // -- meetings -----------------------------------------------------------

    /// Title, date and at least one visible attendee. Attendee names are taken
    /// from the roster, not from the caller.
    fn prepare_attendees(
        snap: &Snapshot,
        actor: &UserRole,
        title: &str,
        date: &str,
        attendees: &[Attendee],
    ) -> Result<Vec<Attendee>, AppError> {
        let mut errors: Vec<String> = [
            validate_required(title, "Title", 200),
            validate_date(date, "Date"),
        ]
        .into_iter()
        .flatten()
        .collect();
        if attendees.is_empty() {
            errors.push("Please select at least one attendee".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let scope = snap.scope_for(actor);
        let mut prepared = Vec::with_capacity(attendees.len());
        for a in attendees {
            if prepared.iter().any(|p: &Attendee| p.member_id == a.member_id) {
                continue;
            }
            let m = member::find(&snap.members, a.member_id)
                .filter(|m| visibility::can_see_member(scope, m))
                .ok_or_else(|| AppError::Validation(vec![format!("Unknown member {}", a.member_id)]))?;
            prepared.push(Attendee {
                member_id: m.id,
                name: m.full_name_en.clone(),
                status: a.status,
            });
        }
        Ok(prepared)
    }

    pub async fn create_meeting(&self, actor: &UserRole, new: NewMeeting) -> Result<i64, AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        let attendees = Self::prepare_attendees(&snap, actor, &new.title, &new.date, &new.attendees)?;
        let new = NewMeeting {
            title: new.title.trim().to_string(),
            date: new.date.trim().to_string(),
            attendees,
        };

        let id = self.store.add_meeting(&new).await?;
        record_audit(actor, "meeting.created", "meeting", id, json!({
            "title": new.title,
            "date": new.date,
            "attendees": new.attendees.len(),
        }));
        self.refresh().await;
        Ok(id)
    }

    /// Replaces the meeting's attendee list wholesale. Attendees hidden from a
    /// head are kept as they were.
    pub async fn update_meeting(&self, actor: &UserRole, updated: Meeting) -> Result<(), AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        let existing = snap.visible_meeting(actor, updated.id)?;
        let mut attendees = Self::prepare_attendees(&snap, actor, &updated.title, &updated.date, &updated.attendees)?;

        let scope = snap.scope_for(actor);
        for a in existing.attendees {
            let hidden = member::find(&snap.members, a.member_id)
                .is_none_or(|m| !visibility::can_see_member(scope, m));
            if hidden && !attendees.iter().any(|p| p.member_id == a.member_id) {
                attendees.push(a);
            }
        }

        let updated = Meeting {
            id: updated.id,
            title: updated.title.trim().to_string(),
            date: updated.date.trim().to_string(),
            attendees,
        };
        self.store.update_meeting(&updated).await?;
        record_audit(actor, "meeting.updated", "meeting", updated.id, json!({
            "title": updated.title,
            "date": updated.date,
            "attendees": updated.attendees.len(),
        }));
        self.refresh().await;
        Ok(())
    }

    pub async fn delete_meeting(&self, actor: &UserRole, id: i64) -> Result<(), AppError> {
        let _cmd = self.commands.lock().await;
        let existing = self.snapshot().visible_meeting(actor, id)?;

        self.store.delete_meeting(id).await?;
        record_audit(actor, "meeting.deleted", "meeting", id, json!({ "title": existing.title }));
        self.refresh().await;
        Ok(())
    }

    /// Move one attendee to the next status in the cycle. Patched in place.
    pub async fn advance_attendance(
        &self,
        actor: &UserRole,
        meeting_id: i64,
        member_id: i64,
    ) -> Result<AttendanceStatus, AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        let meeting = snap.visible_meeting(actor, meeting_id)?;
        snap.visible_member(actor, member_id)?;
        let current = meeting.attendee(member_id).ok_or(AppError::NotFound)?.status;
        let next = current.next();

        self.store.update_attendance(meeting_id, member_id, next).await?;
        self.patch(|s| {
            if let Some(a) = s
                .meetings
                .iter_mut()
                .find(|m| m.id == meeting_id)
                .and_then(|m| m.attendees.iter_mut().find(|a| a.member_id == member_id))
            {
                a.status = next;
            }
        });
        record_audit(actor, "attendance.updated", "meeting", meeting_id, json!({
            "member_id": member_id,
            "from": current.as_str(),
            "to": next.as_str(),
        }));
        Ok(next)
    }

    // -- transfers ----------------------------------------------------------

    pub fn transfer_options(&self, actor: &UserRole, member_id: i64) -> Result<(Member, TransferEligibility), AppError> {
        let snap = self.snapshot();
        let m = snap.visible_member(actor, member_id)?.clone();
        let eligibility = transfer_policy::can_request_transfer(actor, &m, &snap.departments, &self.ladder);
        Ok((m, eligibility))
    }

    /// Queue a transfer. The member's department is left alone.
    pub async fn request_transfer(
        &self,
        actor: &UserRole,
        member_id: i64,
        to_department_id: i64,
    ) -> Result<TransferRecord, AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        let m = snap.visible_member(actor, member_id)?;
        let eligibility = transfer_policy::can_request_transfer(actor, m, &snap.departments, &self.ladder);
        if !eligibility.allowed {
            return Err(AppError::PermissionDenied(format!(
                "{actor} cannot transfer member {member_id}"
            )));
        }
        if !eligibility.permits(to_department_id) {
            return Err(AppError::Validation(vec![
                "The selected department is not a valid destination for this member".to_string(),
            ]));
        }

        let date = today().format("%Y-%m-%d").to_string();
        let new = transfer::machine::request(&snap.transfers, m, to_department_id, actor.id(), &date, self.duplicates)
            .map_err(|dup| AppError::Validation(vec![dup.to_string()]))?;
        let id = self.store.add_transfer(&new).await?;
        record_audit(actor, "transfer.requested", "member", member_id, json!({
            "transfer_id": id,
            "from_department_id": new.from_department_id,
            "to_department_id": new.to_department_id,
        }));
        self.refresh().await;
        Ok(new.into_record(id))
    }

    /// Complete the pending transfer(s) of `member_id` into `department_id`.
    /// Returns the number of records completed; zero means there was nothing
    /// to complete and nothing changed.
    pub async fn complete_transfer(
        &self,
        actor: &UserRole,
        member_id: i64,
        department_id: i64,
    ) -> Result<u64, AppError> {
        let _cmd = self.commands.lock().await;
        let snap = self.snapshot();
        if !transfer_policy::can_complete_transfer(actor, snap.scope_for(actor), department_id) {
            return Err(AppError::PermissionDenied(format!(
                "{actor} cannot complete transfers into department {department_id}"
            )));
        }
        if transfer::machine::pending_matches(&snap.transfers, member_id, department_id).is_empty() {
            log::info!("No pending transfer of member {member_id} into {department_id}");
            return Ok(0);
        }

        let completed = self.store.complete_transfer(member_id, department_id).await?;
        if completed > 0 {
            self.patch(|s| {
                transfer::machine::complete_in_place(&mut s.transfers, &mut s.members, member_id, department_id);
            });
            record_audit(actor, "transfer.completed", "member", member_id, json!({
                "department_id": department_id,
                "records": completed,
            }));
        }
        Ok(completed)
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, crate::store::StoreError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Error fetching {what}: {e}");
        Vec::new()
    })
}
