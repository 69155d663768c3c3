//! Shared test infrastructure.
//!
//! Every integration test runs against the in-memory backend seeded with the
//! demo roster:
//!
//! | id | member                             | role       | department   |
//! |----|------------------------------------|------------|--------------|
//! | 1  | Mohammed Ali Hussein Al-Salem      | Leader     | 2ashbal (1)  |
//! | 2  | Ahmed Abdullah Mohammed Al-Ajami   | Member     | 2ashbal (1)  |
//! | 3  | Fatima Hussein Ali Al-Kandari      | Sub-Leader | bar3me (2)   |

#![allow(dead_code)]

use rollcall::auth::accounts::UserRole;
use rollcall::models::member::{MemberRole, MemberStatus, NewMember};
use rollcall::models::transfer::{DuplicatePolicy, TransferLadder};
use rollcall::roster::Roster;
use rollcall::store::{Backend, MemoryStore};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const PASSWORD: &str = "1234";

pub const DEPT_2ASHBAL: i64 = 1;
pub const DEPT_BAR3ME: i64 = 2;
pub const DEPT_KASHAF: i64 = 3;
pub const DEPT_GAWALA: i64 = 6;

pub const LEADER_2ASHBAL: i64 = 1;
pub const MEMBER_2ASHBAL: i64 = 2;
pub const SUBLEADER_BAR3ME: i64 = 3;

// ============================================================================
// ROSTER SETUP
// ============================================================================

/// Demo roster, loaded, with the default ladder and duplicates allowed.
pub async fn demo_roster() -> Roster {
    demo_roster_with(DuplicatePolicy::Allow).await
}

pub async fn demo_roster_with(duplicates: DuplicatePolicy) -> Roster {
    let roster = Roster::new(
        Backend::Memory(MemoryStore::with_demo_data()),
        TransferLadder::default(),
        duplicates,
    );
    roster.refresh().await;
    roster
}

/// Departments and head accounts, no members.
pub async fn empty_roster() -> Roster {
    let roster = Roster::new(
        Backend::Memory(MemoryStore::new()),
        TransferLadder::default(),
        DuplicatePolicy::Allow,
    );
    roster.refresh().await;
    roster
}

/// Flip the memory backend behind `roster` on or off.
pub fn set_offline(roster: &Roster, offline: bool) {
    match roster.store() {
        Backend::Memory(store) => store.set_offline(offline),
        Backend::Postgres(_) => panic!("test roster must use the memory backend"),
    }
}

// ============================================================================
// ACCOUNTS & FIXTURES
// ============================================================================

pub fn head(account: &str) -> UserRole {
    UserRole::from_account_id(account).expect("known head account")
}

pub fn new_member(name: &str, role: MemberRole, department_id: i64) -> NewMember {
    NewMember {
        first_name_ar: "سالم".to_string(),
        second_name_ar: "خالد".to_string(),
        third_name_ar: "يوسف".to_string(),
        fourth_name_ar: "المطيري".to_string(),
        full_name_en: name.to_string(),
        birth_date: "2012-04-01".to_string(),
        national_id: format!("NID-{name}"),
        location: "Jahra".to_string(),
        phone_number: "+96500000000".to_string(),
        email: None,
        role,
        department_id,
        status: MemberStatus::Active,
        join_date: "2023-09-01".to_string(),
    }
}
