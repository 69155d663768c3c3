use crate::models::department::{Department, RoleAssignment};
use crate::models::meeting::{AttendanceStatus, Attendee, Meeting};
use crate::models::member::{Member, MemberRole, MemberStatus};
use crate::models::transfer::{TransferRecord, TransferStatus};

pub fn departments() -> Vec<Department> {
    [
        (1, "2ashbal"),
        (2, "bar3me"),
        (3, "kashaf"),
        (4, "motakadam"),
        (5, "morsha7in gawala"),
        (6, "gawala"),
    ]
    .into_iter()
    .map(|(id, name)| Department { id, name: name.to_string() })
    .collect()
}

/// One head account per department.
pub fn role_assignments() -> Vec<RoleAssignment> {
    departments()
        .into_iter()
        .map(|d| RoleAssignment { role: d.name, department_id: d.id })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: i64,
    ar: [&str; 4],
    en: &str,
    birth_date: &str,
    national_id: &str,
    location: &str,
    phone: &str,
    email: Option<&str>,
    role: MemberRole,
    department_id: i64,
    join_date: &str,
) -> Member {
    Member {
        id,
        first_name_ar: ar[0].to_string(),
        second_name_ar: ar[1].to_string(),
        third_name_ar: ar[2].to_string(),
        fourth_name_ar: ar[3].to_string(),
        full_name_en: en.to_string(),
        birth_date: birth_date.to_string(),
        national_id: national_id.to_string(),
        location: location.to_string(),
        phone_number: phone.to_string(),
        email: email.map(str::to_string),
        role,
        department_id,
        status: MemberStatus::Active,
        join_date: join_date.to_string(),
    }
}

pub fn members() -> Vec<Member> {
    vec![
        member(
            1,
            ["محمد", "علي", "حسين", "السالم"],
            "Mohammed Ali Hussein Al-Salem",
            "1995-05-15",
            "1234567890",
            "Kuwait City",
            "+96512345678",
            Some("mohammed@example.com"),
            MemberRole::Leader,
            1,
            "2020-01-15",
        ),
        member(
            2,
            ["أحمد", "عبدالله", "محمد", "العجمي"],
            "Ahmed Abdullah Mohammed Al-Ajami",
            "1998-08-22",
            "0987654321",
            "Hawalli",
            "+96587654321",
            None,
            MemberRole::Member,
            1,
            "2021-03-10",
        ),
        member(
            3,
            ["فاطمة", "حسين", "علي", "الكندري"],
            "Fatima Hussein Ali Al-Kandari",
            "1997-12-03",
            "1122334455",
            "Salmiya",
            "+96555667788",
            Some("fatima@example.com"),
            MemberRole::SubLeader,
            2,
            "2019-07-20",
        ),
    ]
}

fn attendee(member_id: i64, name: &str, status: AttendanceStatus) -> Attendee {
    Attendee { member_id, name: name.to_string(), status }
}

pub fn meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: 1,
            title: "Monthly Department Meeting".to_string(),
            date: "2023-06-15".to_string(),
            attendees: vec![
                attendee(1, "Mohammed Ali Hussein Al-Salem", AttendanceStatus::Present),
                attendee(2, "Ahmed Abdullah Mohammed Al-Ajami", AttendanceStatus::Absent),
                attendee(3, "Fatima Hussein Ali Al-Kandari", AttendanceStatus::Excused),
            ],
        },
        Meeting {
            id: 2,
            title: "Quarterly Planning Session".to_string(),
            date: "2023-06-20".to_string(),
            attendees: vec![
                attendee(1, "Mohammed Ali Hussein Al-Salem", AttendanceStatus::Present),
                attendee(3, "Fatima Hussein Ali Al-Kandari", AttendanceStatus::Present),
            ],
        },
    ]
}

pub fn transfers() -> Vec<TransferRecord> {
    let record = |id, member_id, name: &str, from, to, date: &str, by: &str, status| TransferRecord {
        id,
        member_id,
        member_name: name.to_string(),
        from_department_id: from,
        to_department_id: to,
        transfer_date: date.to_string(),
        transferred_by: by.to_string(),
        status,
    };
    vec![
        record(1, 1, "Mohammed Ali Hussein Al-Salem", 2, 1, "2023-06-15", "Admin", TransferStatus::Pending),
        record(2, 3, "Fatima Hussein Ali Al-Kandari", 1, 3, "2023-06-10", "CEO", TransferStatus::Completed),
        record(3, 2, "Ahmed Abdullah Mohammed Al-Ajami", 1, 3, "2023-05-20", "2ashbal", TransferStatus::Pending),
    ]
}
