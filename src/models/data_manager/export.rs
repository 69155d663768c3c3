use super::types::{MEMBER_CSV_HEADER, UTF8_BOM};
use crate::models::department::{self, Department};
use crate::models::member::Member;

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Members as CSV text: BOM, header, one line per member. The id column is
/// bare; every other field is quoted. Departments are written by name.
pub fn members_to_csv(members: &[Member], departments: &[Department]) -> String {
    let mut csv = String::new();
    csv.push(UTF8_BOM);
    csv.push_str(&MEMBER_CSV_HEADER.join(","));
    for m in members {
        let department_name = department::name_of(departments, m.department_id);
        let fields = [
            m.full_name_en.as_str(),
            &m.first_name_ar,
            &m.second_name_ar,
            &m.third_name_ar,
            &m.fourth_name_ar,
            &m.birth_date,
            &m.national_id,
            &m.location,
            &m.phone_number,
            m.email.as_deref().unwrap_or(""),
            m.role.as_str(),
            &department_name,
            m.status.as_str(),
            &m.join_date,
        ];
        csv.push('\n');
        csv.push_str(&m.id.to_string());
        for field in fields {
            csv.push(',');
            csv.push_str(&quote(field));
        }
    }
    csv
}
