use chrono::NaiveDate;
use std::collections::HashMap;

use super::types::{CsvImportError, MEMBER_CSV_HEADER, UTF8_BOM};
use crate::models::department::Department;
use crate::models::member::defaults::{
    NATIONAL_ID_PLACEHOLDER_PREFIX, SENTINEL_BIRTH_DATE, UNNAMED_MEMBER, UNSPECIFIED,
};
use crate::models::member::{MemberRole, MemberStatus, NewMember};

/// Split CSV text into records of trimmed fields. Double quotes delimit
/// fields that may contain commas or line breaks; `""` inside quotes is a
/// literal quote. A bare `\r` outside quotes is dropped.
pub fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current).trim().to_string());
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    records.push(fields);
    records
}

fn is_blank(record: &[String]) -> bool {
    record.iter().all(String::is_empty)
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() { default.to_string() } else { value.to_string() }
}

/// Parse an exported members file back into insertable rows.
///
/// The `ID` column is ignored; the store assigns fresh ids. Missing values get
/// the same placeholders as the member form; an unknown department falls back
/// to the first department, an unknown role to `Member`, an unknown status to
/// `Pending`.
pub fn parse_members_csv(
    text: &str,
    departments: &[Department],
    today: NaiveDate,
    now_millis: i64,
) -> Result<Vec<NewMember>, CsvImportError> {
    let text = text.trim_start_matches(UTF8_BOM).trim();
    let records = split_records(text);
    if records.len() < 2 {
        return Err(CsvImportError::Empty);
    }

    let header = &records[0];
    if header.iter().map(String::as_str).ne(MEMBER_CSV_HEADER.iter().copied()) {
        return Err(CsvImportError::HeaderMismatch { found: header.join(",") });
    }

    let by_name: HashMap<String, i64> = departments
        .iter()
        .map(|d| (d.name.to_lowercase(), d.id))
        .collect();
    let today = today.format("%Y-%m-%d").to_string();

    let mut members = Vec::new();
    for (i, values) in records.iter().enumerate().skip(1) {
        if is_blank(values) {
            continue;
        }
        let value = |idx: usize| values.get(idx).map(String::as_str).unwrap_or("");

        let arabic = [
            or_default(value(2), UNSPECIFIED),
            or_default(value(3), UNSPECIFIED),
            or_default(value(4), UNSPECIFIED),
            or_default(value(5), UNSPECIFIED),
        ];
        let full_name_en = if value(1).is_empty() {
            let joined = arabic
                .iter()
                .filter(|n| n.as_str() != UNSPECIFIED)
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            or_default(&joined, UNNAMED_MEMBER)
        } else {
            value(1).to_string()
        };

        let department_id = match by_name.get(&value(12).to_lowercase()) {
            Some(&id) => id,
            None => departments.first().map(|d| d.id).ok_or(CsvImportError::NoDepartments)?,
        };

        let national_id = if value(7).is_empty() {
            format!("{NATIONAL_ID_PLACEHOLDER_PREFIX}{now_millis}-{i}")
        } else {
            value(7).to_string()
        };

        let [first_name_ar, second_name_ar, third_name_ar, fourth_name_ar] = arabic;
        members.push(NewMember {
            first_name_ar,
            second_name_ar,
            third_name_ar,
            fourth_name_ar,
            full_name_en,
            birth_date: or_default(value(6), SENTINEL_BIRTH_DATE),
            national_id,
            location: or_default(value(8), UNSPECIFIED),
            phone_number: or_default(value(9), UNSPECIFIED),
            email: (!value(10).is_empty()).then(|| value(10).to_string()),
            role: MemberRole::parse(value(11)).unwrap_or(MemberRole::Member),
            department_id,
            status: MemberStatus::parse(value(13)).unwrap_or(MemberStatus::Pending),
            join_date: or_default(value(14), &today),
        });
    }

    if members.is_empty() {
        return Err(CsvImportError::NoRows);
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_quotes_commas_and_escapes() {
        assert_eq!(split_records(r#"1,"a, b","say ""hi""", c "#), vec![vec!["1", "a, b", r#"say "hi""#, "c"]]);
        assert_eq!(split_records(""), vec![vec![""]]);
        assert_eq!(split_records("x,,"), vec![vec!["x", "", ""]]);
    }

    #[test]
    fn quoted_line_breaks_stay_inside_the_field() {
        let records = split_records("1,\"Block 4\nStreet 2\",x\r\n2,\"y\",z");
        assert_eq!(records, vec![vec!["1", "Block 4\nStreet 2", "x"], vec!["2", "y", "z"]]);
    }
}
