use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Excused,
    Absent,
}

impl AttendanceStatus {
    pub const CYCLE: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Excused,
        AttendanceStatus::Absent,
    ];

    /// Present → Excused → Absent → Present.
    pub fn next(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Excused,
            AttendanceStatus::Excused => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::CYCLE.into_iter().find(|st| st.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub member_id: i64,
    /// Member's English name at load time.
    pub name: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub attendees: Vec<Attendee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub title: String,
    pub date: String,
    pub attendees: Vec<Attendee>,
}

impl Meeting {
    /// `YYYY-MM` prefix of the meeting date, if the date is well formed.
    pub fn year_month(&self) -> Option<&str> {
        let ym = self.date.get(..7)?;
        let bytes = ym.as_bytes();
        (bytes[4] == b'-' && ym[..4].parse::<u32>().is_ok() && ym[5..].parse::<u32>().is_ok())
            .then_some(ym)
    }

    pub fn attendee(&self, member_id: i64) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.member_id == member_id)
    }

    pub fn has_attendee(&self, member_id: i64) -> bool {
        self.attendee(member_id).is_some()
    }
}

pub fn find<'a>(meetings: &'a [Meeting], id: i64) -> Option<&'a Meeting> {
    meetings.iter().find(|m| m.id == id)
}

/// Distinct `YYYY-MM` values, newest first.
pub fn available_months(meetings: &[Meeting]) -> Vec<String> {
    let mut months: Vec<String> = meetings
        .iter()
        .filter_map(|m| m.year_month().map(str::to_string))
        .collect();
    months.sort_by(|a, b| b.cmp(a));
    months.dedup();
    months
}

/// Keep meetings in `month` (`YYYY-MM`); `"all"` or empty keeps everything.
pub fn filter_by_month(meetings: Vec<Meeting>, month: &str) -> Vec<Meeting> {
    let month = month.trim();
    if month.is_empty() || month == "all" {
        return meetings;
    }
    meetings
        .into_iter()
        .filter(|m| m.year_month() == Some(month))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(id: i64, date: &str) -> Meeting {
        Meeting { id, title: format!("m{id}"), date: date.into(), attendees: vec![] }
    }

    #[test]
    fn three_advances_return_to_start() {
        for start in AttendanceStatus::CYCLE {
            assert_eq!(start.next().next().next(), start);
            assert_ne!(start.next(), start);
        }
        assert_eq!(AttendanceStatus::Present.next(), AttendanceStatus::Excused);
        assert_eq!(AttendanceStatus::Excused.next(), AttendanceStatus::Absent);
    }

    #[test]
    fn months_are_distinct_and_newest_first() {
        let ms = vec![
            meeting(1, "2023-06-15"),
            meeting(2, "2023-07-01"),
            meeting(3, "2023-06-20"),
            meeting(4, "garbage"),
        ];
        assert_eq!(available_months(&ms), vec!["2023-07", "2023-06"]);
        let june = filter_by_month(ms.clone(), "2023-06");
        assert_eq!(june.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(filter_by_month(ms, "all").len(), 4);
    }
}
