use serde::Serialize;
use std::collections::HashSet;

use super::types::{AttendanceStatus, Meeting};
use crate::models::member::Member;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    pub present: u32,
    pub excused: u32,
    pub absent: u32,
    pub total: u32,
    /// Present over total, rounded; 0 when the member was never invited.
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberAttendanceRow {
    pub member: Member,
    pub stats: AttendanceStats,
    /// One cell per relevant meeting, same order as the overview's `meetings`.
    pub cells: Vec<Option<AttendanceStatus>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceOverview {
    pub meetings: Vec<Meeting>,
    pub rows: Vec<MemberAttendanceRow>,
}

/// Per-member attendance across the meetings that invited any of `members`,
/// newest meeting first.
pub fn build_overview(members: &[Member], meetings: &[Meeting]) -> AttendanceOverview {
    let ids: HashSet<i64> = members.iter().map(|m| m.id).collect();
    let mut relevant: Vec<Meeting> = meetings
        .iter()
        .filter(|mt| mt.attendees.iter().any(|a| ids.contains(&a.member_id)))
        .cloned()
        .collect();
    relevant.sort_by(|a, b| b.date.cmp(&a.date));

    let rows = members
        .iter()
        .map(|member| {
            let mut stats = AttendanceStats::default();
            let cells: Vec<Option<AttendanceStatus>> = relevant
                .iter()
                .map(|mt| {
                    let status = mt.attendee(member.id).map(|a| a.status);
                    if let Some(s) = status {
                        stats.total += 1;
                        match s {
                            AttendanceStatus::Present => stats.present += 1,
                            AttendanceStatus::Excused => stats.excused += 1,
                            AttendanceStatus::Absent => stats.absent += 1,
                        }
                    }
                    status
                })
                .collect();
            if stats.total > 0 {
                stats.percentage =
                    ((f64::from(stats.present) / f64::from(stats.total)) * 100.0).round() as u32;
            }
            MemberAttendanceRow { member: member.clone(), stats, cells }
        })
        .collect();

    AttendanceOverview { meetings: relevant, rows }
}
