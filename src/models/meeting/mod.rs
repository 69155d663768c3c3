pub mod overview;
mod queries;
mod types;

pub use overview::{AttendanceOverview, AttendanceStats, MemberAttendanceRow, build_overview};
pub use queries::*;
pub use types::*;
