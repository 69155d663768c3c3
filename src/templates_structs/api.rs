use serde::{Deserialize, Serialize};

use crate::models::meeting::AttendanceStatus;

#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ApiTransferRequest {
    pub member_id: i64,
    pub to_department_id: i64,
}

#[derive(Deserialize, Debug)]
pub struct ApiCompleteRequest {
    pub member_id: i64,
    pub department_id: i64,
}

#[derive(Serialize, Debug)]
pub struct ApiCompleteResponse {
    pub completed: u64,
}

#[derive(Serialize, Debug)]
pub struct ApiAttendanceResponse {
    pub meeting_id: i64,
    pub member_id: i64,
    pub status: AttendanceStatus,
}
