use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Pending,
    Completed,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TransferStatus::Pending),
            "completed" => Some(TransferStatus::Completed),
            _ => None,
        }
    }
}

/// A queued move of a member between departments. The member's department is
/// only changed when the record is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: i64,
    pub member_id: i64,
    /// Member's English name when the request was made.
    pub member_name: String,
    pub from_department_id: i64,
    pub to_department_id: i64,
    /// `YYYY-MM-DD`
    pub transfer_date: String,
    /// Account id of the requester.
    pub transferred_by: String,
    pub status: TransferStatus,
}

impl TransferRecord {
    pub fn is_pending(&self) -> bool {
        self.status == TransferStatus::Pending
    }

    /// Pending record for exactly this member moving into `department_id`.
    pub fn matches_pending(&self, member_id: i64, department_id: i64) -> bool {
        self.is_pending() && self.member_id == member_id && self.to_department_id == department_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransfer {
    pub member_id: i64,
    pub member_name: String,
    pub from_department_id: i64,
    pub to_department_id: i64,
    pub transfer_date: String,
    pub transferred_by: String,
}

impl NewTransfer {
    /// Every new record starts pending.
    pub fn into_record(self, id: i64) -> TransferRecord {
        TransferRecord {
            id,
            member_id: self.member_id,
            member_name: self.member_name,
            from_department_id: self.from_department_id,
            to_department_id: self.to_department_id,
            transfer_date: self.transfer_date,
            transferred_by: self.transferred_by,
            status: TransferStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TransferRow {
    pub id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub from_department_id: i64,
    pub to_department_id: i64,
    pub transfer_date: String,
    pub transferred_by: String,
    pub status: String,
}

impl From<TransferRow> for TransferRecord {
    fn from(row: TransferRow) -> Self {
        let status = TransferStatus::parse(&row.status).unwrap_or_else(|| {
            log::warn!("Transfer {} has unknown status '{}', treating as pending", row.id, row.status);
            TransferStatus::Pending
        });
        TransferRecord {
            id: row.id,
            member_id: row.member_id,
            member_name: row.member_name,
            from_department_id: row.from_department_id,
            to_department_id: row.to_department_id,
            transfer_date: row.transfer_date,
            transferred_by: row.transferred_by,
            status,
        }
    }
}
