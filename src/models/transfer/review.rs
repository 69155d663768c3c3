use serde::{Deserialize, Serialize};

use super::types::{TransferRecord, TransferStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferSortKey {
    #[default]
    Date,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

pub fn summarize(records: &[TransferRecord]) -> TransferSummary {
    let pending = records.iter().filter(|r| r.status == TransferStatus::Pending).count();
    TransferSummary {
        total: records.len(),
        pending,
        completed: records.len() - pending,
    }
}

/// Case-insensitive member-name search followed by a stable sort.
pub fn search_and_sort(
    mut records: Vec<TransferRecord>,
    search: &str,
    key: TransferSortKey,
    dir: SortDir,
) -> Vec<TransferRecord> {
    let needle = search.trim().to_lowercase();
    if !needle.is_empty() {
        records.retain(|r| r.member_name.to_lowercase().contains(&needle));
    }
    records.sort_by(|a, b| {
        let ord = match key {
            TransferSortKey::Date => a.transfer_date.cmp(&b.transfer_date),
            TransferSortKey::Name => a.member_name.to_lowercase().cmp(&b.member_name.to_lowercase()),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
    records
}

/// Pending records whose destination is `department_id`.
pub fn pending_into(records: &[TransferRecord], department_id: i64) -> Vec<TransferRecord> {
    records
        .iter()
        .filter(|r| r.is_pending() && r.to_department_id == department_id)
        .cloned()
        .collect()
}
