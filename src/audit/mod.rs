use serde::Serialize;
use serde_json::Value;

#[derive(Debug)]
pub enum AuditError {
    JsonError(serde_json::Error),
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::JsonError(err)
    }
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuditEntry<'a> {
    pub at: String,
    pub actor: &'a str,
    pub action: &'a str,
    pub target_type: &'a str,
    pub target_id: i64,
    pub details: Value,
}

pub fn log(
    actor: &str,
    action: &str,
    target_type: &str,
    target_id: i64,
    details: Value,
) -> Result<(), AuditError> {
    let entry = AuditEntry {
        at: chrono::Utc::now().to_rfc3339(),
        actor,
        action,
        target_type,
        target_id,
        details,
    };
    let line = serde_json::to_string(&entry)?;
    log::info!(target: "audit", "{line}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_all_fields() {
        let entry = AuditEntry {
            at: "2024-01-01T00:00:00+00:00".into(),
            actor: "Admin",
            action: "member.created",
            target_type: "member",
            target_id: 4,
            details: serde_json::json!({"name": "X"}),
        };
        let json: Value = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
        assert_eq!(json["actor"], "Admin");
        assert_eq!(json["target_id"], 4);
        assert_eq!(json["details"]["name"], "X");
    }
}
