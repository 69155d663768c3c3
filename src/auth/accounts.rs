use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub id: &'static str,
    pub name: &'static str,
}

pub const ACCOUNTS: &[Account] = &[
    Account { id: "Admin", name: "Admin" },
    Account { id: "CEO", name: "Head Leader" },
    Account { id: "2ashbal", name: "2ashbal Head" },
    Account { id: "bar3me", name: "bar3me Head" },
    Account { id: "kashaf", name: "kashaf Head" },
    Account { id: "motakadam", name: "motakadam Head" },
    Account { id: "morsha7in gawala", name: "morsha7in gawala Head" },
    Account { id: "gawala", name: "gawala Head" },
];

pub fn find(id: &str) -> Option<&'static Account> {
    ACCOUNTS.iter().find(|a| a.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Ceo,
    /// Head of a single department, identified by account id.
    DepartmentHead(String),
}

impl UserRole {
    /// Only ids from [`ACCOUNTS`] resolve.
    pub fn from_account_id(id: &str) -> Option<Self> {
        let account = find(id)?;
        Some(match account.id {
            "Admin" => UserRole::Admin,
            "CEO" => UserRole::Ceo,
            other => UserRole::DepartmentHead(other.to_string()),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Ceo => "CEO",
            UserRole::DepartmentHead(id) => id,
        }
    }

    /// Admin and CEO have global visibility and transfer authority.
    pub fn is_privileged(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Ceo)
    }

    pub fn display_name(&self) -> &'static str {
        find(self.id()).map(|a| a.name).unwrap_or("Unknown")
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl TryFrom<String> for UserRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserRole::from_account_id(&value).ok_or_else(|| format!("unknown account '{value}'"))
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.id().to_string()
    }
}
