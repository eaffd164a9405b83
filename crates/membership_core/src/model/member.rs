//! Member record and projections.
//!
//! # Invariants
//! - `MemberFields` carries exactly the nine caller-supplied values, in the
//!   order they are bound to store columns.
//! - Optional dates/paths use `None` for absence, never an empty string.

use serde::{Deserialize, Serialize};

/// Store-assigned member identifier (SQLite rowid).
pub type MemberId = i64;

/// Caller-supplied member values, used both for inserts and full updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFields {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    /// ISO `yyyy-mm-dd`.
    pub date_of_birth: String,
    /// ISO `yyyy-mm-dd`.
    pub date_joined: String,
    /// ISO `yyyy-mm-dd`; `None` while the member is still active.
    pub date_exit: Option<String>,
    /// File-system path to an image. Only the path is stored.
    pub photo: Option<String>,
}

impl MemberFields {
    /// Returns whether the member has not left the organization.
    pub fn is_active(&self) -> bool {
        self.date_exit.is_none()
    }
}

/// Persisted member record returned by id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(flatten)]
    pub fields: MemberFields,
}

/// Search/admin table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: MemberId,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
}

/// Member list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberListing {
    pub full_name: String,
    pub date_joined: String,
    pub date_exit: Option<String>,
}

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    pub count: u64,
    /// Latest `date_joined`, `None` when the store is empty.
    pub last_join_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Member, MemberFields};

    #[test]
    fn member_without_exit_date_is_active() {
        let mut fields = MemberFields::default();
        assert!(fields.is_active());

        fields.date_exit = Some("2024-03-01".to_string());
        assert!(!fields.is_active());
    }

    #[test]
    fn member_serializes_with_flattened_fields() {
        let member = Member {
            id: 7,
            fields: MemberFields {
                full_name: "Jane Doe".to_string(),
                ..MemberFields::default()
            },
        };

        let value = serde_json::to_value(&member).expect("member should serialize");
        assert_eq!(value["id"], 7);
        assert_eq!(value["full_name"], "Jane Doe");
        assert!(value["date_exit"].is_null());
    }
}
