//! Access key read model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Access key as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessKey {
    /// Unique identifier
    pub id: i32,
    /// Owning organization
    pub organization_id: i32,
    /// SHA-256 hash of the full key
    pub key_hash: String,
    /// Human-readable name (e.g., "CI - GitHub Actions")
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Revocation timestamp; unset while the key is valid
    pub revoke_time: Option<DateTime<Utc>>,
}

impl AccessKey {
    /// Check if the key is revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoke_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(revoke_time: Option<DateTime<Utc>>) -> AccessKey {
        AccessKey {
            id: 1,
            organization_id: 7,
            key_hash: "ab".repeat(32),
            name: "CI".to_string(),
            created_at: Utc::now(),
            revoke_time,
        }
    }

    #[test]
    fn test_is_revoked() {
        assert!(!key(None).is_revoked());
        assert!(key(Some(Utc::now())).is_revoked());
    }
}
