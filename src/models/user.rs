//! User projection model.
//!
//! Callers pick which user attributes a membership query returns. The
//! permitted set is a closed enum rather than free-form field names, so
//! an invalid selection is rejected before any SQL is built.

use serde::{Deserialize, Serialize};

use crate::entity::user;
use crate::error::{AppError, AppResult};

/// A projected user row, keyed by column name.
pub type UserRecord = serde_json::Value;

/// Columns of the user entity that may be selected by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserColumn {
    Id,
    Username,
    Email,
    DisplayName,
    CreatedAt,
}

/// Projection used when the caller does not ask for specific columns.
pub const DEFAULT_USER_COLUMNS: &[UserColumn] =
    &[UserColumn::Id, UserColumn::Username, UserColumn::Email];

impl UserColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
            Self::Email => "email",
            Self::DisplayName => "display_name",
            Self::CreatedAt => "created_at",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "username" => Some(Self::Username),
            "email" => Some(Self::Email),
            "display_name" => Some(Self::DisplayName),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Parse a caller-supplied list of column names.
    ///
    /// Fails on the first name that is not a user attribute.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> AppResult<Vec<Self>> {
        names
            .iter()
            .map(|name| {
                Self::parse(name.as_ref())
                    .ok_or_else(|| AppError::UnknownColumn(name.as_ref().to_string()))
            })
            .collect()
    }

    /// The corresponding entity column.
    pub(crate) fn column(&self) -> user::Column {
        match self {
            Self::Id => user::Column::Id,
            Self::Username => user::Column::Username,
            Self::Email => user::Column::Email,
            Self::DisplayName => user::Column::DisplayName,
            Self::CreatedAt => user::Column::CreatedAt,
        }
    }
}

impl std::fmt::Display for UserColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for col in [
            UserColumn::Id,
            UserColumn::Username,
            UserColumn::Email,
            UserColumn::DisplayName,
            UserColumn::CreatedAt,
        ] {
            assert_eq!(UserColumn::parse(col.as_str()), Some(col));
        }
        assert_eq!(UserColumn::parse("password"), None);
    }

    #[test]
    fn test_from_names() {
        let cols = UserColumn::from_names(&["id", "email"]).unwrap();
        assert_eq!(cols, vec![UserColumn::Id, UserColumn::Email]);
    }

    #[test]
    fn test_from_names_rejects_unknown() {
        let err = UserColumn::from_names(&["id", "shoe_size"]).unwrap_err();
        match err {
            AppError::UnknownColumn(name) => assert_eq!(name, "shoe_size"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_projection() {
        assert_eq!(
            DEFAULT_USER_COLUMNS,
            &[UserColumn::Id, UserColumn::Username, UserColumn::Email]
        );
    }
}
