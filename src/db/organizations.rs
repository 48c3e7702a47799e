//! Database queries over organizations and their membership.

use sea_orm::*;

use crate::error::AppResult;
use crate::models::user::{DEFAULT_USER_COLUMNS, UserColumn, UserRecord};

/// Resolve an organization id by its unique name.
///
/// Returns `None` when no organization has that name.
pub async fn find_id_by_name(db: &DatabaseConnection, name: &str) -> AppResult<Option<i32>> {
    let org = crate::entity::organization::Entity::find()
        .filter(crate::entity::organization::Column::Name.eq(name))
        .one(db)
        .await?;

    Ok(org.map(|o| o.id))
}

/// List the users belonging to an organization.
///
/// Join path: users -> organization_user -> organizations, filtered on
/// the organization id. Each record is a JSON object keyed by column
/// name containing exactly the requested columns; `None` or an empty
/// slice selects the default {id, username, email} projection. An
/// organization without members, or an unknown id, yields an empty list.
pub async fn list_users(
    db: &DatabaseConnection,
    organization_id: i32,
    columns: Option<&[UserColumn]>,
) -> AppResult<Vec<UserRecord>> {
    let columns = match columns {
        Some(cols) if !cols.is_empty() => cols,
        _ => DEFAULT_USER_COLUMNS,
    };

    let records = crate::entity::user::Entity::find()
        .select_only()
        .columns(columns.iter().map(UserColumn::column))
        .join(
            JoinType::InnerJoin,
            crate::entity::user::Relation::OrganizationUser.def(),
        )
        .join(
            JoinType::InnerJoin,
            crate::entity::organization_user::Relation::Organization.def(),
        )
        .filter(crate::entity::organization::Column::Id.eq(organization_id))
        .into_json()
        .all(db)
        .await?;

    Ok(records)
}
