//! Database queries over access keys.

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::error::AppResult;
use crate::models::AccessKey;

/// List the valid access keys of an organization.
///
/// A key is valid exactly when its `revoke_time` is unset; there is no
/// expiry concept. Unknown organizations yield an empty list.
pub async fn list_valid_for_organization(
    db: &DatabaseConnection,
    organization_id: i32,
) -> AppResult<Vec<AccessKey>> {
    let results = crate::entity::access_key::Entity::find()
        .join(
            JoinType::InnerJoin,
            crate::entity::access_key::Relation::Organization.def(),
        )
        .filter(crate::entity::organization::Column::Id.eq(organization_id))
        .filter(crate::entity::access_key::Column::RevokeTime.is_null())
        .all(db)
        .await?;

    Ok(results.into_iter().map(model_to_access_key).collect())
}

/// List the hashes of keys revoked within the half-open interval
/// [start, end), across all organizations.
pub async fn list_revoked_hashes_in_range(
    db: &DatabaseConnection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<String>> {
    let hashes = crate::entity::access_key::Entity::find()
        .select_only()
        .column(crate::entity::access_key::Column::KeyHash)
        .filter(crate::entity::access_key::Column::RevokeTime.gte(start))
        .filter(crate::entity::access_key::Column::RevokeTime.lt(end))
        .into_tuple::<String>()
        .all(db)
        .await?;

    Ok(hashes)
}

fn model_to_access_key(m: crate::entity::access_key::Model) -> AccessKey {
    AccessKey {
        id: m.id,
        organization_id: m.organization_id,
        key_hash: m.key_hash,
        name: m.name,
        created_at: m.created_at,
        revoke_time: m.revoke_time,
    }
}
