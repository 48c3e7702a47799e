//! Organization entity. Tenant owning users and access keys.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::access_key::Entity")]
    AccessKey,
    #[sea_orm(has_many = "super::organization_user::Entity")]
    OrganizationUser,
}

impl Related<super::access_key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessKey.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::organization_user::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::organization_user::Relation::Organization.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
