//! SeaORM entity definitions for the organization schema.

pub mod access_key;
pub mod organization;
pub mod organization_user;
pub mod user;
