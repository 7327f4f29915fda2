//! User Localities Entity
//!
//! Association rows granting a user access to a locality, keyed by the
//! user's identity-store key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_localities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:          i32,
    pub external_id: String,
    pub locality:    String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ExternalId",
        to = "super::users::Column::ExternalId"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Users.def() }
}

impl ActiveModelBehavior for ActiveModel {}
