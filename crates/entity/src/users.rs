//! Users Entity
//!
//! Represents dashboard users with their profile and persisted access level.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    #[sea_orm(unique)]
    pub email:        String,
    pub name:         String,
    pub role:         String,
    pub access_level: AccessLevel,
    pub active:       bool,
    /// Opaque key into the external identity store; locality-access
    /// association rows hang off this key, not the numeric id.
    pub external_id:  Option<String>,
    pub created_at:   DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_localities::Entity")]
    UserLocalities,
}

impl Related<super::user_localities::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserLocalities.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Ranked permission tier persisted alongside a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "access_level")]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Field agent, lowest tier; provisioned by an administrator
    #[sea_orm(string_value = "agente")]
    Agente,
    /// Area supervisor, the self-registration floor
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
    /// Full administrative access
    #[sea_orm(string_value = "administrador")]
    Administrador,
    /// Unknown/default fallback, always denied
    #[sea_orm(string_value = "desconhecido")]
    Desconhecido,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Agente => write!(f, "agente"),
            AccessLevel::Supervisor => write!(f, "supervisor"),
            AccessLevel::Administrador => write!(f, "administrador"),
            AccessLevel::Desconhecido => write!(f, "desconhecido"),
        }
    }
}
