//! Inspection Records Entity
//!
//! One row per field inspection report for a locality. Rows are immutable
//! once persisted; corrections create a new record.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "inspection_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:                   i64,
    pub municipality:         String,
    pub locality:             String,
    pub cycle:                String,
    pub epidemiological_week: String,
    pub work_modality:        String,
    pub start_date:           Date,
    pub end_date:             Date,
    pub total_properties:     i64,
    pub inspections:          i64,
    pub deposits_eliminated:  i64,
    pub deposits_treated:     i64,
    pub supervisor:           String,
    pub created_at:           DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
