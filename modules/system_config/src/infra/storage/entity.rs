//! SeaORM entity for the configuration table

use sea_orm::entity::prelude::*;

/// Primary key of the only row the table ever holds
pub const SINGLETON_ID: i32 = 1;

/// System config table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "system_config")]
pub struct Model {
    /// Always `SINGLETON_ID`
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    /// Record keyed by canonical field names
    pub data: Json,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
