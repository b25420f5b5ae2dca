//! Political party database entity for SeaORM.
//!
//! The table is owned by the voting web application; only the columns the
//! maintenance tooling reads or writes are mapped.

use sea_orm::entity::prelude::*;

use crate::domain::Party;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "partido_politico")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre_partido", unique)]
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Party {
    fn from(model: Model) -> Self {
        Party {
            id: model.id,
            name: model.name,
            logo: model.logo,
        }
    }
}
