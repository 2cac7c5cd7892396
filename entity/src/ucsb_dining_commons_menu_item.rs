use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ucsb_dining_commons_menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
