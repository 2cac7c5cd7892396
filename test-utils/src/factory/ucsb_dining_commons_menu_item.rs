//! Menu item factory for creating test dining commons menu item rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    dining_commons_code: String,
    name: String,
    station: String,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - dining_commons_code: `"carrillo"`
    /// - name: `"Dish {n}"`
    /// - station: `"entrees"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dining_commons_code: "carrillo".to_string(),
            name: format!("Dish {}", id),
            station: "entrees".to_string(),
        }
    }

    pub fn dining_commons_code(mut self, code: impl Into<String>) -> Self {
        self.dining_commons_code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the menu item row into the database.
    pub async fn build(self) -> Result<entity::ucsb_dining_commons_menu_item::Model, DbErr> {
        entity::ucsb_dining_commons_menu_item::ActiveModel {
            dining_commons_code: ActiveValue::Set(self.dining_commons_code),
            name: ActiveValue::Set(self.name),
            station: ActiveValue::Set(self.station),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values.
pub async fn create_menu_item(
    db: &DatabaseConnection,
) -> Result<entity::ucsb_dining_commons_menu_item::Model, DbErr> {
    MenuItemFactory::new(db).build().await
}
