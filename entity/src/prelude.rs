pub use super::articles::Entity as Articles;
pub use super::help_request::Entity as HelpRequest;
pub use super::ucsb_dining_commons_menu_item::Entity as UcsbDiningCommonsMenuItem;
pub use super::ucsb_organization::Entity as UcsbOrganization;
pub use super::user::Entity as User;
