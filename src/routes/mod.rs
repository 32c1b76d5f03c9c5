pub mod entities;
pub mod favorites;
pub mod health;
pub mod populate;
pub mod users;

pub use entities::{get_entity, list_entities};
pub use favorites::{add_favorite, list_favorites, list_user_favorites};
pub use health::{health_check, index};
pub use populate::populate;
pub use users::{create_user, delete_user, get_user, list_users};
