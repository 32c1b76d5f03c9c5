use serde::{Deserialize, Serialize};

use super::{CharacterId, Entity};
use crate::constants::ERR_CHARACTER_NOT_FOUND;

/// Character row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
}

impl Entity for Character {
    const TABLE: &'static str = "characters";
    const NOT_FOUND: &'static str = ERR_CHARACTER_NOT_FOUND;
}
