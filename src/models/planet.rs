use serde::{Deserialize, Serialize};

use super::{Entity, PlanetId};
use crate::constants::ERR_PLANET_NOT_FOUND;

/// Planet row
///
/// `population` is text so sentinels such as "desconocida" survive as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
}

impl Entity for Planet {
    const TABLE: &'static str = "planets";
    const NOT_FOUND: &'static str = ERR_PLANET_NOT_FOUND;
}
