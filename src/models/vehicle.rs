use serde::{Deserialize, Serialize};

use super::{Entity, VehicleId};
use crate::constants::ERR_VEHICLE_NOT_FOUND;

/// Vehicle row (cost and length kept as text, e.g. "unknown")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost: String,
    pub length: String,
}

impl Entity for Vehicle {
    const TABLE: &'static str = "vehicles";
    const NOT_FOUND: &'static str = ERR_VEHICLE_NOT_FOUND;
}
