/// Category tag stored for planet favorites
pub const CATEGORY_PLANET: &str = "planet";

// =============================================================================
// Error Messages
// =============================================================================

/// Returned when a favorite request is missing one of its fields
pub const ERR_INCOMPLETE_FAVORITE: &str = "Incomplete data: user_id, category and target_id are required";

/// Returned when a signup request is missing one of its fields
pub const ERR_INCOMPLETE_USER: &str = "Incomplete data: email, password and name are required";

/// Returned when a signup request carries an empty password
pub const ERR_PASSWORD_REQUIRED: &str = "Password is required";

/// Returned when a user id does not match any row
pub const ERR_USER_NOT_FOUND: &str = "User not found";

/// Returned when a character id does not match any row
pub const ERR_CHARACTER_NOT_FOUND: &str = "Character not found";

/// Returned when a planet id does not match any row, including favorite targets
pub const ERR_PLANET_NOT_FOUND: &str = "Planet not found";

/// Returned when a vehicle id does not match any row
pub const ERR_VEHICLE_NOT_FOUND: &str = "Vehicle not found";
