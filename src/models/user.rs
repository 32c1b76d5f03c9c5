use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

/// User row
///
/// The password column only ever holds an Argon2 PHC string and is never
/// serialized into API responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub is_active: bool,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}

/// Values needed to insert a user, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub surname: String,
    pub subscribed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_omits_password() {
        let user = User {
            id: UserId(1),
            email: "leia@alderaan.org".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            is_active: true,
            name: Some("Leia".to_string()),
            surname: Some("Organa".to_string()),
            subscribed_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["email"], "leia@alderaan.org");
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
        assert!(value["subscribed_at"].as_str().is_some());
    }
}
