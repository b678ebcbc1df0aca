use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::ApiError,
    validation::{explicitly_trimmed, first_field_error, required_strings},
};

/// A validated registration request.
///
/// `name` is stored trimmed; `username` and `password` are rejected rather
/// than trimmed, since they are used verbatim at login.
#[derive(Debug, Clone, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub username: String,
    // bcrypt ignores everything past 72 bytes
    #[validate(length(min = 10, max = 72))]
    pub password: String,
}

impl RegisterRequest {
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let [username, password, name] = required_strings(body, ["username", "password", "name"])?;

        explicitly_trimmed("username", username)?;
        explicitly_trimmed("password", password)?;

        let request = Self {
            name: name.trim().to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };

        request
            .validate()
            .map_err(|errors| first_field_error(&errors, &["name", "username", "password"]))?;

        Ok(request)
    }
}

/// Public user fields
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub username: String,
}
