use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::Environment;

pub const AUTH_COOKIE: &str = "auth_token";

/// Encrypted-at-rest session cookie carrying the JWT.
///
/// `Secure` everywhere except development so local HTTP keeps working.
pub fn create_auth_cookie(
    token: String,
    environment: Environment,
    expiry_hours: i64,
) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .max_age(time::Duration::hours(expiry_hours))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(!environment.is_development())
        .build()
}

/// Cookie matching the auth cookie's name and path, for removal
pub fn auth_cookie_removal() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, "")).path("/").build()
}
