use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tracing::Span;

use crate::domain::models::user::{ActingUser, Claims};
use crate::error::AppError;
use crate::state::AppState;

pub struct AuthUser(pub ActingUser);

/// Role-based access is enforced entirely at the API layer; the booking
/// core never consults roles.
pub fn require_role(user: &ActingUser, roles: &[&str]) -> Result<(), AppError> {
    if roles.contains(&user.role.as_str()) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "Requires one of roles: {}",
            roles.join(", ")
        )))
    }
}

pub(crate) fn decode_bearer(parts: &Parts, jwt_secret: &str) -> Result<ActingUser, AppError> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;

    let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AppError::Unauthorized)?;

    Ok(ActingUser::from(token_data.claims))
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let user = decode_bearer(parts, &app_state.config.jwt_secret)?;

        Span::current().record("user_id", user.id.as_str());

        Ok(AuthUser(user))
    }
}
