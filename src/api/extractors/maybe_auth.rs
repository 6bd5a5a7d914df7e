use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api::extractors::auth::decode_bearer;
use crate::domain::models::user::ActingUser;
use crate::state::AppState;

/// Walk-in guests book without an account; a missing or invalid token is
/// treated as an anonymous caller rather than rejected.
pub struct MaybeAuthUser(pub Option<ActingUser>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        Ok(MaybeAuthUser(
            decode_bearer(parts, &app_state.config.jwt_secret).ok(),
        ))
    }
}
