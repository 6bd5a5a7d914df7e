use serde::{Deserialize, Serialize};

/// JWT payload issued by the external identity service. The core only uses
/// it to attribute bookings and maintenance reports, never to gate the
/// booking logic itself.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct ActingUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<Claims> for ActingUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}
