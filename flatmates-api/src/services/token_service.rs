use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use flatmates_shared::errors::{AppError, ErrorCode};
use flatmates_shared::types::auth::Claims;

/// Mint a session token for the given identity, valid for `ttl_secs`.
pub fn issue_token(user_id: &str, secret: &str, ttl_secs: i64) -> Result<String, AppError> {
    let claims = Claims::new(user_id.to_string(), ttl_secs);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("token encoding failed: {e}")))
}

/// Check a session token's signature and expiry and return its claims.
/// Stateless: no store lookup, no revocation list.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::new(ErrorCode::TokenExpired, "token has expired")
        }
        _ => AppError::new(ErrorCode::TokenInvalid, "invalid token"),
    })
}
