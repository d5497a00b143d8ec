use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claim set embedded in a session token: the user identity plus issue and
/// expiry timestamps. Tokens are stateless and verifiable without a store
/// lookup; there is no revocation before expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: String, duration_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user_id,
            iat: now,
            exp: now + duration_secs,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_claims_are_not_expired() {
        let claims = Claims::new("some-user".into(), 3600);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn past_expiry_is_detected() {
        let mut claims = Claims::new("some-user".into(), 3600);
        claims.exp = claims.iat - 1;
        assert!(claims.is_expired());
    }
}
