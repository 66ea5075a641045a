use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

/// Claims carried by a login token: the user's id and email plus the
/// validity window. Nothing in this service ever verifies these on a
/// subsequent request; the token lives entirely client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let jwt = &state.config.jwt;
        Self {
            encoding: EncodingKey::from_secret(jwt.secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt.secret.as_bytes()),
            ttl: Duration::from_secs(jwt.ttl_minutes * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: Uuid, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str, ttl_minutes: u64) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs(ttl_minutes * 60),
        }
    }

    #[test]
    fn sign_and_verify_preserves_identity_claims() {
        let keys = make_keys("dev-secret", 60);
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "a@b.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "a@b.com");
    }

    #[test]
    fn expiry_is_one_ttl_after_issue() {
        let keys = make_keys("dev-secret", 60);
        let token = keys.sign(Uuid::new_v4(), "a@b.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let signer = make_keys("secret-one", 60);
        let other = make_keys("secret-two", 60);
        let token = signer.sign(Uuid::new_v4(), "a@b.com").expect("sign");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys("dev-secret", 60);
        let now = OffsetDateTime::now_utc().unix_timestamp() as usize;
        let stale = Claims {
            sub: Uuid::new_v4(),
            email: "a@b.com".into(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &stale, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }
}
