use anyhow::bail;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: usize,
}

/// Claims carried by a password reset token. Kept apart from [`Claims`] so a
/// session token can never pass as a reset token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetClaims {
    pub sub: i64,
    pub purpose: String,
    pub exp: usize,
}

pub const RESET_PURPOSE: &str = "password_reset";

const RESET_TOKEN_TTL: i64 = 1800;

pub fn create_reset_token(user_id: i64, secret: &str) -> Result<String, anyhow::Error> {
    let claims = ResetClaims {
        sub: user_id,
        purpose: RESET_PURPOSE.to_string(),
        exp: (chrono::Utc::now().timestamp() + RESET_TOKEN_TTL) as usize,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Returns the profile id the token was minted for.
pub fn verify_reset_token(token: &str, secret: &str) -> Result<i64, anyhow::Error> {
    let data = jsonwebtoken::decode::<ResetClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    if data.claims.purpose != RESET_PURPOSE {
        bail!("not a password reset token");
    }

    Ok(data.claims.sub)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reset_token_round_trip() {
        let token = create_reset_token(42, "secret").unwrap();

        let sub = verify_reset_token(&token, "secret").unwrap();
        assert_eq!(sub, 42);
    }

    #[test]
    fn test_reset_token_rejects_wrong_secret() {
        let token = create_reset_token(42, "secret").unwrap();

        assert!(verify_reset_token(&token, "other secret").is_err());
    }

    #[test]
    fn test_reset_token_rejects_session_token() {
        let claims = Claims {
            sub: 42,
            username: "yuki".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_bytes()),
        )
        .unwrap();

        assert!(verify_reset_token(&token, "secret").is_err());
    }

    #[test]
    fn test_reset_token_expires() {
        let claims = ResetClaims {
            sub: 42,
            purpose: RESET_PURPOSE.to_string(),
            exp: (chrono::Utc::now().timestamp() - 3600) as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_bytes()),
        )
        .unwrap();

        assert!(verify_reset_token(&token, "secret").is_err());
    }
}
