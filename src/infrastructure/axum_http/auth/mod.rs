use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::config_loader, domain::value_objects::enums::roles::UserRole};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

pub fn issue_token(user_id: Uuid, role: UserRole) -> anyhow::Result<String> {
    let auth_secret = config_loader::get_auth_secret()?;

    let exp = (Utc::now() + Duration::minutes(auth_secret.token_ttl_minutes)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth_secret.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn validate_token(token: &str) -> anyhow::Result<Claims> {
    let auth_secret = config_loader::get_auth_secret()?;

    let decoding_key = DecodingKey::from_secret(auth_secret.jwt_secret.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|err| anyhow::anyhow!("JWT validation failed: {}", err))?;

    Ok(token_data.claims)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing Authorization header".to_string(),
            ))?;

        let auth_str = auth_header.to_str().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header".to_string(),
            )
        })?;

        let token = auth_str.strip_prefix("Bearer ").ok_or((
            StatusCode::UNAUTHORIZED,
            "Invalid Authorization header format".to_string(),
        ))?;

        let claims = validate_token(token)
            .map_err(|err| (StatusCode::UNAUTHORIZED, err.to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid user ID in token".to_string(),
            )
        })?;

        let role = UserRole::from_str(&claims.role).ok_or((
            StatusCode::UNAUTHORIZED,
            "Invalid role in token".to_string(),
        ))?;

        Ok(AuthUser { user_id, role })
    }
}

#[cfg(test)]
mod tests;
