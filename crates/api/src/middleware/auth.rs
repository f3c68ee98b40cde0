//! # Authentication Module
//!
//! Tokens are issued by the account service and only verified here. A valid
//! `Authorization: Bearer <jwt>` header yields an [`AuthUser`], which handlers
//! take as an ordinary extractor argument.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};
use eyre::{eyre, Result};
use gymflow_core::{errors::GymError, models::user::Role};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{middleware::error_handling::AppError, ApiState};

/// Claims carried by GymFlow access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Expiry as a unix timestamp; required by validation.
    pub exp: usize,
}

/// HS256 signer and verifier sharing one secret.
pub struct Jwt {
    jwt_decode: DecodingKey,
    jwt_encode: EncodingKey,
    validation: Validation,
    header: Header,
}

impl Jwt {
    pub fn new(secret: &str) -> Self {
        Jwt {
            jwt_decode: DecodingKey::from_secret(secret.as_bytes()),
            jwt_encode: EncodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            header: Header::default(),
        }
    }

    /// Decodes and validates the claims from an `Authorization` header value.
    pub fn claims<C: DeserializeOwned>(&self, header: &HeaderValue) -> Result<C> {
        let auth_key = header.to_str()?;
        let jwt = auth_key
            .strip_prefix("Bearer ")
            .ok_or_else(|| eyre!("No Bearer"))?;
        let token = jsonwebtoken::decode::<C>(jwt.trim(), &self.jwt_decode, &self.validation)?;
        Ok(token.claims)
    }

    pub fn make_jwt<C: Serialize>(&self, claims: &C) -> Result<String> {
        let key = jsonwebtoken::encode(&self.header, claims, &self.jwt_encode)?;
        Ok(key)
    }
}

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_trainer(&self) -> bool {
        self.role == Role::Trainer
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        AuthUser {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).ok_or_else(|| {
            AppError(GymError::Authentication("Access denied: missing bearer token".to_string()))
        })?;

        let claims: Claims = state.jwt.claims(header).map_err(|e| {
            AppError(GymError::Authentication(format!("Invalid token: {}", e)))
        })?;

        Ok(claims.into())
    }
}
