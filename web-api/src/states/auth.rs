use std::str::FromStr;

use jsonwebtoken::{
    Algorithm, DecodingKey, TokenData, Validation, decode, decode_header, jwk::JwkSet,
};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tracing::info;

use crate::{
    error::{
        JWTDecodeError, StartupError,
        jwt_decode_error::{MissingAlgorithmSnafu, MissingKeyIdSnafu, UnknownKeyIdSnafu},
        startup_error::FetchJwksSnafu,
    },
    settings::AuthSettings,
};

#[derive(Debug, Clone)]
pub struct AuthState {
    jwk_set: JwkSet,
    audience: String,
    issuer: Option<String>,
    admin_emails: Vec<String>,
}

impl AuthState {
    pub async fn new(settings: &AuthSettings) -> Result<Self, StartupError> {
        let jwk_set: JwkSet = reqwest::get(&settings.jwks_url)
            .await
            .and_then(|r| r.error_for_status())
            .context(FetchJwksSnafu {
                url: &settings.jwks_url,
            })?
            .json()
            .await
            .context(FetchJwksSnafu {
                url: &settings.jwks_url,
            })?;

        info!(keys = jwk_set.keys.len(), "fetched jwk set");

        Ok(Self::from_jwk_set(jwk_set, settings))
    }

    pub fn from_jwk_set(jwk_set: JwkSet, settings: &AuthSettings) -> Self {
        Self {
            jwk_set,
            audience: settings.audience.clone(),
            issuer: settings.issuer.clone(),
            admin_emails: settings.admin_emails.clone(),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<TokenData<T>, JWTDecodeError> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or_else(|| MissingKeyIdSnafu.build())?;

        let jwk = self
            .jwk_set
            .find(&kid)
            .ok_or_else(|| UnknownKeyIdSnafu { kid: &kid }.build())?;

        let key = DecodingKey::from_jwk(jwk)?;
        let mut validation = Validation::new(Algorithm::from_str(
            jwk.common
                .key_algorithm
                .ok_or_else(|| MissingAlgorithmSnafu.build())?
                .to_string()
                .as_str(),
        )?);
        validation.set_audience(&[&self.audience]);
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(decode(token, &key, &validation)?)
    }

    /// Whether users with this email start out as administrators.
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim();
        self.admin_emails
            .iter()
            .any(|e| e.trim().eq_ignore_ascii_case(email))
    }
}
