use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};
use serde::{Deserialize, Serialize};
use snafu::IntoError;
use travessia_core::{NewUser, Profile, User, UserId};

use crate::{
    Database,
    error::{
        Error, Result,
        error::{ForbiddenSnafu, MissingJWTSnafu, UnexpectedSnafu},
    },
    extractors::BearerToken,
    states::AuthState,
};

/// Claims read from the identity provider's token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The caller identity of an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthProfile {
    user: NewUser,
}

impl AuthProfile {
    pub fn id(&self) -> &UserId {
        &self.user.id
    }

    /// Creates or refreshes the stored user and returns it with its current profile.
    pub async fn login<T: Database>(self, db: &T) -> Result<User> {
        Ok(db.login_user(self.user).await?)
    }

    /// Like [`AuthProfile::login`], but fails with `Forbidden` for non-admins.
    pub async fn login_admin<T: Database>(self, db: &T) -> Result<User> {
        let user = self.login(db).await?;
        if !user.is_admin() {
            return ForbiddenSnafu.fail();
        }
        Ok(user)
    }

    fn from_request_impl(req: &HttpRequest) -> Result<Self> {
        let Some(auth_state) = req.app_data::<Data<AuthState>>() else {
            return Err(UnexpectedSnafu.into_error("auth state is not configured".into()));
        };

        let token = BearerToken::from_headers(req.headers())?
            .ok_or_else(|| MissingJWTSnafu.build())?;

        let claims = auth_state.decode::<AuthClaims>(token.token())?.claims;

        let profile = match &claims.email {
            Some(email) if auth_state.is_admin_email(email) => Profile::Admin,
            _ => Profile::Guest,
        };

        Ok(Self {
            user: NewUser {
                id: UserId::new(claims.sub),
                email: claims.email,
                display_name: claims.name,
                profile,
            },
        })
    }
}

impl FromRequest for AuthProfile {
    type Error = Error;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_impl(req))
    }
}
