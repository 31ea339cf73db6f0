use sqlx::FromRow;
use travessia_core::{Profile, UserId};

use crate::error::{Error, error::ConversionSnafu};

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub profile: String,
}

impl TryFrom<User> for travessia_core::User {
    type Error = Error;

    fn try_from(v: User) -> Result<Self, Self::Error> {
        let profile = v
            .profile
            .parse::<Profile>()
            .map_err(|_| ConversionSnafu { value: v.profile.clone() }.build())?;

        Ok(Self {
            id: v.user_id,
            email: v.email,
            display_name: v.display_name,
            profile,
        })
    }
}
