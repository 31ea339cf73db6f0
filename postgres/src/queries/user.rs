use travessia_core::{NewUser, Profile, UserId, error::error::UserNotFoundSnafu};

use crate::{PostgresAdapter, adapter::convert_models, error::Result, models::User};

impl PostgresAdapter {
    pub(crate) async fn user_impl(&self, id: &UserId) -> Result<Option<travessia_core::User>> {
        sqlx::query_as::<_, User>(
            r#"
SELECT
    user_id,
    email,
    display_name,
    profile
FROM
    users
WHERE
    user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(TryFrom::try_from)
        .transpose()
    }

    pub(crate) async fn users_impl(&self) -> Result<Vec<travessia_core::User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
SELECT
    user_id,
    email,
    display_name,
    profile
FROM
    users
ORDER BY
    user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        convert_models(users)
    }

    /// Creates the user on first login, the stored profile is kept on subsequent logins.
    pub(crate) async fn login_user_impl(&self, user: NewUser) -> Result<travessia_core::User> {
        let NewUser {
            id,
            email,
            display_name,
            profile,
        } = user;

        sqlx::query_as::<_, User>(
            r#"
INSERT INTO
    users (user_id, email, display_name, profile)
VALUES
    ($1, $2, $3, $4)
ON CONFLICT (user_id) DO UPDATE
SET
    email = EXCLUDED.email,
    display_name = EXCLUDED.display_name
RETURNING
    user_id,
    email,
    display_name,
    profile
            "#,
        )
        .bind(&id)
        .bind(email)
        .bind(display_name)
        .bind(profile.to_string())
        .fetch_one(&self.pool)
        .await?
        .try_into()
    }

    pub(crate) async fn update_user_profile_impl(
        &self,
        id: &UserId,
        profile: Profile,
    ) -> Result<travessia_core::User> {
        let user = sqlx::query_as::<_, User>(
            r#"
UPDATE users
SET
    profile = $2
WHERE
    user_id = $1
RETURNING
    user_id,
    email,
    display_name,
    profile
            "#,
        )
        .bind(id)
        .bind(profile.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match user {
            Some(u) => u.try_into(),
            None => Err(UserNotFoundSnafu { id: id.clone() }.build().into()),
        }
    }
}
