use travessia_core::{NewVessel, UpdateVessel, VesselId};

use crate::{
    PostgresAdapter,
    error::{Error, Result, is_unique_violation},
    models::Vessel,
};
use travessia_core::error::error::{VesselNameTakenSnafu, VesselNotFoundSnafu};

impl PostgresAdapter {
    pub(crate) async fn vessels_impl(&self) -> Result<Vec<travessia_core::Vessel>> {
        let vessels = sqlx::query_as::<_, Vessel>(
            r#"
SELECT
    vessel_id,
    name,
    created_at,
    created_by
FROM
    vessels
ORDER BY
    name COLLATE "C" ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vessels.into_iter().map(From::from).collect())
    }

    pub(crate) async fn vessel_impl(&self, id: VesselId) -> Result<Option<travessia_core::Vessel>> {
        let vessel = sqlx::query_as::<_, Vessel>(
            r#"
SELECT
    vessel_id,
    name,
    created_at,
    created_by
FROM
    vessels
WHERE
    vessel_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vessel.map(From::from))
    }

    pub(crate) async fn add_vessel_impl(
        &self,
        vessel: NewVessel,
    ) -> Result<travessia_core::Vessel> {
        let NewVessel { name, created_by } = vessel;

        let vessel = sqlx::query_as::<_, Vessel>(
            r#"
INSERT INTO
    vessels (name, created_by)
VALUES
    ($1, $2)
RETURNING
    vessel_id,
    name,
    created_at,
    created_by
            "#,
        )
        .bind(name.as_str())
        .bind(&created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| name_taken_or(e, name.as_str()))?;

        Ok(vessel.into())
    }

    pub(crate) async fn update_vessel_impl(
        &self,
        vessel: UpdateVessel,
    ) -> Result<travessia_core::Vessel> {
        let UpdateVessel { id, name } = vessel;

        let vessel = sqlx::query_as::<_, Vessel>(
            r#"
UPDATE vessels
SET
    name = $2
WHERE
    vessel_id = $1
RETURNING
    vessel_id,
    name,
    created_at,
    created_by
            "#,
        )
        .bind(id)
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| name_taken_or(e, name.as_str()))?;

        match vessel {
            Some(v) => Ok(v.into()),
            None => Err(VesselNotFoundSnafu { id }.build().into()),
        }
    }

    pub(crate) async fn delete_vessel_impl(&self, id: VesselId) -> Result<()> {
        let result = sqlx::query(
            r#"
DELETE FROM vessels
WHERE
    vessel_id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(VesselNotFoundSnafu { id }.build().into());
        }

        Ok(())
    }
}

#[track_caller]
fn name_taken_or(error: sqlx::Error, name: &str) -> Error {
    if is_unique_violation(&error) {
        VesselNameTakenSnafu { name }.build().into()
    } else {
        error.into()
    }
}

