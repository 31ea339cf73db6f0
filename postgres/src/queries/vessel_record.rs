use travessia_core::{
    NewVesselRecord, UpdateVesselRecord, VesselRecordId, VesselRecordsQuery,
    error::error::VesselRecordNotFoundSnafu,
};

use crate::{
    PostgresAdapter,
    adapter::convert_models,
    error::Result,
    models::VesselRecord,
};

impl PostgresAdapter {
    pub(crate) async fn vessel_records_impl(
        &self,
        query: VesselRecordsQuery,
    ) -> Result<Vec<travessia_core::VesselRecord>> {
        let VesselRecordsQuery {
            start_date,
            end_date,
            operation_type,
        } = query;

        let records = sqlx::query_as::<_, VesselRecord>(
            r#"
SELECT
    vessel_record_id,
    vessel_name,
    operation_type,
    date,
    time,
    passengers,
    created_at,
    created_by
FROM
    vessel_records
WHERE
    (
        $1::DATE IS NULL
        OR date >= $1
    )
    AND (
        $2::DATE IS NULL
        OR date <= $2
    )
    AND (
        $3::TEXT IS NULL
        OR operation_type = $3
    )
ORDER BY
    date DESC,
    time DESC,
    vessel_record_id ASC
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .bind(operation_type.map(|o| o.to_string()))
        .fetch_all(&self.pool)
        .await?;

        convert_models(records)
    }

    pub(crate) async fn vessel_record_impl(
        &self,
        id: VesselRecordId,
    ) -> Result<Option<travessia_core::VesselRecord>> {
        sqlx::query_as::<_, VesselRecord>(
            r#"
SELECT
    vessel_record_id,
    vessel_name,
    operation_type,
    date,
    time,
    passengers,
    created_at,
    created_by
FROM
    vessel_records
WHERE
    vessel_record_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(TryFrom::try_from)
        .transpose()
    }

    pub(crate) async fn add_vessel_record_impl(
        &self,
        record: NewVesselRecord,
    ) -> Result<travessia_core::VesselRecord> {
        let NewVesselRecord {
            vessel_name,
            operation_type,
            date,
            time,
            passengers,
            created_by,
        } = record;

        sqlx::query_as::<_, VesselRecord>(
            r#"
INSERT INTO
    vessel_records (
        vessel_name,
        operation_type,
        date,
        time,
        passengers,
        created_by
    )
VALUES
    ($1, $2, $3, $4, $5, $6)
RETURNING
    vessel_record_id,
    vessel_name,
    operation_type,
    date,
    time,
    passengers,
    created_at,
    created_by
            "#,
        )
        .bind(vessel_name.as_str())
        .bind(operation_type.to_string())
        .bind(date)
        .bind(time)
        .bind(passengers as i32)
        .bind(&created_by)
        .fetch_one(&self.pool)
        .await?
        .try_into()
    }

    pub(crate) async fn update_vessel_record_impl(
        &self,
        record: UpdateVesselRecord,
    ) -> Result<travessia_core::VesselRecord> {
        let UpdateVesselRecord {
            id,
            vessel_name,
            operation_type,
            date,
            time,
            passengers,
        } = record;

        let record = sqlx::query_as::<_, VesselRecord>(
            r#"
UPDATE vessel_records
SET
    vessel_name = $2,
    operation_type = $3,
    date = $4,
    time = $5,
    passengers = $6
WHERE
    vessel_record_id = $1
RETURNING
    vessel_record_id,
    vessel_name,
    operation_type,
    date,
    time,
    passengers,
    created_at,
    created_by
            "#,
        )
        .bind(id)
        .bind(vessel_name.as_str())
        .bind(operation_type.to_string())
        .bind(date)
        .bind(time)
        .bind(passengers as i32)
        .fetch_optional(&self.pool)
        .await?;

        match record {
            Some(r) => r.try_into(),
            None => Err(VesselRecordNotFoundSnafu { id }.build().into()),
        }
    }

    pub(crate) async fn delete_vessel_record_impl(&self, id: VesselRecordId) -> Result<()> {
        let result = sqlx::query(
            r#"
DELETE FROM vessel_records
WHERE
    vessel_record_id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(VesselRecordNotFoundSnafu { id }.build().into());
        }

        Ok(())
    }
}
