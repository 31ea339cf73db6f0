use chrono::{NaiveDate, NaiveTime};
use reqwest::{Method, StatusCode};
use serde_json::json;
use travessia_core::{OperationType, UserId, VesselRecordId, VesselRecordInput};
use web_api::{error::ErrorDiscriminants, routes::v1::vessel_record::VesselRecordsParams};

use super::{
    helper::test,
    test_client::GUEST_ID,
};

fn input(
    date: (i32, u32, u32),
    time: (u32, u32),
    operation_type: OperationType,
) -> VesselRecordInput {
    VesselRecordInput {
        vessel_name: "Aurora".into(),
        operation_type,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
        passengers: 10,
    }
}

fn embarque(date: (i32, u32, u32), time: (u32, u32)) -> VesselRecordInput {
    input(date, time, OperationType::Embarque)
}

fn desembarque(date: (i32, u32, u32), time: (u32, u32)) -> VesselRecordInput {
    input(date, time, OperationType::Desembarque)
}

#[tokio::test]
async fn test_guest_can_create_a_record() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let mut record = embarque((2024, 3, 10), (8, 30));
        record.vessel_name = "  Aurora ".into();
        record.passengers = 42;

        let created = helper.app.create_vessel_record(&record).await.unwrap();
        assert_eq!(created.vessel_name, "Aurora");
        assert_eq!(created.passengers, 42);
        assert_eq!(created.created_by, UserId::new(GUEST_ID));

        let records = helper
            .app
            .get_vessel_records(Default::default())
            .await
            .unwrap();
        assert_eq!(records, vec![created]);
    })
    .await;
}

#[tokio::test]
async fn test_record_time_is_returned_as_hours_and_minutes() {
    test(|mut helper| async move {
        helper.app.login_guest();
        helper
            .app
            .create_vessel_record(&embarque((2024, 3, 10), (8, 5)))
            .await
            .unwrap();

        let response = helper
            .app
            .do_request("vessel_records", Method::GET, (), None::<()>)
            .await;
        let body: serde_json::Value = response.json().await.unwrap();

        assert_eq!(body[0]["time"], "08:05");
        assert_eq!(body[0]["date"], "2024-03-10");
        assert_eq!(body[0]["operationType"], "embarque");
    })
    .await;
}

#[tokio::test]
async fn test_records_are_sorted_most_recent_first() {
    test(|mut helper| async move {
        helper.app.login_guest();

        for record in [
            embarque((2024, 3, 10), (8, 0)),
            embarque((2024, 3, 12), (7, 0)),
            embarque((2024, 3, 10), (18, 0)),
        ] {
            helper.app.create_vessel_record(&record).await.unwrap();
        }

        let records = helper
            .app
            .get_vessel_records(Default::default())
            .await
            .unwrap();

        let order: Vec<_> = records.iter().map(|r| (r.date, r.time)).collect();
        assert_eq!(
            order,
            [
                (
                    NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                    NaiveTime::from_hms_opt(7, 0, 0).unwrap()
                ),
                (
                    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                    NaiveTime::from_hms_opt(18, 0, 0).unwrap()
                ),
                (
                    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
                ),
            ]
        );
    })
    .await;
}

#[tokio::test]
async fn test_records_can_be_filtered_by_date_range_and_operation_type() {
    test(|mut helper| async move {
        helper.app.login_guest();

        for record in [
            embarque((2024, 3, 1), (8, 0)),
            desembarque((2024, 3, 5), (8, 0)),
            embarque((2024, 3, 10), (8, 0)),
            embarque((2024, 3, 20), (8, 0)),
        ] {
            helper.app.create_vessel_record(&record).await.unwrap();
        }

        let records = helper
            .app
            .get_vessel_records(VesselRecordsParams {
                start_date: NaiveDate::from_ymd_opt(2024, 3, 5),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 10),
                operation_type: None,
            })
            .await
            .unwrap();
        assert_eq!(records.len(), 2);

        let records = helper
            .app
            .get_vessel_records(VesselRecordsParams {
                start_date: NaiveDate::from_ymd_opt(2024, 3, 5),
                end_date: None,
                operation_type: Some(OperationType::Embarque),
            })
            .await
            .unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2024-03-20", "2024-03-10"]);
    })
    .await;
}

#[tokio::test]
async fn test_start_date_after_end_date_is_rejected() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let error = helper
            .app
            .get_vessel_records(VesselRecordsParams {
                start_date: NaiveDate::from_ymd_opt(2024, 3, 10),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                operation_type: None,
            })
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, ErrorDiscriminants::StartAfterEnd);
    })
    .await;
}

#[tokio::test]
async fn test_negative_passengers_are_rejected() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let mut record = embarque((2024, 3, 10), (8, 0));
        record.passengers = -1;

        let error = helper.app.create_vessel_record(&record).await.unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, ErrorDiscriminants::Validation);
    })
    .await;
}

#[tokio::test]
async fn test_zero_passengers_are_accepted() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let mut record = embarque((2024, 3, 10), (8, 0));
        record.passengers = 0;

        let created = helper.app.create_vessel_record(&record).await.unwrap();
        assert_eq!(created.passengers, 0);
    })
    .await;
}

#[tokio::test]
async fn test_blank_vessel_name_is_rejected() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let mut record = embarque((2024, 3, 10), (8, 0));
        record.vessel_name = " ".into();

        let error = helper.app.create_vessel_record(&record).await.unwrap_err();
        assert_eq!(error.error, ErrorDiscriminants::Validation);
    })
    .await;
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let response = helper
            .app
            .do_request(
                "vessel_records",
                Method::POST,
                json!({
                    "vesselName": "Aurora",
                    "operationType": "transbordo",
                    "date": "2024-03-10",
                    "time": "08:00",
                    "passengers": 3,
                }),
                None::<()>,
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = helper
            .app
            .do_request(
                "vessel_records",
                Method::POST,
                json!({
                    "vesselName": "Aurora",
                    "operationType": "embarque",
                    "date": "2024-03-10",
                    "time": "25:99",
                    "passengers": 3,
                }),
                None::<()>,
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    })
    .await;
}

#[tokio::test]
async fn test_creator_can_update_and_delete_own_record() {
    test(|mut helper| async move {
        helper.app.login_guest();
        let created = helper
            .app
            .create_vessel_record(&embarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap();

        let mut update = desembarque((2024, 3, 11), (9, 15));
        update.vessel_name = "Netuno".into();
        update.passengers = 7;

        let updated = helper
            .app
            .update_vessel_record(created.id, &update)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.vessel_name, "Netuno");
        assert_eq!(updated.operation_type, OperationType::Desembarque);
        assert_eq!(updated.passengers, 7);
        assert_eq!(updated.created_by, UserId::new(GUEST_ID));

        helper.app.delete_vessel_record(created.id).await.unwrap();
        assert!(
            helper
                .app
                .get_vessel_records(Default::default())
                .await
                .unwrap()
                .is_empty()
        );
    })
    .await;
}

#[tokio::test]
async fn test_other_guests_cannot_modify_a_record() {
    test(|mut helper| async move {
        helper.app.login_guest();
        let created = helper
            .app
            .create_vessel_record(&embarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap();

        helper.app.login_as("other-user", "other@travessia.test");

        let error = helper
            .app
            .update_vessel_record(created.id, &desembarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);

        let error = helper
            .app
            .delete_vessel_record(created.id)
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);

        let records = helper
            .app
            .get_vessel_records(Default::default())
            .await
            .unwrap();
        assert_eq!(records, vec![created]);
    })
    .await;
}

#[tokio::test]
async fn test_admin_can_modify_any_record() {
    test(|mut helper| async move {
        helper.app.login_guest();
        let created = helper
            .app
            .create_vessel_record(&embarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap();

        helper.app.login_admin();
        let updated = helper
            .app
            .update_vessel_record(created.id, &desembarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap();
        assert_eq!(updated.operation_type, OperationType::Desembarque);
        assert_eq!(updated.created_by, UserId::new(GUEST_ID));

        helper.app.delete_vessel_record(created.id).await.unwrap();
    })
    .await;
}

#[tokio::test]
async fn test_modifying_unknown_record_returns_not_found() {
    test(|mut helper| async move {
        helper.app.login_admin();

        let id = VesselRecordId::new(99);
        let error = helper
            .app
            .update_vessel_record(id, &embarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.error, ErrorDiscriminants::VesselRecordNotFound);

        let error = helper.app.delete_vessel_record(id).await.unwrap_err();
        assert_eq!(error.status, StatusCode::NOT_FOUND);
    })
    .await;
}

#[tokio::test]
async fn test_records_require_a_token() {
    test(|helper| async move {
        let error = helper
            .app
            .get_vessel_records(Default::default())
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
    })
    .await;
}

#[tokio::test]
async fn test_renaming_or_deleting_a_vessel_keeps_record_names() {
    test(|mut helper| async move {
        helper.app.login_admin();
        let vessel = helper.app.create_vessel("Aurora").await.unwrap();
        let created = helper
            .app
            .create_vessel_record(&embarque((2024, 3, 10), (8, 0)))
            .await
            .unwrap();

        helper
            .app
            .update_vessel(vessel.id, "Aurora II")
            .await
            .unwrap();
        let records = helper
            .app
            .get_vessel_records(Default::default())
            .await
            .unwrap();
        assert_eq!(records, vec![created.clone()]);

        helper.app.delete_vessel(vessel.id).await.unwrap();

        let response = helper
            .app
            .do_request("vessel_records", Method::GET, (), None::<()>)
            .await;
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["vesselName"], "Aurora");
        assert_eq!(body[0]["id"], json!(created.id));
    })
    .await;
}

#[tokio::test]
async fn test_records_with_the_same_date_and_time_keep_insertion_order() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let mut ids = Vec::new();
        for _ in 0..3 {
            let created = helper
                .app
                .create_vessel_record(&embarque((2024, 3, 10), (8, 0)))
                .await
                .unwrap();
            ids.push(created.id);
        }

        let records = helper
            .app
            .get_vessel_records(Default::default())
            .await
            .unwrap();
        let returned: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(returned, ids);
    })
    .await;
}
