use reqwest::StatusCode;
use travessia_core::{UserId, VesselId, WebApiOutboundPort};
use web_api::error::ErrorDiscriminants;

use super::{helper::test, test_client::ADMIN_ID};

#[tokio::test]
async fn test_vessels_are_empty_initially() {
    test(|mut helper| async move {
        helper.app.login_guest();
        assert!(helper.app.get_vessels().await.unwrap().is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_admin_can_register_vessels_and_they_are_sorted_by_name() {
    test(|mut helper| async move {
        helper.app.login_admin();

        let created = helper.app.create_vessel("  Netuno ").await.unwrap();
        assert_eq!(created.name, "Netuno");
        assert_eq!(created.created_by, UserId::new(ADMIN_ID));

        helper.app.create_vessel("Aurora").await.unwrap();
        helper.app.create_vessel("Mar Azul").await.unwrap();

        helper.app.login_guest();
        let names: Vec<_> = helper
            .app
            .get_vessels()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["Aurora", "Mar Azul", "Netuno"]);
    })
    .await;
}

#[tokio::test]
async fn test_guests_cannot_register_vessels() {
    test(|mut helper| async move {
        helper.app.login_guest();

        let error = helper.app.create_vessel("Aurora").await.unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.error, ErrorDiscriminants::Forbidden);
        assert!(helper.db.vessels().await.unwrap().is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_vessel_names_are_unique_ignoring_case() {
    test(|mut helper| async move {
        helper.app.login_admin();
        helper.app.create_vessel("Aurora").await.unwrap();

        let error = helper.app.create_vessel(" AURORA").await.unwrap_err();
        assert_eq!(error.status, StatusCode::CONFLICT);
        assert_eq!(error.error, ErrorDiscriminants::VesselNameTaken);
    })
    .await;
}

#[tokio::test]
async fn test_blank_vessel_name_is_rejected() {
    test(|mut helper| async move {
        helper.app.login_admin();

        let error = helper.app.create_vessel("   ").await.unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, ErrorDiscriminants::Validation);
    })
    .await;
}

#[tokio::test]
async fn test_admin_can_rename_a_vessel() {
    test(|mut helper| async move {
        helper.app.login_admin();
        let vessel = helper.app.create_vessel("Aurora").await.unwrap();

        let renamed = helper.app.update_vessel(vessel.id, "Aurora II").await.unwrap();
        assert_eq!(renamed.id, vessel.id);
        assert_eq!(renamed.name, "Aurora II");

        let vessels = helper.app.get_vessels().await.unwrap();
        assert_eq!(vessels, vec![renamed]);
    })
    .await;
}

#[tokio::test]
async fn test_renaming_a_vessel_to_its_own_name_is_allowed() {
    test(|mut helper| async move {
        helper.app.login_admin();
        let vessel = helper.app.create_vessel("Aurora").await.unwrap();

        let renamed = helper.app.update_vessel(vessel.id, "AURORA").await.unwrap();
        assert_eq!(renamed.name, "AURORA");
    })
    .await;
}

#[tokio::test]
async fn test_renaming_to_a_taken_name_conflicts() {
    test(|mut helper| async move {
        helper.app.login_admin();
        helper.app.create_vessel("Aurora").await.unwrap();
        let vessel = helper.app.create_vessel("Netuno").await.unwrap();

        let error = helper
            .app
            .update_vessel(vessel.id, "aurora")
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::CONFLICT);
    })
    .await;
}

#[tokio::test]
async fn test_rename_of_unknown_vessel_returns_not_found() {
    test(|mut helper| async move {
        helper.app.login_admin();

        let error = helper
            .app
            .update_vessel(VesselId::new(42), "Aurora")
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.error, ErrorDiscriminants::VesselNotFound);
    })
    .await;
}

#[tokio::test]
async fn test_admin_can_delete_a_vessel() {
    test(|mut helper| async move {
        helper.app.login_admin();
        let vessel = helper.app.create_vessel("Aurora").await.unwrap();

        helper.app.delete_vessel(vessel.id).await.unwrap();
        assert!(helper.app.get_vessels().await.unwrap().is_empty());

        let error = helper.app.delete_vessel(vessel.id).await.unwrap_err();
        assert_eq!(error.status, StatusCode::NOT_FOUND);
    })
    .await;
}

#[tokio::test]
async fn test_guests_cannot_delete_vessels() {
    test(|mut helper| async move {
        helper.app.login_admin();
        let vessel = helper.app.create_vessel("Aurora").await.unwrap();

        helper.app.login_guest();
        let error = helper.app.delete_vessel(vessel.id).await.unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(helper.app.get_vessels().await.unwrap().len(), 1);
    })
    .await;
}

#[tokio::test]
async fn test_invalid_vessel_id_is_a_bad_request() {
    test(|mut helper| async move {
        helper.app.login_admin();

        let response = helper
            .app
            .do_request(
                "vessels/not-a-number",
                reqwest::Method::DELETE,
                (),
                None::<()>,
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    })
    .await;
}
