use reqwest::StatusCode;

use super::helper::test;

#[tokio::test]
async fn test_openapi_document_is_served_outside_production() {
    test(|helper| async move {
        let response = reqwest::get(format!("{}/api-doc/openapi.json", helper.address))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let doc: serde_json::Value = response.json().await.unwrap();
        assert!(doc["paths"]["/v1.0/vessel_records"].is_object());
        assert!(doc["components"]["securitySchemes"]["bearer"].is_object());
    })
    .await;
}
