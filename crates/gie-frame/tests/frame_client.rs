//! Tabular client against a mock server.

use gie_client::{ApiFamily, ClientSettings, GieError, QueryWindow};
use gie_frame::{FrameError, GieFrameClient};
use polars::prelude::DataType;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GieFrameClient {
    let settings = ClientSettings::new("test-key")
        .with_root(ApiFamily::Agsi, &format!("{}/agsi/", server.uri()))
        .unwrap()
        .with_root(ApiFamily::Alsi, &format!("{}/alsi/", server.uri()))
        .unwrap();
    GieFrameClient::with_settings(settings).unwrap()
}

#[tokio::test]
async fn country_storage_frame_keeps_rows_and_gas_day() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agsi/"))
        .and(query_param("country", "BE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gas_day": "2024-01-01",
            "data": [
                {"code": "BE", "gasInStorage": "7.5", "full": "85.2"},
                {"code": "BE", "gasInStorage": "7.4", "full": "84.9"},
                {"code": "BE", "gasInStorage": "7.3", "full": "84.1"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let df = client(&server)
        .query_country_storage(ApiFamily::Agsi, Some("BE".into()), QueryWindow::new())
        .await
        .unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(df.get_column_names()[0].as_str(), "gas_day");
    assert_eq!(df.column("full").unwrap().dtype(), &DataType::Float64);
}

#[tokio::test]
async fn news_listing_is_not_coerced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alsi/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Maintenance", "volume": "n/a"}
        ])))
        .mount(&server)
        .await;

    let df = client(&server)
        .query_news_listing(ApiFamily::Alsi, None)
        .await
        .unwrap();
    assert_eq!(df.shape(), (1, 3));
    assert_eq!(df.column("volume").unwrap().dtype(), &DataType::String);
}

#[tokio::test]
async fn client_errors_pass_through() {
    let server = MockServer::start().await;

    let err = client(&server)
        .query_company(ApiFamily::Agsi, "no_such_company", QueryWindow::new())
        .await
        .unwrap_err();
    assert!(matches!(err, FrameError::Client(GieError::Lookup(_))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
