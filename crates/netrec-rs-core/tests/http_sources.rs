//! Remote record sources against a mock HTTP server.

use mockito::Server;
use netrec_rs_core::{
    DatasetLoader, JsonSource, LoadError, RecordSource, ResourceLocation, SpreadsheetSource,
};
use netrec_rs_test_utils::{emily_dataset, workbook_bytes};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn location(server: &Server, path: &str) -> ResourceLocation {
    ResourceLocation::parse(&format!("{}{}", server.url(), path))
}

#[tokio::test]
async fn json_source_fetches_over_http() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/networking_data.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&emily_dataset()).expect("json"))
        .create_async()
        .await;

    let source = JsonSource::new(location(&server, "/data/networking_data.json"));
    let dataset = source.fetch().await.expect("dataset");
    assert_eq!(dataset, emily_dataset());
}

#[tokio::test]
async fn non_ok_status_is_a_load_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/data/networking_data.json")
        .with_status(404)
        .create_async()
        .await;

    let source = JsonSource::new(location(&server, "/data/networking_data.json"));
    let err = source.fetch().await.expect_err("404");
    match err {
        LoadError::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("expected HttpStatus, got: {other:?}"),
    }

    let outcome = DatasetLoader::new(Arc::new(source)).load().await;
    assert!(outcome.is_fallback());
    assert_eq!(
        outcome.advisory.as_deref(),
        Some("Using sample data. JSON file could not be loaded.")
    );
}

#[tokio::test]
async fn spreadsheet_source_fetches_over_http() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/book.xlsx")
        .with_status(200)
        .with_body(workbook_bytes(&[
            &["Full Name", "recommended_name_1"],
            &["Jenna Ortiz", "Matt Landers"],
        ]))
        .create_async()
        .await;

    let source = SpreadsheetSource::new(location(&server, "/book.xlsx"));
    let dataset = source.fetch().await.expect("dataset");
    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.records()[0].recommended_name_1.as_deref(),
        Some("Matt Landers")
    );
}
