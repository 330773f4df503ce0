//! Integration tests for argument parsing and query commands.

use clap::Parser;
use gie_catalog::ApiFamily;
use gie_cli::cli::{CatalogKind, Cli, Command};
use gie_cli::commands::run_query;
use gie_client::ClientSettings;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("gie").chain(args.iter().copied())).unwrap()
}

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings::new("test-key")
        .with_root(ApiFamily::Agsi, &format!("{}/agsi/", server.uri()))
        .unwrap()
        .with_root(ApiFamily::Alsi, &format!("{}/alsi/", server.uri()))
        .unwrap()
}

#[test]
fn parses_catalog_command() {
    let cli = parse(&["catalog", "facilities", "--family", "alsi"]);
    let Command::Catalog(args) = &cli.command else {
        panic!("expected catalog command");
    };
    assert_eq!(args.kind, CatalogKind::Facilities);
    assert!(!cli.command.is_query());
}

#[test]
fn parses_window_flags() {
    let cli = parse(&[
        "storage",
        "--country",
        "BE",
        "--start",
        "2024-01-01",
        "--end",
        "2024-01-31",
        "--size",
        "10",
    ]);
    let Command::Storage(args) = &cli.command else {
        panic!("expected storage command");
    };
    let window = args.window.to_window();
    assert_eq!(window.start.map(|d| d.to_string()).as_deref(), Some("2024-01-01"));
    assert_eq!(window.size, Some(10));
    assert!(cli.command.is_query());
}

#[test]
fn rejects_malformed_date() {
    let result = Cli::try_parse_from(["gie", "storage", "--start", "01/02/2024"]);
    assert!(result.is_err());
}

#[tokio::test]
async fn storage_command_prints_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agsi/"))
        .and(query_param("country", "BE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gas_day": "2024-01-01",
            "data": [{"code": "BE", "full": "81.5"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = parse(&["storage", "--country", "BE"]);
    let output = run_query(settings(&server), &cli.command).await.unwrap();
    assert!(output.contains("gas_day"));
    assert!(output.contains("81.5"));
}

#[tokio::test]
async fn facility_command_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alsi/"))
        .and(query_param("facility", "21W0000000000451"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let cli = parse(&["facility", "dunkerque", "--family", "alsi", "--json"]);
    let output = run_query(settings(&server), &cli.command).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, json!({"data": []}));
}

#[tokio::test]
async fn missing_key_is_reported() {
    let cli = parse(&["listing"]);
    let err = run_query(ClientSettings::default(), &cli.command)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("API key is missing"));
}
