//! Tests for the index and record CLI commands
//!
//! - ensure-index and seed
//! - save, get, update, delete in both output formats
//! - not-found and empty-update failures

use crate::common::{seeded_mock, MockElasticsearch, COMPANY_INDEX};
use company_search::cli::commands::config::{self, ConfigArgs};
use company_search::cli::commands::index::{execute, execute_seed, IndexArgs, SeedArgs};
use company_search::cli::commands::record::{
    execute_delete, execute_get, execute_save, execute_update, DeleteArgs, GetArgs, SaveArgs,
    UpdateArgs,
};
use company_search::cli::OutputFormat;
use company_search::core::types::Company;

fn save_args(name: &str) -> SaveArgs {
    SaveArgs {
        name: name.to_string(),
        age: 30,
        designation: "Eng".to_string(),
        experience: 5,
        salary: 100_000,
    }
}

fn no_changes(id: &str) -> UpdateArgs {
    UpdateArgs {
        id: id.to_string(),
        name: None,
        age: None,
        designation: None,
        experience: None,
        salary: None,
    }
}

#[tokio::test]
async fn test_ensure_index_both_formats() {
    let mock = MockElasticsearch::start().await;
    let services = mock.services();

    let result = execute(IndexArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "ensure-index failed: {:?}", result.err());
    let result = execute(IndexArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "second ensure-index failed: {:?}", result.err());
    assert!(mock.has_index(COMPANY_INDEX));
}

#[tokio::test]
async fn test_seed_with_ensure_index() {
    let mock = MockElasticsearch::start().await;
    let services = mock.services();

    let args = SeedArgs { ensure_index: true };
    let result = execute_seed(args, &services, OutputFormat::Human).await;

    assert!(result.is_ok(), "seed failed: {:?}", result.err());
    assert!(mock.has_index(COMPANY_INDEX));
    assert_eq!(mock.document_count(COMPANY_INDEX), 2);
}

#[tokio::test]
async fn test_seed_reports_rejected_records() {
    let (mock, services) = seeded_mock(&[]).await;
    mock.reject_name("Name1");

    let args = SeedArgs { ensure_index: false };
    let result = execute_seed(args, &services, OutputFormat::Json).await;

    assert!(result.is_err());
    assert_eq!(mock.document_count(COMPANY_INDEX), 1);
}

#[tokio::test]
async fn test_save_then_get() {
    let (mock, services) = seeded_mock(&[]).await;

    let result = execute_save(save_args("Alice"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "save failed: {:?}", result.err());

    let id = mock.ids(COMPANY_INDEX).pop().unwrap();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = GetArgs { id: id.clone() };
        let result = execute_get(args, &services, format).await;
        assert!(result.is_ok(), "get failed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_get_missing_fails() {
    let (_mock, services) = seeded_mock(&[]).await;
    let args = GetArgs {
        id: "missing".to_string(),
    };
    assert!(execute_get(args, &services, OutputFormat::Human).await.is_err());
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let (mock, services) = seeded_mock(&[]).await;
    execute_save(save_args("Alice"), &services, OutputFormat::Json)
        .await
        .unwrap();
    let id = mock.ids(COMPANY_INDEX).pop().unwrap();

    let args = UpdateArgs {
        salary: Some(150_000),
        ..no_changes(&id)
    };
    let result = execute_update(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "update failed: {:?}", result.err());

    let stored: Company = serde_json::from_value(mock.document(COMPANY_INDEX, &id).unwrap()).unwrap();
    assert_eq!(stored, Company::new("Alice", 30, "Eng", 5, 150_000));
}

#[tokio::test]
async fn test_update_without_flags_fails() {
    let (_mock, services) = seeded_mock(&[]).await;
    let result = execute_update(no_changes("any"), &services, OutputFormat::Human).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Nothing to update"));
}

#[tokio::test]
async fn test_update_missing_fails() {
    let (_mock, services) = seeded_mock(&[]).await;
    let args = UpdateArgs {
        age: Some(40),
        ..no_changes("missing")
    };
    assert!(execute_update(args, &services, OutputFormat::Json).await.is_err());
}

#[tokio::test]
async fn test_delete_missing_is_not_an_error() {
    let (_mock, services) = seeded_mock(&[]).await;
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = DeleteArgs {
            id: "missing".to_string(),
        };
        assert!(execute_delete(args, &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_delete_existing() {
    let (mock, services) = seeded_mock(&[]).await;
    execute_save(save_args("Alice"), &services, OutputFormat::Json)
        .await
        .unwrap();
    let id = mock.ids(COMPANY_INDEX).pop().unwrap();

    let args = DeleteArgs { id };
    assert!(execute_delete(args, &services, OutputFormat::Human).await.is_ok());
    assert_eq!(mock.document_count(COMPANY_INDEX), 0);
}

#[tokio::test]
async fn test_show_config() {
    let mock = MockElasticsearch::start().await;
    let services = mock.services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        assert!(config::execute(ConfigArgs {}, &services, format).await.is_ok());
    }
}
