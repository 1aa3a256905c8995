//! Tests for layered configuration loading.

use super::*;
use crate::{DEFAULT_PLACEHOLDER, DatasetFormat};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write JSON5 contents to a path, creating parent directories if needed.
fn write_json5(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Options that ignore the real home directory.
fn isolated_options(cwd: &Path) -> LayeredConfigOptions {
    LayeredConfigOptions::new(cwd).with_user_path(None)
}

#[test]
fn parse_minimal_config() {
    let config = NetrecConfig::load_from_str("{}").expect("config");
    assert_eq!(config.dataset.location(), crate::DEFAULT_DATASET_PATH);
    assert_eq!(config.ui.placeholder, DEFAULT_PLACEHOLDER);
}

#[test]
fn rejects_unknown_top_level_key() {
    let err = NetrecConfig::load_from_str(r#"{ unexpected: true }"#).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("unknown key"), "{msg}");
}

#[test]
fn rejects_invalid_dataset_format() {
    let err = NetrecConfig::load_from_str(r#"{ dataset: { format: "csv" } }"#).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("dataset.format"), "{msg}");
}

#[test]
fn rejects_non_http_url() {
    let err =
        NetrecConfig::load_from_str(r#"{ dataset: { url: "ftp://host/data.json" } }"#).unwrap_err();
    assert!(format!("{err}").contains("dataset.url"));
}

#[test]
fn rejects_path_and_url_in_one_layer() {
    let err = NetrecConfig::load_from_str(
        r#"{ dataset: { path: "a.json", url: "https://example.com/a.json" } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn accepts_xlsx_alias_for_spreadsheet() {
    let config =
        NetrecConfig::load_from_str(r#"{ dataset: { path: "book.bin", format: "xlsx" } }"#)
            .expect("config");
    assert_eq!(config.dataset.resolved_format(), DatasetFormat::Spreadsheet);
}

#[test]
fn load_from_missing_path_reports_path() {
    let temp = TempDir::new().expect("tmp");
    let missing = temp.path().join("absent.json5");
    let err = NetrecConfig::load_from_path(&missing).unwrap_err();
    assert!(format!("{err}").contains("absent.json5"));
}

#[test]
fn layered_config_prefers_repo_over_cwd() {
    let temp = TempDir::new().expect("tmp");
    let root = temp.path();
    let project_root = root.join("project");
    fs::create_dir_all(project_root.join(".git")).expect("git");
    let cwd = project_root.join("subdir");
    fs::create_dir_all(&cwd).expect("cwd");

    let user_config = root.join("user.json5");
    write_json5(&user_config, r#"{ ui: { title: "user" } }"#);
    write_json5(
        &project_root.join(DEFAULT_CONFIG_FILE),
        r#"{ ui: { title: "project" } }"#,
    );
    write_json5(&cwd.join(DEFAULT_CONFIG_FILE), r#"{ ui: { title: "cwd" } }"#);
    write_json5(
        &project_root
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE),
        r#"{ ui: { title: "repo" } }"#,
    );

    let options = LayeredConfigOptions::new(&cwd).with_user_path(Some(user_config));
    let layered = NetrecConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.ui.title, "repo");
    let sources: Vec<ConfigLayerSource> =
        layered.layers.iter().map(|layer| layer.source).collect();
    assert_eq!(
        sources,
        vec![
            ConfigLayerSource::User,
            ConfigLayerSource::Project,
            ConfigLayerSource::Cwd,
            ConfigLayerSource::Repo,
        ]
    );
}

#[test]
fn runtime_layer_overrides_local_layers() {
    let temp = TempDir::new().expect("tmp");
    let cwd = temp.path().join("work");
    write_json5(
        &cwd.join(DEFAULT_CONFIG_FILE),
        r#"{ dataset: { path: "local.json" }, ui: { title: "local" } }"#,
    );
    let runtime = temp.path().join("runtime.json5");
    write_json5(
        &runtime,
        r#"{ dataset: { url: "https://example.com/networking_data.json" } }"#,
    );

    let options = isolated_options(&cwd).with_runtime_path(&runtime);
    let layered = NetrecConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.dataset.path, None);
    assert_eq!(
        layered.config.dataset.location(),
        "https://example.com/networking_data.json"
    );
    assert_eq!(layered.config.ui.title, "local");
}

#[test]
fn project_root_equal_to_cwd_loads_file_once() {
    let temp = TempDir::new().expect("tmp");
    let project_root = temp.path().join("project");
    fs::create_dir_all(project_root.join(".git")).expect("git");
    write_json5(
        &project_root.join(DEFAULT_CONFIG_FILE),
        r#"{ dataset: { path: "book.xlsx" } }"#,
    );

    let layered =
        NetrecConfig::load_layered_with_options(isolated_options(&project_root)).expect("layered");
    assert_eq!(layered.layers.len(), 1);
    assert_eq!(
        layered.config.dataset.resolved_format(),
        DatasetFormat::Spreadsheet
    );
}

#[test]
fn invalid_local_layer_names_its_source() {
    let temp = TempDir::new().expect("tmp");
    let cwd = temp.path().join("work");
    write_json5(&cwd.join(DEFAULT_CONFIG_FILE), r#"{ ui: { colour: "red" } }"#);

    let err = NetrecConfig::load_layered_with_options(isolated_options(&cwd)).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("cwd("), "{msg}");
    assert!(msg.contains("ui.colour"), "{msg}");
}

#[test]
fn missing_runtime_layer_is_an_error() {
    let temp = TempDir::new().expect("tmp");
    let options = isolated_options(temp.path()).with_runtime_path(temp.path().join("nope.json5"));
    let err = NetrecConfig::load_layered_with_options(options).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed { .. }));
}
