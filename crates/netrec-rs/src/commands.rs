//! Command implementations for the `netrec` binary.

use anyhow::Context;
use log::{debug, info};
use netrec_rs_config::{DatasetFormat, LayeredConfigOptions, NetrecConfig};
use netrec_rs_core::convert::spreadsheet_to_json;
use netrec_rs_core::lookup::NO_MATCH_MESSAGE;
use netrec_rs_core::{DatasetLoader, LoadOutcome, RecommendationResult, source_from_config};
use netrec_rs_tui::TuiConfig;
use std::io::Write;
use std::path::Path;

/// Dataset settings given on the command line; they win over every layer.
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    /// Path or URL of the dataset.
    pub source: Option<String>,
    pub format: Option<DatasetFormat>,
}

impl SourceOverrides {
    /// Apply the overrides to an effective config.
    pub fn apply(&self, config: &mut NetrecConfig) {
        if let Some(source) = &self.source {
            config.dataset.set_location(source.clone());
        }
        if let Some(format) = self.format {
            config.dataset.format = Some(format);
        }
    }
}

/// Load the layered config for `cwd`, with an optional runtime layer on top,
/// then apply command-line overrides.
pub fn resolve_config(
    cwd: &Path,
    runtime_config: Option<&Path>,
    overrides: &SourceOverrides,
) -> anyhow::Result<NetrecConfig> {
    let mut options = LayeredConfigOptions::new(cwd);
    if let Some(path) = runtime_config {
        options = options.with_runtime_path(path);
    }
    let layered = NetrecConfig::load_layered_with_options(options)
        .context("failed to load layered config")?;
    debug!("layered config loaded (layers={})", layered.layers.len());

    let mut config = layered.config;
    overrides.apply(&mut config);
    info!(
        "dataset resolved (location={}, format={:?})",
        config.dataset.location(),
        config.dataset.resolved_format()
    );
    Ok(config)
}

/// Build the one-shot loader for the configured dataset.
pub fn build_loader(config: &NetrecConfig) -> DatasetLoader {
    DatasetLoader::new(source_from_config(&config.dataset))
}

/// Render the answer to `query` over a loaded dataset.
///
/// Returns `None` for an empty query, the no-match message when nothing
/// matches, and the recommendations (plain text or JSON) otherwise.
pub fn find_report(
    outcome: &LoadOutcome,
    query: &str,
    json: bool,
) -> anyhow::Result<Option<String>> {
    if query.trim().is_empty() {
        return Ok(None);
    }
    let report = match RecommendationResult::search(&outcome.dataset, query) {
        Some(result) if json => serde_json::to_string_pretty(&result)?,
        Some(result) => result.to_string(),
        None => NO_MATCH_MESSAGE.to_string(),
    };
    Ok(Some(report))
}

/// Load the dataset, look up `query` and print the report.
///
/// The fallback advisory goes to `err`; the report goes to `out`.
pub async fn find(
    loader: &DatasetLoader,
    query: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    let outcome = loader.load().await;
    if let Some(advisory) = &outcome.advisory {
        writeln!(err, "{advisory}")?;
    }
    if let Some(report) = find_report(&outcome, query, json)? {
        writeln!(out, "{report}")?;
    }
    Ok(())
}

/// Convert the first sheet of a workbook into the JSON export.
pub fn convert(input: &Path, output: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let rows = spreadsheet_to_json(input, output).with_context(|| {
        format!(
            "failed to convert {} to {}",
            input.display(),
            output.display()
        )
    })?;
    writeln!(
        out,
        "Converted {} to {} ({rows} rows)",
        input.display(),
        output.display()
    )?;
    Ok(())
}

/// Launch the interactive TUI.
pub async fn browse(config: &NetrecConfig) -> anyhow::Result<()> {
    netrec_rs_tui::run(build_loader(config), TuiConfig::from(&config.ui)).await
}
