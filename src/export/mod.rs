//! The export engine: retrieval policy, per-split conversion, and the
//! auto fallback chain.

pub mod delimited;
pub mod document;
pub mod records;
pub mod spreadsheet;

use crate::error::HfgrabError;
use crate::hub::resolve::artifact_prefix;
use crate::hub::DatasetHub;
use crate::notify::Notifier;
use crate::table::Table;

/// Number of records kept by the raw JSON terminal fallback.
const RAW_RECORD_LIMIT: usize = 100;

/// Formats tried by [`ExportFormat::Auto`], in order.
const FALLBACK_CHAIN: [ExportFormat; 4] = [
    ExportFormat::Spreadsheet,
    ExportFormat::Csv,
    ExportFormat::Pdf,
    ExportFormat::Jsonl,
];

/// One exported file: a relative path and its raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Output format selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Spreadsheet,
    Csv,
    Jsonl,
    Pdf,
    /// Tries the fallback chain; the first format that converts wins.
    Auto,
}

impl ExportFormat {
    /// Map a user-facing format choice. Unrecognized values select `Auto`.
    pub fn parse(choice: &str) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "excel" | "xlsx" | "spreadsheet" => ExportFormat::Spreadsheet,
            "csv" => ExportFormat::Csv,
            "json" | "jsonl" => ExportFormat::Jsonl,
            "pdf" => ExportFormat::Pdf,
            _ => ExportFormat::Auto,
        }
    }

    /// File suffix for artifacts in this format. `Auto` never names a file
    /// itself; its artifacts take the suffix of the format that won.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "json",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Auto => "auto",
        }
    }
}

/// Export every split of one dataset.
///
/// Dataset-level failures are reported through `notify` and yield an empty
/// list; per-split failures are reported as warnings and leave sibling
/// splits untouched. Nothing propagates past this function.
pub fn export(
    hub: &dyn DatasetHub,
    dataset_id: &str,
    format: ExportFormat,
    notify: &mut dyn Notifier,
) -> Vec<Artifact> {
    let (config, splits) = match resolve_splits(hub, dataset_id) {
        Ok(resolved) => resolved,
        Err(error) => {
            notify.error(&format!("Failed to load dataset '{dataset_id}': {error}"));
            return Vec::new();
        }
    };

    let mut artifacts = Vec::new();
    for split in &splits {
        match export_split(hub, dataset_id, config.as_deref(), split, format, notify) {
            Ok(Some(artifact)) => artifacts.push(artifact),
            Ok(None) => {}
            Err(error) => notify.warning(&format!("Split '{split}' failed: {error}")),
        }
    }
    artifacts
}

/// Export every dataset owned by an author with the `Auto` selector,
/// collecting all artifacts. Datasets producing nothing are skipped with a
/// warning; a listing failure aborts the whole flow.
pub fn export_author(
    hub: &dyn DatasetHub,
    author: &str,
    notify: &mut dyn Notifier,
) -> Result<Vec<Artifact>, HfgrabError> {
    let dataset_ids = hub.list_author_datasets(author)?;

    let mut collected = Vec::new();
    for dataset_id in &dataset_ids {
        notify.progress(&format!("Processing: {dataset_id}"));
        let artifacts = export(hub, dataset_id, ExportFormat::Auto, notify);
        if artifacts.is_empty() {
            notify.warning(&format!("Skipped {dataset_id} (no downloadable content)"));
        } else {
            collected.extend(artifacts);
        }
    }
    Ok(collected)
}

/// Retrieval policy: plain load first, then retry with the first discovered
/// configuration when the dataset demands one.
fn resolve_splits(
    hub: &dyn DatasetHub,
    dataset_id: &str,
) -> Result<(Option<String>, Vec<String>), HfgrabError> {
    match hub.load_splits(dataset_id, None) {
        Ok(splits) => Ok((None, splits)),
        Err(HfgrabError::MissingConfig { .. }) => {
            let configs = hub.config_names(dataset_id)?;
            let first = configs
                .into_iter()
                .next()
                .ok_or_else(|| HfgrabError::NoConfigsAvailable {
                    repo_id: dataset_id.to_string(),
                })?;
            let splits = hub.load_splits(dataset_id, Some(&first))?;
            Ok((Some(first), splits))
        }
        Err(error) => Err(error),
    }
}

fn export_split(
    hub: &dyn DatasetHub,
    dataset_id: &str,
    config: Option<&str>,
    split: &str,
    format: ExportFormat,
    notify: &mut dyn Notifier,
) -> Result<Option<Artifact>, HfgrabError> {
    let table = hub.split_table(dataset_id, config, split)?;
    let prefix = artifact_prefix(dataset_id, split);

    match format {
        ExportFormat::Auto => Ok(convert_with_chain(&table, &prefix, notify, convert)),
        concrete => {
            let bytes = convert(&table, concrete)?;
            Ok(Some(Artifact {
                path: format!("{prefix}.{}", concrete.extension()),
                bytes,
            }))
        }
    }
}

fn convert(table: &Table, format: ExportFormat) -> Result<Vec<u8>, HfgrabError> {
    match format {
        ExportFormat::Spreadsheet => spreadsheet::to_xlsx(table),
        ExportFormat::Csv => delimited::to_csv(table),
        ExportFormat::Jsonl => records::to_jsonl(table),
        ExportFormat::Pdf => document::to_pdf(table),
        ExportFormat::Auto => unreachable!("auto expands into the fallback chain"),
    }
}

/// Try each chain format in order; the first success wins and the rest are
/// skipped. On exhaustion, dump the first [`RAW_RECORD_LIMIT`] records as
/// indented JSON. That terminal fallback is itself guarded: if it fails the
/// split yields a warning and no artifact.
fn convert_with_chain<F>(
    table: &Table,
    prefix: &str,
    notify: &mut dyn Notifier,
    convert: F,
) -> Option<Artifact>
where
    F: Fn(&Table, ExportFormat) -> Result<Vec<u8>, HfgrabError>,
{
    for format in FALLBACK_CHAIN {
        if let Ok(bytes) = convert(table, format) {
            return Some(Artifact {
                path: format!("{prefix}.{}", format.extension()),
                bytes,
            });
        }
    }

    match records::to_raw_json(table, RAW_RECORD_LIMIT) {
        Ok(bytes) => Some(Artifact {
            path: format!("{prefix}_raw.json"),
            bytes,
        }),
        Err(error) => {
            notify.warning(&format!("Raw record fallback failed for '{prefix}': {error}"));
            None
        }
    }
}
