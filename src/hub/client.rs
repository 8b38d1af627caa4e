//! Production [`DatasetHub`] backed by the Hugging Face Hub.
//!
//! Shard discovery works from the repository file listing: parquet files
//! are grouped into configurations (top-level directory) and splits
//! (inferred from the file name or directory). Split materialization
//! downloads the shards through `hf-hub`'s cached sync API and decodes
//! them with the parquet record reader.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

use hf_hub::api::sync::{Api, ApiBuilder};
use parquet::file::reader::{FileReader, SerializedFileReader};
use serde::Deserialize;
use serde_json::Value;

use crate::error::HfgrabError;
use crate::table::Table;

use super::DatasetHub;

/// Endpoint used to enumerate an author's datasets.
const HUB_DATASETS_ENDPOINT: &str = "https://huggingface.co/api/datasets";

/// Top-level directories that hold the unnamed default configuration.
const DEFAULT_CONFIG_DIRS: &[&str] = &["data"];

/// Parquet shard paths for one dataset, keyed by configuration then split.
/// The unnamed default configuration uses an empty string key.
#[derive(Clone, Debug, Default)]
struct ShardLayout {
    configs: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

/// One record in the Hub dataset listing response.
#[derive(Debug, Deserialize)]
struct DatasetRecord {
    id: String,
}

pub struct HubClient {
    api: Api,
    token: Option<String>,
    layouts: RefCell<HashMap<String, ShardLayout>>,
}

impl HubClient {
    /// Build a client. A token passed here (or found in `HF_TOKEN`) is used
    /// for both the cached download API and the plain HTTP endpoints.
    pub fn new(token: Option<String>) -> Result<Self, HfgrabError> {
        let token = token.or_else(|| std::env::var("HF_TOKEN").ok());

        let mut builder = ApiBuilder::new().with_progress(false);
        if token.is_some() {
            builder = builder.with_token(token.clone());
        }
        let api = builder
            .build()
            .map_err(|source| HfgrabError::HubInit(source.to_string()))?;

        Ok(HubClient {
            api,
            token,
            layouts: RefCell::new(HashMap::new()),
        })
    }

    /// Fetch (or reuse) the parquet shard layout of a dataset repository.
    fn layout(&self, dataset_id: &str) -> Result<ShardLayout, HfgrabError> {
        if let Some(found) = self.layouts.borrow().get(dataset_id) {
            return Ok(found.clone());
        }

        let repo = self.api.dataset(dataset_id.to_string());
        let info = repo.info().map_err(|source| HfgrabError::HubApi {
            repo_id: dataset_id.to_string(),
            message: source.to_string(),
        })?;

        let paths: Vec<String> = info
            .siblings
            .iter()
            .map(|sibling| sibling.rfilename.clone())
            .collect();
        let layout = group_parquet_shards(&paths);

        self.layouts
            .borrow_mut()
            .insert(dataset_id.to_string(), layout.clone());
        Ok(layout)
    }

    fn http_get_json(&self, url: &str) -> Result<Value, String> {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        let agent: ureq::Agent = config.into();

        let mut request = agent.get(url);
        if let Some(token) = self.token.as_deref() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let mut response = request.call().map_err(|source| source.to_string())?;
        response
            .body_mut()
            .read_json::<Value>()
            .map_err(|source| source.to_string())
    }
}

impl DatasetHub for HubClient {
    fn load_splits(
        &self,
        dataset_id: &str,
        config: Option<&str>,
    ) -> Result<Vec<String>, HfgrabError> {
        let layout = self.layout(dataset_id)?;
        let splits = select_config(dataset_id, &layout, config)?;
        Ok(splits.keys().cloned().collect())
    }

    fn split_table(
        &self,
        dataset_id: &str,
        config: Option<&str>,
        split: &str,
    ) -> Result<Table, HfgrabError> {
        let layout = self.layout(dataset_id)?;
        let splits = select_config(dataset_id, &layout, config)?;
        let shards = splits
            .get(split)
            .ok_or_else(|| HfgrabError::SplitUnavailable {
                repo_id: dataset_id.to_string(),
                split: split.to_string(),
            })?;

        let repo = self.api.dataset(dataset_id.to_string());
        let mut table = None;
        for shard in shards {
            let local = repo.download(shard).map_err(|source| HfgrabError::HubApi {
                repo_id: dataset_id.to_string(),
                message: format!("failed downloading '{shard}': {source}"),
            })?;
            read_parquet_into(&local, &mut table)?;
        }

        table.ok_or_else(|| HfgrabError::SplitUnavailable {
            repo_id: dataset_id.to_string(),
            split: split.to_string(),
        })
    }

    fn config_names(&self, dataset_id: &str) -> Result<Vec<String>, HfgrabError> {
        let layout = self.layout(dataset_id)?;
        Ok(layout
            .configs
            .keys()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect())
    }

    fn list_author_datasets(&self, author: &str) -> Result<Vec<String>, HfgrabError> {
        let mut url =
            url::Url::parse(HUB_DATASETS_ENDPOINT).map_err(|source| HfgrabError::AuthorListing {
                author: author.to_string(),
                message: source.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("author", author)
            .append_pair("limit", "1000");

        let json = self
            .http_get_json(url.as_str())
            .map_err(|message| HfgrabError::AuthorListing {
                author: author.to_string(),
                message,
            })?;

        let records: Vec<DatasetRecord> =
            serde_json::from_value(json).map_err(|source| HfgrabError::AuthorListing {
                author: author.to_string(),
                message: format!("unexpected listing response: {source}"),
            })?;

        Ok(records.into_iter().map(|record| record.id).collect())
    }
}

/// Pick the configuration to read. With no explicit choice a lone
/// configuration (named or not) wins; several named configurations mirror
/// the Hub loader's "config name is missing" condition as a typed error.
fn select_config<'a>(
    dataset_id: &str,
    layout: &'a ShardLayout,
    config: Option<&str>,
) -> Result<&'a BTreeMap<String, Vec<String>>, HfgrabError> {
    if let Some(name) = config {
        return layout
            .configs
            .get(name)
            .ok_or_else(|| HfgrabError::HubApi {
                repo_id: dataset_id.to_string(),
                message: format!("unknown configuration '{name}'"),
            });
    }

    let mut configs = layout.configs.values();
    let first = configs.next().ok_or_else(|| HfgrabError::HubApi {
        repo_id: dataset_id.to_string(),
        message: "no parquet shards found in repository".to_string(),
    })?;

    if configs.next().is_none() {
        return Ok(first);
    }

    layout
        .configs
        .get("")
        .ok_or_else(|| HfgrabError::MissingConfig {
            repo_id: dataset_id.to_string(),
        })
}

/// Group a repository file listing into configurations and splits.
fn group_parquet_shards(paths: &[String]) -> ShardLayout {
    let mut layout = ShardLayout::default();

    for path in paths {
        if !path.ends_with(".parquet") {
            continue;
        }
        let (config, relative) = split_config(path);
        let Some(split) = infer_split(relative) else {
            continue;
        };
        layout
            .configs
            .entry(config)
            .or_default()
            .entry(split)
            .or_default()
            .push(path.clone());
    }

    for splits in layout.configs.values_mut() {
        for shards in splits.values_mut() {
            shards.sort();
        }
    }
    layout
}

/// The top-level directory is the configuration name; root files and the
/// conventional `data/` directory belong to the unnamed default config.
fn split_config(path: &str) -> (String, &str) {
    match path.split_once('/') {
        Some((first, rest)) if !DEFAULT_CONFIG_DIRS.contains(&first) => (first.to_string(), rest),
        Some((_, rest)) => (String::new(), rest),
        None => (String::new(), path),
    }
}

/// Infer the split name from a shard path relative to its configuration.
///
/// Handles `train-00000-of-00002.parquet`, `train.parquet`, and
/// `train/0000.parquet` style layouts.
fn infer_split(relative: &str) -> Option<String> {
    let mut components = relative.split('/');
    let first = components.next()?;
    if components.next().is_some() {
        return Some(first.to_string());
    }

    let stem = first.strip_suffix(".parquet")?;
    if stem.is_empty() {
        return None;
    }
    if let Some((prefix, rest)) = stem.split_once('-') {
        let looks_sharded = rest.contains("-of-")
            || rest.chars().all(|c| c.is_ascii_digit() || c == '-');
        if looks_sharded && !prefix.is_empty() {
            return Some(prefix.to_string());
        }
    }
    Some(stem.to_string())
}

/// Decode one parquet shard into the accumulating table. The first shard
/// fixes the column order from the parquet schema.
fn read_parquet_into(path: &Path, table: &mut Option<Table>) -> Result<(), HfgrabError> {
    let file = File::open(path).map_err(HfgrabError::Io)?;
    let reader =
        SerializedFileReader::new(file).map_err(|source| HfgrabError::ParquetParse {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;

    if table.is_none() {
        let columns = reader
            .metadata()
            .file_metadata()
            .schema()
            .get_fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();
        *table = Some(Table::new(columns));
    }
    let Some(target) = table.as_mut() else {
        return Ok(());
    };

    let rows = reader
        .get_row_iter(None)
        .map_err(|source| HfgrabError::ParquetParse {
            path: path.to_path_buf(),
            message: source.to_string(),
        })?;

    for (index, row) in rows.enumerate() {
        let row = row.map_err(|source| HfgrabError::ParquetParse {
            path: path.to_path_buf(),
            message: format!("row {}: {source}", index + 1),
        })?;
        match row.to_json_value() {
            Value::Object(object) => target.push_object(&object),
            other => {
                return Err(HfgrabError::ParquetParse {
                    path: path.to_path_buf(),
                    message: format!("row {}: expected an object row, got {other}", index + 1),
                });
            }
        }
    }

    Ok(())
}
