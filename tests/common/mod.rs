#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::json;

use hfgrab::error::HfgrabError;
use hfgrab::hub::DatasetHub;
use hfgrab::table::Table;

/// A small three-column table with `rows` records.
pub fn sample_table(rows: usize) -> Table {
    let mut table = Table::new(vec![
        "id".to_string(),
        "text".to_string(),
        "score".to_string(),
    ]);
    for index in 0..rows {
        table.push_row(vec![
            json!(index as i64),
            json!(format!("row {index}")),
            json!(index as f64 * 0.5),
        ]);
    }
    table
}

/// One dataset held by the fake hub. A `None` split materializes with an
/// error, standing in for a corrupt or unreadable split.
#[derive(Debug, Default)]
pub struct FakeDataset {
    pub configs: Vec<String>,
    pub requires_config: bool,
    pub splits: BTreeMap<String, Option<Table>>,
}

/// In-memory hub double for engine tests.
#[derive(Debug, Default)]
pub struct FakeHub {
    pub datasets: BTreeMap<String, FakeDataset>,
    pub authors: BTreeMap<String, Vec<String>>,
}

impl FakeHub {
    fn dataset(&self, dataset_id: &str) -> Result<&FakeDataset, HfgrabError> {
        self.datasets
            .get(dataset_id)
            .ok_or_else(|| HfgrabError::HubApi {
                repo_id: dataset_id.to_string(),
                message: "dataset not found".to_string(),
            })
    }
}

impl DatasetHub for FakeHub {
    fn load_splits(
        &self,
        dataset_id: &str,
        config: Option<&str>,
    ) -> Result<Vec<String>, HfgrabError> {
        let dataset = self.dataset(dataset_id)?;
        if dataset.requires_config && config.is_none() {
            return Err(HfgrabError::MissingConfig {
                repo_id: dataset_id.to_string(),
            });
        }
        Ok(dataset.splits.keys().cloned().collect())
    }

    fn split_table(
        &self,
        dataset_id: &str,
        _config: Option<&str>,
        split: &str,
    ) -> Result<Table, HfgrabError> {
        let dataset = self.dataset(dataset_id)?;
        match dataset.splits.get(split) {
            Some(Some(table)) => Ok(table.clone()),
            Some(None) => Err(HfgrabError::HubApi {
                repo_id: dataset_id.to_string(),
                message: format!("failed materializing split '{split}'"),
            }),
            None => Err(HfgrabError::SplitUnavailable {
                repo_id: dataset_id.to_string(),
                split: split.to_string(),
            }),
        }
    }

    fn config_names(&self, dataset_id: &str) -> Result<Vec<String>, HfgrabError> {
        Ok(self.dataset(dataset_id)?.configs.clone())
    }

    fn list_author_datasets(&self, author: &str) -> Result<Vec<String>, HfgrabError> {
        self.authors
            .get(author)
            .cloned()
            .ok_or_else(|| HfgrabError::AuthorListing {
                author: author.to_string(),
                message: "author not found".to_string(),
            })
    }
}
