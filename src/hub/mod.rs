//! Hugging Face Hub collaborators.
//!
//! `resolve` owns dataset reference handling and artifact path prefixes;
//! `client` talks to the Hub. The [`DatasetHub`] trait is the seam the
//! export engine works against, so tests can substitute an in-memory hub.

pub mod client;
pub mod resolve;

use crate::error::HfgrabError;
use crate::table::Table;

/// Access to remote datasets, covering exactly what the exporter needs.
pub trait DatasetHub {
    /// Resolve a dataset and return its split names.
    ///
    /// Returns [`HfgrabError::MissingConfig`] when the dataset cannot be
    /// loaded without an explicit configuration name.
    fn load_splits(
        &self,
        dataset_id: &str,
        config: Option<&str>,
    ) -> Result<Vec<String>, HfgrabError>;

    /// Materialize one split as a row/column table.
    fn split_table(
        &self,
        dataset_id: &str,
        config: Option<&str>,
        split: &str,
    ) -> Result<Table, HfgrabError>;

    /// Ordered configuration names for a dataset (possibly empty).
    fn config_names(&self, dataset_id: &str) -> Result<Vec<String>, HfgrabError>;

    /// Identifiers of every dataset owned by an author.
    fn list_author_datasets(&self, author: &str) -> Result<Vec<String>, HfgrabError>;
}
