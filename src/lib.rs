pub mod data;
pub mod error;
pub mod loader;
pub mod paths;
pub mod tree;

pub use data::{Datasets, NodeGroup, NodeKind};
pub use error::TreeDataError;
pub use tree::{NodeMerger, NodePosition, TreeData, TreeNode};

use std::path::Path;

/// Merges the bundled position and description datasets into one node map.
pub fn load_data() -> Result<TreeData, TreeDataError> {
    NodeMerger::from(Datasets::embedded()?).merge()
}

/// Same as [`load_data`], but with datasets read from `dir`.
pub fn load_data_from(dir: impl AsRef<Path>) -> Result<TreeData, TreeDataError> {
    let loaded = loader::load_dir(dir)?;
    NodeMerger::from(loaded.as_datasets()).merge()
}
