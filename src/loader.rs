use crate::{
    data::{Dataset, Datasets, DescriptionsDataset, PositionsDataset},
    error::TreeDataError,
};
use log::*;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Datasets read from a data directory rather than the bundled ones.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedDatasets {
    pub positions: PositionsDataset,
    pub descriptions: DescriptionsDataset,
}

impl LoadedDatasets {
    pub fn as_datasets(&self) -> Datasets<'_> {
        Datasets {
            positions: &self.positions,
            descriptions: &self.descriptions,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, dataset: Dataset) -> Result<T, TreeDataError> {
    debug!("Reading {} dataset from {:?}", dataset, path);
    let text = std::fs::read_to_string(path).map_err(TreeDataError::from_io(path))?;
    debug!("Total {} characters", text.chars().count());
    serde_json::from_str(&text).map_err(|err| {
        warn!("Malformed JSON in file {:?}: {}", path, err);
        TreeDataError::malformed(dataset)(err)
    })
}

pub fn load_dir(base_path: impl AsRef<Path>) -> Result<LoadedDatasets, TreeDataError> {
    let base_path = base_path.as_ref();
    info!("Loading tree data from directory: {:?}", base_path);
    let positions: PositionsDataset =
        read_json(&crate::paths::positions(base_path), Dataset::Positions)?;
    let descriptions: DescriptionsDataset =
        read_json(&crate::paths::descriptions(base_path), Dataset::Descriptions)?;
    info!(
        "Loaded {} positions and {} descriptions",
        positions.len(),
        descriptions.len()
    );
    Ok(LoadedDatasets {
        positions,
        descriptions,
    })
}
