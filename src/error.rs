use crate::data::{Dataset, NodeGroup};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeDataError {
    #[error("Node {id:?} from {group} has no entry in the descriptions dataset")]
    MissingDescription { id: String, group: NodeGroup },
    #[error("Malformed {dataset} dataset at line {line}, column {column}: {message}")]
    Malformed {
        dataset: Dataset,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("IO error encountered on path {1}")]
    Io(#[source] std::io::Error, PathBuf),
    #[error("Failed to write tree data")]
    Output(#[source] serde_json::Error),
}

impl TreeDataError {
    pub fn from_io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        |err| Self::Io(err, path)
    }

    pub fn malformed(dataset: Dataset) -> impl FnOnce(serde_json::Error) -> Self {
        move |err| Self::from_json(dataset, &err)
    }

    pub fn from_json(dataset: Dataset, err: &serde_json::Error) -> Self {
        Self::Malformed {
            dataset,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
