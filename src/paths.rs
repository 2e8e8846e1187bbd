use std::path::{Path, PathBuf};

pub fn positions(base: impl AsRef<Path>) -> PathBuf {
    base.as_ref().join("nodes.json")
}

pub fn descriptions(base: impl AsRef<Path>) -> PathBuf {
    base.as_ref().join("nodes_desc.json")
}
