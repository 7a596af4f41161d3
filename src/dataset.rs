use crate::dataset::common_structs::Sample;
use crate::error::Result;
use std::path::Path;

pub mod class_catalog;
pub mod common_structs;
pub mod sample_index;

pub mod data_loaders;
pub mod data_transformers;

/// An indexed collection of samples rooted at a directory that something else
/// (a downloader, a cache) has already materialized.
pub trait Dataset: Send + Sync {
    fn root_path(&self) -> &Path;
    /// Number of samples
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Loads the sample at `index`, failing if `index >= len()`
    fn get(&self, index: usize) -> Result<Sample>;
}

/// Extends the iterator trait to make sure the Dataset has methods display progress
pub trait DataLoader: Iterator {
    /// Returns the next element index, starting from 0
    fn next_element_index(&self) -> usize;
    /// Returns the index of the last element to be loaded
    fn max_elem_index(&self) -> usize;
}
