//! Index an image classification dataset laid out as one directory per class
//! and load it one labeled sample at a time.
//!
//! ```no_run
//! use image_folder_dataset::dataset::data_loaders::image_folder_dataset::ImageFolderDataset;
//! use image_folder_dataset::dataset::data_transformers::transforms::RescaleTransform;
//!
//! let dataset = ImageFolderDataset::new(
//!     "datasets/cifar10",
//!     Some(Box::new(RescaleTransform::new((0., 1.)))),
//! )?;
//! let sample = dataset.get_sample(0)?;
//! println!("{} -> {:?}", sample.label, sample.image.shape());
//! # Ok::<(), image_folder_dataset::error::ImageFolderError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use config::ImageFolderConfig;
pub use dataset::class_catalog::ClassCatalog;
pub use dataset::common_structs::{ImageArray, Sample};
pub use dataset::data_loaders::image_folder_dataset::{ImageFolderDataset, ImageFolderIter};
pub use dataset::data_transformers::img2array::load_image_as_array;
pub use dataset::data_transformers::transforms::Transform;
pub use dataset::sample_index::SampleIndex;
pub use dataset::{DataLoader, Dataset};
pub use error::{ErrorKind, ImageFolderError};
