use crate::config::ImageFolderConfig;
use crate::dataset::class_catalog::ClassCatalog;
use crate::dataset::common_structs::{ImageArray, Sample};
use crate::dataset::data_transformers::img2array;
use crate::dataset::data_transformers::transforms::Transform;
use crate::dataset::sample_index::SampleIndex;
use crate::dataset::{DataLoader, Dataset};
use crate::error::{ImageFolderError, Result};
use log::{info, trace};
use std::fmt;
use std::path::{Path, PathBuf};

/// Image classification dataset stored as `root/<class>/**/<image>`.
///
/// Classes and files are indexed once when the dataset is built; images are
/// decoded on every access.
pub struct ImageFolderDataset {
    root_path: PathBuf,
    catalog: ClassCatalog,
    index: SampleIndex,
    transform: Option<Box<dyn Transform>>,
}

impl ImageFolderDataset {
    pub fn new<T: AsRef<Path>>(
        root_path: T,
        transform: Option<Box<dyn Transform>>,
    ) -> Result<ImageFolderDataset> {
        Self::from_config(&ImageFolderConfig::new(root_path), transform)
    }

    pub fn from_config(
        config: &ImageFolderConfig,
        transform: Option<Box<dyn Transform>>,
    ) -> Result<ImageFolderDataset> {
        let root_path = config.root_path.clone();
        let catalog = ClassCatalog::discover(&root_path)?;
        let index = SampleIndex::scan(&root_path, &catalog, |path| config.accepts(path))?;
        info!(
            "indexed {} samples in {} classes under {}",
            index.len(),
            catalog.num_classes(),
            root_path.display()
        );
        Ok(ImageFolderDataset {
            root_path,
            catalog,
            index,
            transform,
        })
    }

    pub fn load_image_as_array<T: AsRef<Path>>(path: T) -> Result<ImageArray> {
        img2array::load_image_as_array(path)
    }

    /// Decodes the `index`-th image and runs it through the transform.
    ///
    /// A dataset built without a transform cannot return samples, use
    /// [`load_image_as_array`](Self::load_image_as_array) on
    /// [`path_of`](Self::path_of) for the raw array instead.
    pub fn get_sample(&self, index: usize) -> Result<Sample> {
        let (path, label) = self
            .index
            .get(index)
            .ok_or(ImageFolderError::IndexOutOfRange {
                index,
                len: self.len(),
            })?;
        trace!("loading sample {} from {}", index, path.display());
        let image = img2array::load_image_as_array(path)?;
        let transform = self
            .transform
            .as_ref()
            .ok_or(ImageFolderError::MissingTransform)?;
        let image = transform.apply(image)?;
        Ok(Sample { image, label })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn class_catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    pub fn classes(&self) -> &[String] {
        self.catalog.classes()
    }

    pub fn num_classes(&self) -> usize {
        self.catalog.num_classes()
    }

    pub fn sample_index(&self) -> &SampleIndex {
        &self.index
    }

    pub fn path_of(&self, index: usize) -> Option<&Path> {
        self.index.get(index).map(|(path, _)| path)
    }

    pub fn label_of(&self, index: usize) -> Option<usize> {
        self.index.get(index).map(|(_, label)| label)
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Samples in index order
    pub fn iter(&self) -> ImageFolderIter<'_> {
        ImageFolderIter {
            dataset: self,
            next_element_index: 0,
        }
    }
}

impl fmt::Debug for ImageFolderDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFolderDataset")
            .field("root_path", &self.root_path)
            .field("classes", &self.catalog.classes())
            .field("len", &self.index.len())
            .field("has_transform", &self.transform.is_some())
            .finish()
    }
}

impl Dataset for ImageFolderDataset {
    fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn get(&self, index: usize) -> Result<Sample> {
        self.get_sample(index)
    }
}

pub struct ImageFolderIter<'a> {
    dataset: &'a ImageFolderDataset,
    next_element_index: usize,
}

impl<'a> Iterator for ImageFolderIter<'a> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_element_index >= self.dataset.len() {
            return None;
        }
        let sample = self.dataset.get_sample(self.next_element_index);
        self.next_element_index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len() - self.next_element_index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for ImageFolderIter<'a> {}

impl<'a> DataLoader for ImageFolderIter<'a> {
    fn next_element_index(&self) -> usize {
        self.next_element_index
    }

    fn max_elem_index(&self) -> usize {
        self.dataset.len()
    }
}
