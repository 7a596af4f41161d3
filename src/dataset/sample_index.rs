use crate::dataset::class_catalog::ClassCatalog;
use crate::error::{ImageFolderError, Result};
use itertools::Itertools;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File paths and their labels, class by class.
///
/// `paths` and `labels` always have the same length since entries are only
/// ever added in pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleIndex {
    paths: Vec<PathBuf>,
    labels: Vec<usize>,
}

impl SampleIndex {
    /// Walks `root/<class>` for every class of the catalog, in label order.
    ///
    /// Within a class, directories are visited in order of their full path
    /// string (so `a-b` comes before `a/sub`) and each directory's files are
    /// emitted sorted by name. Only files for which `accept` returns true are
    /// indexed.
    pub fn scan<F>(root: &Path, catalog: &ClassCatalog, accept: F) -> Result<SampleIndex>
    where
        F: Fn(&Path) -> bool,
    {
        let mut index = SampleIndex::default();
        for (label, class) in catalog.iter() {
            let before = index.len();
            index.walk_class(&root.join(class), label, &accept)?;
            let found = index.len() - before;
            if found == 0 {
                warn!("class {} (label {}) has no samples", class, label);
            } else {
                debug!("class {} (label {}): {} samples", class, label, found);
            }
        }
        Ok(index)
    }

    fn walk_class<F>(&mut self, class_dir: &Path, label: usize, accept: &F) -> Result<()>
    where
        F: Fn(&Path) -> bool,
    {
        let mut listed: Vec<(PathBuf, Vec<PathBuf>)> = vec![];
        let mut pending = vec![class_dir.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let (subdirs, files) = list_dir(&dir)?;
            // linked directories are listed but never descended into
            pending.extend(subdirs.into_iter().filter(|subdir| !is_symlink(subdir)));
            listed.push((dir, files));
        }

        let by_full_path = listed
            .into_iter()
            .sorted_by(|a, b| a.0.as_os_str().cmp(b.0.as_os_str()));
        for (_, files) in by_full_path {
            for file in files {
                if accept(&file) {
                    self.push(file, label);
                }
            }
        }
        Ok(())
    }

    pub fn push(&mut self, path: PathBuf, label: usize) {
        self.paths.push(path);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<(&Path, usize)> {
        Some((self.paths.get(index)?.as_path(), *self.labels.get(index)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, usize)> {
        self.paths
            .iter()
            .map(PathBuf::as_path)
            .zip(self.labels.iter().copied())
    }
}

/// Splits the entries of `dir` into subdirectories and files, both sorted by name
fn list_dir(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let scan_err = |source| ImageFolderError::Scan {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = vec![];
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        entries.push(entry.map_err(scan_err)?.path());
    }
    Ok(entries.into_iter().sorted().partition(|path| path.is_dir()))
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}
