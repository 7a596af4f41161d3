use crate::error::{ImageFolderError, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// Sorted class names; a class's label is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCatalog {
    classes: Vec<String>,
}

impl ClassCatalog {
    pub fn from_names<I, S>(names: I) -> ClassCatalog
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = names.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        ClassCatalog { classes }
    }

    /// Every immediate subdirectory of `root` is a class.
    pub fn discover(root: &Path) -> Result<ClassCatalog> {
        if !root.is_dir() {
            return Err(ImageFolderError::NotADirectory(root.to_path_buf()));
        }
        let scan_err = |source| ImageFolderError::Scan {
            path: root.to_path_buf(),
            source,
        };
        let mut names = vec![];
        for entry in fs::read_dir(root).map_err(scan_err)? {
            let path = entry.map_err(scan_err)?.path();
            if !path.is_dir() {
                continue;
            }
            match path.file_name().map(|name| name.to_os_string().into_string()) {
                Some(Ok(name)) => names.push(name),
                _ => warn!("skipping class directory with non UTF-8 name {:?}", path),
            }
        }
        if names.is_empty() {
            return Err(ImageFolderError::NoClasses(root.to_path_buf()));
        }
        Ok(ClassCatalog::from_names(names))
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn label_of(&self, class: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|probe| probe.as_str().cmp(class))
            .ok()
    }

    pub fn class_name(&self, label: usize) -> Option<&str> {
        self.classes.get(label).map(String::as_str)
    }

    /// `(label, class name)` pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.classes.iter().map(String::as_str).enumerate()
    }
}
