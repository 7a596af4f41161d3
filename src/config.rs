use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Where the dataset lives and which files count as samples.
///
/// ```json
/// { "root_path": "datasets/cifar10", "extensions": ["png"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFolderConfig {
    pub root_path: PathBuf,
    /// When `None` every file under a class directory is a sample.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

impl ImageFolderConfig {
    pub fn new<T: AsRef<Path>>(root_path: T) -> ImageFolderConfig {
        ImageFolderConfig {
            root_path: root_path.as_ref().to_path_buf(),
            extensions: None,
        }
    }

    pub fn with_extensions<S: Into<String>>(
        mut self,
        extensions: impl IntoIterator<Item = S>,
    ) -> ImageFolderConfig {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_json_file<T: AsRef<Path>>(path: T) -> Result<ImageFolderConfig, anyhow::Error> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("cannot open dataset config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid dataset config {}", path.display()))?;
        Ok(config)
    }

    /// Case-insensitive extension check, always true without a filter.
    pub fn accepts(&self, path: &Path) -> bool {
        let extensions = match &self.extensions {
            None => return true,
            Some(extensions) => extensions,
        };
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(e))
            })
            .unwrap_or(false)
    }
}
