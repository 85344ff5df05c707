//! Discovery of complete story folders.
//!
//! A story folder is complete when it holds the story text file and every
//! `image_1..image_N` file. Incomplete folders are skipped silently. Nothing
//! is cached: each call scans the directory again, so the result always
//! reflects what is on disk right now.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StoryConfig;
use crate::error::StoryError;

/// Names of the complete story folders directly under `root`, sorted by name.
///
/// A missing or unreadable `root` yields an empty list.
pub fn list_valid_stories(root: &Path, config: &StoryConfig) -> Vec<String> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot read story root {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    names
        .into_iter()
        .filter(|name| {
            let complete = is_complete(&root.join(name), config);
            if !complete {
                tracing::debug!("Skipping incomplete story folder {}", name);
            }
            complete
        })
        .collect()
}

/// Whether `dir` is a folder holding the story text and all expected images.
pub fn is_complete(dir: &Path, config: &StoryConfig) -> bool {
    dir.is_dir()
        && dir.join(&config.story_file_name).is_file()
        && config
            .image_file_names()
            .iter()
            .all(|image| dir.join(image).is_file())
}

/// The story assets root together with the layout its folders follow.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    config: StoryConfig,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>, config: StoryConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Fresh scan of the complete stories.
    pub fn list(&self) -> Vec<String> {
        list_valid_stories(&self.root, &self.config)
    }

    /// Folder of the named story, checked against a fresh scan.
    ///
    /// Only names that the scan itself produced are accepted, so a name like
    /// `../secret` or `a/b` can never resolve.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StoryError> {
        if self.list().iter().any(|valid| valid == name) {
            Ok(self.root.join(name))
        } else {
            Err(StoryError::NotFound(name.to_string()))
        }
    }
}
