use crate::error::SearchError;
use std::path::PathBuf;

/// Validated run configuration, constructed once and passed by reference.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub dir: PathBuf,
    pub concept: String,
}

impl SearchConfig {
    /// The concept is checked first so an empty concept is rejected before
    /// any filesystem access.
    pub fn new(dir: impl Into<PathBuf>, concept: impl Into<String>) -> Result<Self, SearchError> {
        let concept = concept.into();
        if concept.trim().is_empty() {
            return Err(SearchError::EmptyConcept);
        }
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(SearchError::InvalidDirectory(dir));
        }
        Ok(Self { dir, concept })
    }
}
