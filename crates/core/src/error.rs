use providers::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Per-document extraction problems are handled inside
/// the pipeline and never surface here.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("concept string is empty")]
    EmptyConcept,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
