//! The match pipeline: enumerate candidates, extract, classify, aggregate.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::{classifier, extractor, scanner};
use providers::openai::{OpenAiConfig, OpenAiProvider};
use providers::ProviderRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Runs the full match pipeline sequentially and returns the matched paths
/// in scanner order.
///
/// Per-file extraction failures (unreadable documents, documents with too
/// little text) exclude only that file; a provider-level failure aborts the
/// whole run and no partial result set is returned.
pub async fn run(
    config: &SearchConfig,
    registry: &ProviderRegistry,
) -> Result<Vec<PathBuf>, SearchError> {
    let candidates = scanner::scan(&config.dir);
    debug!(
        dir = %config.dir.display(),
        count = candidates.len(),
        "candidate PDFs found"
    );

    let mut matches = Vec::new();
    for path in candidates {
        debug!(path = %path.display(), "checking candidate against concept");
        let text = match extractor::extract_prefix(&path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(path = %path.display(), "not enough extractable text, skipping");
                continue;
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "unreadable document, skipping");
                continue;
            }
        };
        if classifier::classify(&text, &config.concept, registry).await? {
            matches.push(path);
        }
    }
    Ok(matches)
}

/// Builds the provider registry from the environment. With no API key set
/// the registry stays empty and the first classification fails as
/// unconfigured.
pub fn build_registry() -> ProviderRegistry {
    let mut reg = ProviderRegistry::new();

    if let Some(key) = std::env::var_os("OPENAI_API_KEY") {
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let chat_model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let provider = OpenAiProvider::new(OpenAiConfig {
            api_key: key.to_string_lossy().into_owned(),
            base_url,
            chat_model,
        });
        reg = reg
            .with_llm("openai", Arc::new(provider))
            .set_preferred_llm("openai");
    }

    reg
}
