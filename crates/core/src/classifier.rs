//! Binary concept classification backed by a chat-completion provider.

use providers::{ChatPrompt, ProviderError, ProviderRegistry};
use tracing::debug;

/// The reply only needs to carry a short True/False word.
const MAX_VERDICT_TOKENS: u32 = 4;

fn system_prompt(concept: &str) -> String {
    format!(
        "You are a semantic search function. Your task is to respond \"True\" or \"False\", \
         depending on whether the text you are given matches the following concept(s): \"{concept}\""
    )
}

/// Issues exactly one deterministic completion request and reduces the reply
/// to a boolean verdict. The parse is a permissive, case-sensitive substring
/// test: any reply containing `True` counts as a match, everything else
/// (ambiguous, malformed, refusal, empty) counts as a non-match.
pub async fn classify(
    text: &str,
    concept: &str,
    registry: &ProviderRegistry,
) -> Result<bool, ProviderError> {
    let llm = registry.llm(None)?;
    let prompt = ChatPrompt {
        system: system_prompt(concept),
        user: text.to_string(),
        temperature: 0.0,
        max_tokens: MAX_VERDICT_TOKENS,
    };
    let resp = llm.complete(&prompt).await?;
    debug!(content = %resp.content, "classifier response");
    Ok(resp.content.contains("True"))
}
