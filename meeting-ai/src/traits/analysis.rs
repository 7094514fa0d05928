//! LLM completion provider trait.

use crate::Error;
use async_trait::async_trait;

/// Abstraction for a large language model that answers a single prompt.
///
/// Implementations wrap a vendor API (Gemini, OpenAI, Claude). Every call is independent:
/// `session_id` identifies the call for correlation and must never be used to carry
/// conversation state from one call into another.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send `user_prompt` under `system_prompt` and return the model's raw text reply.
    ///
    /// Any failure (network, auth, timeout, empty or malformed reply) is reported as an
    /// [`Error`]; callers decide whether to recover.
    async fn complete(
        &self,
        session_id: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> std::result::Result<String, Error>;
}
