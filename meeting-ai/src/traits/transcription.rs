//! Transcription provider trait.

use crate::Error;
use async_trait::async_trait;

/// Abstraction for speech-to-text services.
///
/// Implementations convert an uploaded audio file into plain transcript text.
/// Long-running implementations must suspend rather than block the runtime thread.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Transcribe `audio` (the raw uploaded bytes) whose original name was `filename`.
    async fn transcribe(&self, audio: &[u8], filename: &str)
        -> std::result::Result<String, Error>;
}
