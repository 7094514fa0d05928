//! Turns a transcript into an [`AnalysisResult`] by way of an LLM.
//!
//! Analysis never fails from the caller's point of view: any provider error is logged and
//! replaced with [`AnalysisResult::fallback`].

use log::*;
use meeting_ai::traits::analysis::Provider;
use meeting_ai::{prompt, sections, AnalysisResult, Error as ProviderError};
use uuid::Uuid;

const SESSION_PREFIX: &str = "meeting-analysis";

/// A fresh identifier for one LLM call. Never reused across calls.
pub fn new_session_id() -> String {
    format!("{SESSION_PREFIX}-{}", Uuid::new_v4())
}

pub async fn analyze(llm: &dyn Provider, transcript: &str) -> AnalysisResult {
    let session_id = new_session_id();
    let user_prompt = prompt::analysis_prompt(transcript);

    debug!(
        "Requesting analysis for session {session_id} ({} transcript bytes)",
        transcript.len()
    );

    let reply = match llm
        .complete(&session_id, prompt::SYSTEM_PROMPT, &user_prompt)
        .await
    {
        Ok(reply) if reply.trim().is_empty() => {
            Err(ProviderError::Provider("LLM returned an empty reply".to_string()))
        }
        other => other,
    };

    match reply {
        Ok(reply) => {
            let result = sections::parse(&reply);
            if result.summary.is_empty()
                && result.key_decisions.is_empty()
                && result.action_items.is_empty()
                && result.speakers.is_empty()
            {
                debug!("LLM reply for session {session_id} contained no recognizable sections");
            }
            result
        }
        Err(err) => {
            warn!("Analysis failed for session {session_id}, storing fallback: {err}");
            AnalysisResult::fallback(&err)
        }
    }
}
