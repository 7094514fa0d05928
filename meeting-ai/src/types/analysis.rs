//! Types for transcript analysis.

use std::fmt;

/// Summary stored when the LLM could not be reached or failed.
pub const FALLBACK_SUMMARY: &str = "Meeting analysis unavailable due to processing error.";
/// Single key decision stored when analysis failed.
pub const FALLBACK_DECISION: &str = "Unable to extract decisions";
/// Single action item stored when analysis failed.
pub const FALLBACK_ACTION_ITEM: &str = "Unable to extract action items";
/// Single speaker entry stored when analysis failed.
pub const FALLBACK_SPEAKER: &str = "Speaker identification unavailable";

/// Structured analysis of one meeting transcript.
///
/// Produced fresh for every processing attempt and merged straight into the meeting
/// record; it has no identity of its own. `raw_reply` keeps the unparsed LLM text (or an
/// error description for a fallback result) for diagnostics and is not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub summary: String,
    pub key_decisions: Vec<String>,
    pub action_items: Vec<String>,
    pub speakers: Vec<String>,
    pub raw_reply: String,
}

impl AnalysisResult {
    /// The fixed result used whenever transcription or the LLM call fails.
    ///
    /// Each list holds exactly one sentinel entry rather than being empty, so a reader of
    /// the meeting can tell "analysis failed" apart from "nothing was decided".
    pub fn fallback(cause: &impl fmt::Display) -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            key_decisions: vec![FALLBACK_DECISION.to_string()],
            action_items: vec![FALLBACK_ACTION_ITEM.to_string()],
            speakers: vec![FALLBACK_SPEAKER.to_string()],
            raw_reply: format!("Error: {cause}"),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.summary == FALLBACK_SUMMARY
            && self.key_decisions == [FALLBACK_DECISION]
            && self.action_items == [FALLBACK_ACTION_ITEM]
            && self.speakers == [FALLBACK_SPEAKER]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn fallback_holds_one_sentinel_per_list() {
        let result = AnalysisResult::fallback(&Error::Timeout("120s elapsed".to_string()));

        assert_eq!(result.summary, FALLBACK_SUMMARY);
        assert_eq!(result.key_decisions, vec![FALLBACK_DECISION]);
        assert_eq!(result.action_items, vec![FALLBACK_ACTION_ITEM]);
        assert_eq!(result.speakers, vec![FALLBACK_SPEAKER]);
        assert_eq!(result.raw_reply, "Error: Timeout: 120s elapsed");
        assert!(result.is_fallback());
    }

    #[test]
    fn default_result_is_empty_and_not_a_fallback() {
        let result = AnalysisResult::default();

        assert!(result.summary.is_empty());
        assert!(result.key_decisions.is_empty());
        assert!(!result.is_fallback());
    }
}
