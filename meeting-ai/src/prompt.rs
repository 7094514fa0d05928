//! Prompt sent to the LLM for meeting analysis.
//!
//! The headers requested here are the ones [`crate::sections`] splits the reply on; the two
//! must change together.

use crate::sections::{
    ACTION_ITEMS_HEADER, KEY_DECISIONS_HEADER, SPEAKERS_HEADER, SUMMARY_HEADER, TIMELINE_HEADER,
};

pub const SYSTEM_PROMPT: &str = "You are an expert meeting analyst. Analyze meeting transcripts \
and extract key information in a structured format.";

/// Builds the user prompt for `transcript`. The transcript is embedded verbatim after the
/// format instructions, so the same transcript always yields the same prompt.
pub fn analysis_prompt(transcript: &str) -> String {
    format!(
        r#"Please analyze this meeting transcript and provide a structured analysis in the following format:

{SUMMARY_HEADER}
[2-3 sentence summary of the meeting]

{KEY_DECISIONS_HEADER}
- [Decision 1]
- [Decision 2]
- [etc.]

{ACTION_ITEMS_HEADER}
- [Action item 1 with assignee]
- [Action item 2 with assignee]
- [etc.]

{SPEAKERS_HEADER}
- [Speaker 1 name/role]
- [Speaker 2 name/role]
- [etc.]

{TIMELINE_HEADER}
- [Important moment 1]
- [Important moment 2]
- [etc.]

Meeting Transcript:
{transcript}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_headers_in_fixed_order() {
        let prompt = analysis_prompt("Speaker 1: hi");

        let positions: Vec<usize> = [
            SUMMARY_HEADER,
            KEY_DECISIONS_HEADER,
            ACTION_ITEMS_HEADER,
            SPEAKERS_HEADER,
            TIMELINE_HEADER,
        ]
        .iter()
        .map(|header| prompt.find(header).expect("header missing from prompt"))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prompt_ends_with_the_verbatim_transcript() {
        let transcript = "Speaker 1: Let's ship on Friday.\n\nSpeaker 2: Agreed.";
        let prompt = analysis_prompt(transcript);

        assert!(prompt.ends_with(&format!("Meeting Transcript:\n{transcript}\n")));
        assert_eq!(prompt, analysis_prompt(transcript));
    }
}
