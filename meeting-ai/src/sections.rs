//! Splits a free-form LLM reply into the sections of an [`AnalysisResult`].
//!
//! The reply is scanned once, line by line. A line containing one of the known headers
//! switches the current section and is otherwise dropped. Under the summary header every
//! non-bullet line is prose; under the list headers only `-` bullets are kept. Anything
//! else, including text before the first header and the whole timeline section, is ignored,
//! so a reply that strays from the requested format degrades to empty fields instead of
//! failing.

use crate::AnalysisResult;

pub const SUMMARY_HEADER: &str = "EXECUTIVE SUMMARY:";
pub const KEY_DECISIONS_HEADER: &str = "KEY DECISIONS:";
pub const ACTION_ITEMS_HEADER: &str = "ACTION ITEMS:";
pub const SPEAKERS_HEADER: &str = "SPEAKERS IDENTIFIED:";
pub const TIMELINE_HEADER: &str = "TIMELINE HIGHLIGHTS:";

const BULLET: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Summary,
    Decisions,
    Actions,
    Speakers,
    Timeline,
}

// Checked in this order; the first header contained in a line wins.
const HEADERS: [(&str, Section); 5] = [
    (SUMMARY_HEADER, Section::Summary),
    (KEY_DECISIONS_HEADER, Section::Decisions),
    (ACTION_ITEMS_HEADER, Section::Actions),
    (SPEAKERS_HEADER, Section::Speakers),
    (TIMELINE_HEADER, Section::Timeline),
];

impl Section {
    fn from_header_line(line: &str) -> Option<Section> {
        HEADERS
            .iter()
            .find(|(header, _)| line.contains(header))
            .map(|(_, section)| *section)
    }
}

/// Parses `reply` into an [`AnalysisResult`]. Never fails; `raw_reply` holds `reply` unchanged.
pub fn parse(reply: &str) -> AnalysisResult {
    let mut result = AnalysisResult {
        raw_reply: reply.to_string(),
        ..AnalysisResult::default()
    };
    let mut summary = String::new();
    let mut section = Section::None;

    for line in reply.lines().map(str::trim) {
        if let Some(next) = Section::from_header_line(line) {
            section = next;
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match (section, line.strip_prefix(BULLET)) {
            (Section::Summary, None) => {
                summary.push_str(line);
                summary.push(' ');
            }
            (Section::Decisions, Some(item)) => result.key_decisions.push(item.trim().to_string()),
            (Section::Actions, Some(item)) => result.action_items.push(item.trim().to_string()),
            (Section::Speakers, Some(item)) => result.speakers.push(item.trim().to_string()),
            _ => {}
        }
    }

    result.summary = summary.trim_end().to_string();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED_REPLY: &str = "EXECUTIVE SUMMARY:
The team reviewed Q2 goals and assigned owners to three initiatives.
A follow-up is scheduled for next Friday.

KEY DECISIONS:
- Implement OAuth integration by March 15th
- Improve mobile loading times by 40%

ACTION ITEMS:
- Sarah: own the OAuth implementation
- Mike: coordinate mobile optimization
- James: lead the API expansion

SPEAKERS IDENTIFIED:
- Speaker 1 (meeting lead)
- Speaker 2 (Sarah, engineering)

TIMELINE HIGHLIGHTS:
- Roadmap walkthrough
- Owner assignment
";

    fn bullets(items: &[String]) -> String {
        items.iter().map(|item| format!("- {item}\n")).collect()
    }

    fn render(result: &AnalysisResult) -> String {
        format!(
            "{SUMMARY_HEADER}\n{}\n\n{KEY_DECISIONS_HEADER}\n{}\n{ACTION_ITEMS_HEADER}\n{}\n{SPEAKERS_HEADER}\n{}\n{TIMELINE_HEADER}\n- Kickoff\n",
            result.summary,
            bullets(&result.key_decisions),
            bullets(&result.action_items),
            bullets(&result.speakers),
        )
    }

    #[test]
    fn extracts_every_section_from_a_well_formed_reply() {
        let result = parse(WELL_FORMED_REPLY);

        assert_eq!(
            result.summary,
            "The team reviewed Q2 goals and assigned owners to three initiatives. \
             A follow-up is scheduled for next Friday."
        );
        assert_eq!(
            result.key_decisions,
            vec![
                "Implement OAuth integration by March 15th",
                "Improve mobile loading times by 40%"
            ]
        );
        assert_eq!(
            result.action_items,
            vec![
                "Sarah: own the OAuth implementation",
                "Mike: coordinate mobile optimization",
                "James: lead the API expansion"
            ]
        );
        assert_eq!(
            result.speakers,
            vec!["Speaker 1 (meeting lead)", "Speaker 2 (Sarah, engineering)"]
        );
        assert_eq!(result.raw_reply, WELL_FORMED_REPLY);
    }

    #[test]
    fn header_lines_never_end_up_in_a_section() {
        let result = parse(WELL_FORMED_REPLY);

        let everything = [
            vec![result.summary.clone()],
            result.key_decisions,
            result.action_items,
            result.speakers,
        ]
        .concat();
        for (header, _) in HEADERS {
            assert!(everything.iter().all(|entry| !entry.contains(header)));
        }
    }

    #[test]
    fn timeline_bullets_are_discarded() {
        let result = parse(WELL_FORMED_REPLY);

        assert!(!result.speakers.iter().any(|s| s.contains("Roadmap")));
        assert!(!result.action_items.iter().any(|s| s.contains("Owner assignment")));
    }

    #[test]
    fn header_without_bullets_yields_an_empty_list() {
        let reply = "EXECUTIVE SUMMARY:\nQuick sync.\nKEY DECISIONS:\nACTION ITEMS:\n- Send notes\nSPEAKERS IDENTIFIED:\n";

        let result = parse(reply);

        assert!(result.key_decisions.is_empty());
        assert!(result.speakers.is_empty());
        assert_eq!(result.action_items, vec!["Send notes"]);
    }

    #[test]
    fn reply_without_headers_yields_an_empty_result() {
        let result = parse("I'm sorry, I can't help with that.\n- not a bullet we keep");

        assert!(result.summary.is_empty());
        assert!(result.key_decisions.is_empty());
        assert!(result.action_items.is_empty());
        assert!(result.speakers.is_empty());
    }

    #[test]
    fn empty_reply_yields_an_empty_result() {
        assert_eq!(parse(""), AnalysisResult::default());
    }

    #[test]
    fn lines_before_the_first_header_are_ignored() {
        let result = parse("Sure! Here is the analysis:\n- stray\nEXECUTIVE SUMMARY:\nShort call.");

        assert_eq!(result.summary, "Short call.");
        assert!(result.key_decisions.is_empty());
    }

    #[test]
    fn summary_skips_bullets_and_list_sections_skip_prose() {
        let reply = "EXECUTIVE SUMMARY:\nFirst line.\n- a bullet in the summary\nSecond line.\nKEY DECISIONS:\nprose that is not a bullet\n- Adopt the new API";

        let result = parse(reply);

        assert_eq!(result.summary, "First line. Second line.");
        assert_eq!(result.key_decisions, vec!["Adopt the new API"]);
    }

    #[test]
    fn headers_match_inside_decorated_lines() {
        let reply = "**EXECUTIVE SUMMARY:**\nBudget review.\n## KEY DECISIONS:\n-Approve budget\n  -   Hire two engineers  ";

        let result = parse(reply);

        assert_eq!(result.summary, "Budget review.");
        assert_eq!(
            result.key_decisions,
            vec!["Approve budget", "Hire two engineers"]
        );
    }

    #[test]
    fn only_the_leading_dash_is_stripped() {
        let result = parse("ACTION ITEMS:\n- - nested item\n- follow-up with finance");

        assert_eq!(
            result.action_items,
            vec!["- nested item", "follow-up with finance"]
        );
    }

    #[test]
    fn handles_windows_line_endings() {
        let result = parse("KEY DECISIONS:\r\n- Keep weekly syncs\r\n");

        assert_eq!(result.key_decisions, vec!["Keep weekly syncs"]);
    }

    #[test]
    fn rendering_a_result_and_parsing_it_reproduces_the_fields() {
        let original = AnalysisResult {
            summary: "Planning session for the Q2 roadmap.".to_string(),
            key_decisions: vec!["Ship OAuth first".to_string()],
            action_items: vec![
                "Sarah owns OAuth".to_string(),
                "Mike owns mobile".to_string(),
            ],
            speakers: vec![],
            raw_reply: String::new(),
        };

        let reply = render(&original);
        let parsed = parse(&reply);

        assert_eq!(parsed.summary, original.summary);
        assert_eq!(parsed.key_decisions, original.key_decisions);
        assert_eq!(parsed.action_items, original.action_items);
        assert_eq!(parsed.speakers, original.speakers);
    }
}
