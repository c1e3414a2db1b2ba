// All LLM prompt constants for the Critique module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::evidence::EvidenceCategory;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, ITEM_SEPARATOR, PLAIN_TEXT_SYSTEM};

/// Persona for document critique. Combined with the plain-text fragment in `critique_system`.
const CRITIQUE_PERSONA: &str = "You are an experienced immigration attorney reviewing \
    supporting evidence for an extraordinary-ability petition. \
    You are candid and specific: praise only what the document actually proves, \
    and name concrete gaps an adjudicator would raise.";

/// Critique prompt template. Replace `{category}`, `{focus}`, `{separator}` and
/// `{document_text}` before sending.
const CRITIQUE_PROMPT_TEMPLATE: &str = r#"Review the following document submitted as evidence for the "{category}" criterion.

An adjudicator evaluating this criterion looks for: {focus}.

DOCUMENT:
{document_text}

Respond with EXACTLY three sections, in this order, each label on its own line:
Strengths:
Weaknesses:
Recommendations:

FORMAT RULES:
1. Put all items of a section on the same line as its label.
2. Separate items with the token {separator}, never with newlines, dashes, bullets, or numbers.
3. Keep each item to one sentence.
4. If a section has nothing to report, leave it empty after the label.

EXAMPLE:
Strengths: Letter is signed on institutional letterhead{separator}Cites two specific publications
Weaknesses: Does not state the author's own expertise
Recommendations: Ask the author to add a short biography{separator}Include citation counts"#;

pub fn critique_system() -> String {
    format!("{CRITIQUE_PERSONA} {PLAIN_TEXT_SYSTEM} {GROUNDING_INSTRUCTION}")
}

pub fn critique_prompt(category: EvidenceCategory, document_text: &str) -> String {
    CRITIQUE_PROMPT_TEMPLATE
        .replace("{category}", category.label())
        .replace("{focus}", category.review_focus())
        .replace("{separator}", ITEM_SEPARATOR)
        // document last so its own braces are never substituted
        .replace("{document_text}", document_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::summary::parse_summary;

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = critique_prompt(EvidenceCategory::Judging, "Reviewer for IEEE TPAMI.");
        for placeholder in ["{category}", "{focus}", "{separator}", "{document_text}"] {
            assert!(!prompt.contains(placeholder), "left {placeholder} in prompt");
        }
        assert!(prompt.contains("Judging the Work of Others"));
        assert!(prompt.contains("Reviewer for IEEE TPAMI."));
        assert!(prompt.contains("[SEP]"));
    }

    #[test]
    fn test_document_braces_are_left_alone() {
        let prompt = critique_prompt(EvidenceCategory::Publications, "see {focus} in appendix");
        assert!(prompt.contains("see {focus} in appendix"));
    }

    #[test]
    fn test_prompt_example_parses_with_summary_parser() {
        let prompt = critique_prompt(EvidenceCategory::Recognition, "doc");
        let example = prompt.split("EXAMPLE:").nth(1).unwrap();
        let parsed = parse_summary(example);
        assert_eq!(parsed.strengths.len(), 2);
        assert_eq!(parsed.weaknesses.len(), 1);
        assert_eq!(parsed.recommendations.len(), 2);
    }

    #[test]
    fn test_system_prompt_includes_fragments() {
        let system = critique_system();
        assert!(system.contains("plain text"));
        assert!(system.contains("Do NOT invent"));
    }
}
