// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// The literal token the model is told to put between list items.
/// Newline bullets proved unreliable across responses; a token is unambiguous to split on.
pub const ITEM_SEPARATOR: &str = "[SEP]";

/// System prompt fragment that enforces plain-text, unformatted output.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a precise, structured assistant. \
    Respond in plain text only. \
    Do NOT use markdown code fences, tables, or nested lists. \
    Do NOT include greetings, explanations of your process, or apologies.";

/// Instruction that keeps critiques tied to the supplied document.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Base every point strictly on the document text provided. \
    Do NOT invent achievements, dates, citations, or credentials that are not in the document. \
    If the document is silent on something an adjudicator would expect, say it is missing.";
