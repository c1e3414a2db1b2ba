// Evidence critique: extract document text, ask the model for a critique,
// parse the answer into strengths / weaknesses / recommendations.
// All LLM calls go through the injected CompletionProvider.

pub mod critic;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod summary;
