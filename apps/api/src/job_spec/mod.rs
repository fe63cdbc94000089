// Job specifications: template catalog, LLM generation, file upload.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod templates;
