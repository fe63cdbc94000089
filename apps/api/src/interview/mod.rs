// Interview questions: LLM generation with strict schema checks, CV upload.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod questions;
