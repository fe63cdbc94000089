// LLM prompt builders for the job spec module.
// Reuses the HR assistant persona from llm_client::prompts.

use crate::llm_client::prompts::hr_assistant_system;

pub fn job_spec_system() -> String {
    hr_assistant_system("creating detailed job specifications")
}

/// Each argument is interpolated exactly once; user text is never rescanned.
pub fn build_job_spec_prompt(position: &str, requirements: &str) -> String {
    format!(
        "Create a detailed job specification for a {position} role.

Requirements:
{requirements}

The job specification should include:
1. Overview of the role
2. Key responsibilities
3. Required skills and experience
4. Education and qualifications
5. Benefits and perks

Format the response in Markdown."
    )
}
