// Shared prompt fragments.
// Each feature module that needs LLM calls defines its own prompts.rs alongside it.

/// Organisation the HR assistant persona works for.
pub const ORGANISATION: &str = "UBS Global Investment Center";

/// Builds the system message for an HR assistant persona with the given specialisation.
pub fn hr_assistant_system(specialisation: &str) -> String {
    format!("You are a professional HR assistant specializing in {specialisation} for {ORGANISATION}.")
}
