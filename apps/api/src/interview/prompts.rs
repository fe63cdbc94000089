// LLM prompt builders for the interview module.

use crate::interview::questions::QuestionCategory;
use crate::llm_client::prompts::hr_assistant_system;

pub const QUESTION_COUNT: usize = 10;

const NO_CV_CONTEXT: &str = "No CV provided, focus on job requirements only.";

pub fn questions_system() -> String {
    hr_assistant_system("creating tailored interview questions")
}

/// "A, B, ... or J" over every category label.
fn category_list() -> String {
    let labels: Vec<&str> = QuestionCategory::ALL.iter().map(|c| c.label()).collect();
    match labels.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}

fn cv_context(cv_text: Option<&str>) -> String {
    match cv_text {
        Some(cv) if !cv.is_empty() => format!("CV details: {cv}"),
        _ => NO_CV_CONTEXT.to_string(),
    }
}

/// Each argument is interpolated exactly once; user text is never rescanned.
pub fn build_questions_prompt(job_spec: &str, cv_text: Option<&str>) -> String {
    let cv_context = cv_context(cv_text);
    let categories = category_list();
    format!(
        "Generate {QUESTION_COUNT} interview questions for a candidate based on the following job specification:

{job_spec}

{cv_context}

For each question, assign a category from: {categories}.

Format as a JSON array with objects containing 'id', 'text', and 'category' fields."
    )
}
