//! Interview question schema and strict parsing of LLM output.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;

/// The closed set of question categories. Wire strings are the display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    Experience,
    Methodology,
    #[serde(rename = "Culture Fit")]
    CultureFit,
    #[serde(rename = "Professional Development")]
    ProfessionalDevelopment,
    Adaptability,
    Communication,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    Process,
    #[serde(rename = "Career Planning")]
    CareerPlanning,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 10] = [
        QuestionCategory::Technical,
        QuestionCategory::Experience,
        QuestionCategory::Methodology,
        QuestionCategory::CultureFit,
        QuestionCategory::ProfessionalDevelopment,
        QuestionCategory::Adaptability,
        QuestionCategory::Communication,
        QuestionCategory::ProblemSolving,
        QuestionCategory::Process,
        QuestionCategory::CareerPlanning,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::Technical => "Technical",
            QuestionCategory::Experience => "Experience",
            QuestionCategory::Methodology => "Methodology",
            QuestionCategory::CultureFit => "Culture Fit",
            QuestionCategory::ProfessionalDevelopment => "Professional Development",
            QuestionCategory::Adaptability => "Adaptability",
            QuestionCategory::Communication => "Communication",
            QuestionCategory::ProblemSolving => "Problem Solving",
            QuestionCategory::Process => "Process",
            QuestionCategory::CareerPlanning => "Career Planning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub category: QuestionCategory,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub questions: Vec<Question>,
}

/// Parses completion text into questions.
/// Optional Markdown fences are stripped; anything that is not an array of
/// well-formed `Question` objects is rejected.
pub fn parse_questions(completion: &str) -> Result<Vec<Question>, AppError> {
    serde_json::from_str(strip_json_fences(completion)).map_err(|e| AppError::Parse {
        cause: e.to_string(),
        raw: completion.to_string(),
    })
}
