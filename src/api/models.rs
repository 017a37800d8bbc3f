use serde::{Deserialize, Serialize};

fn default_topic() -> String {
    "General".to_string()
}

fn default_difficulty() -> String {
    "Medium".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub topic: String,
    pub difficulty: String,
}

/// Raw numbered-list text, exactly as the model produced it.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub questions: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub question: String,
    pub user_answer: String,
}

#[derive(Debug, Deserialize)]
pub struct CodeReviewRequest {
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Markdown feedback from the review model.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub title: String,
    pub url: String,
    pub difficulty: String,
    pub pattern: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
