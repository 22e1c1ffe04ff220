use serde::{Deserialize, Serialize};
use summary_core::{ChatMessage, ViewType};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub medical_text: Option<String>,
    #[serde(default)]
    pub view_type: Option<ViewType>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub medical_text: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub view_type: Option<ViewType>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExplainTermRequest {
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// The model's JSON, as a string.
    pub summary: String,
    pub view_type: ViewType,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainTermResponse {
    pub explanation: String,
    pub term: String,
    pub timestamp: String,
}

pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
