pub mod error;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod validate;
pub mod view;

#[cfg(feature = "rig")]
pub mod rig_backend;

// Re-export commonly used types
pub use error::{LlmError, MalformedOutput};
pub use extract::{extract_json, find_object_span};
pub use llm::{ChatMessage, CompletionBackend, CompletionRequest, Role};
pub use validate::{parse_model_json, validate_json};
pub use view::ViewType;

#[cfg(feature = "rig")]
pub use rig_backend::RigBackend;
