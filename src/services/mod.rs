// Services layer - Business logic and orchestration
pub mod crypto;
pub mod gemini;
pub mod progress_service;
pub mod token_service;

pub use gemini::{GeminiClient, GeminiService, GenerativeClient};
pub use progress_service::{ProgressService, QuestCompletion, QuizOutcome};
pub use token_service::TokenService;
