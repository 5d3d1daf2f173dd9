pub mod calories; // Static calorie table and lookup
pub mod openai; // OpenAI-compatible vision model client
pub mod recognizer;

pub use openai::OpenAIRecognizer;
pub use recognizer::FoodRecognizer;
