//! External service clients and enrichment logic

pub mod enrichment;
pub mod gemini;

pub use enrichment::Enrichment;
pub use gemini::{GeminiClient, GeminiError};
