// Google Gemini generation backend

pub mod client;
pub mod retry;
pub mod types;

pub use client::GeminiClient;
