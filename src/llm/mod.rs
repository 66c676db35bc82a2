pub mod client;
pub mod types;

pub use client::{LlmClient, OpenAiClient};
pub use types::*;
