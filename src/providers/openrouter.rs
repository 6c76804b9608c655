pub mod client;
pub mod types;

pub use client::{OpenRouterClient, UpstreamFailure};
pub use types::{ChatCompletionRequest, Message};
