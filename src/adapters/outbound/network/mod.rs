/// Network adapters for remote analysis backends
mod gemini_provider;
mod openai_provider;
mod prompt;
mod response_parser;

pub use gemini_provider::GeminiProvider;
pub use openai_provider::OpenAiProvider;
pub use prompt::AnalysisPrompt;
pub use response_parser::{ParseError, ResponseParser};

use crate::shared::Result;

/// Shared HTTP client settings for every remote backend
fn http_client() -> Result<reqwest::Client> {
    let version = env!("CARGO_PKG_VERSION");
    let user_agent = format!("arch-impact/{}", version);
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}
