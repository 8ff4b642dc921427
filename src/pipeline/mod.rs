pub mod coerce;
pub mod openai;
pub mod orchestrator;
pub mod parser;
pub mod prompt;

pub use coerce::*;
pub use openai::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("No API key configured. Set OPENAI_API_KEY or pass a key first.")]
    MissingApiKey,

    #[error("Meeting minutes text is empty")]
    EmptyInput,

    #[error("Cannot reach completion endpoint at {0}")]
    Connection(String),

    #[error("Completion endpoint returned error (status {status}): {body}")]
    Provider { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}
