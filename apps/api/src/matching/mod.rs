// Resume/job matching and interview preparation.
// All LLM calls go through the injected GenerativeClient.

pub mod handlers;
pub mod interview;
pub mod parser;
pub mod pipeline;
pub mod prompts;
