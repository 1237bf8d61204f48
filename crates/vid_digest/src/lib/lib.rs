mod error;
pub mod http;
pub mod media;
mod pipeline;
pub mod summarize;
pub mod tracing;
pub mod yt;

pub use error::PipelineError;
pub use pipeline::{builder::SummaryPipelineBuilder, SummaryPipeline, UNINTELLIGIBLE_MESSAGE};
