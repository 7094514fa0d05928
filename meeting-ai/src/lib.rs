//! Meeting AI abstraction layer for transcription and analysis providers.
//!
//! This crate holds the provider-agnostic half of meeting processing:
//! - Speech-to-text and LLM completion provider traits
//! - The analysis prompt sent to the LLM
//! - The section parser that turns a free-form LLM reply into an [`AnalysisResult`]
//!
//! Nothing in here performs I/O; concrete providers live with the application.

pub mod error;
pub mod prompt;
pub mod sections;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::analysis::AnalysisResult;
