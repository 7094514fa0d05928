//! This module re-exports various items from the `entity_api` and `meeting-ai` crates.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate. By re-exporting these items, we provide a clear and
//! consistent interface for working with meetings within the domain layer, while the
//! underlying implementation details remain in the `entity_api` crate.
pub use entity_api::mutate::{IntoUpdateMap, UpdateMap};

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{meetings, status_checks, Id};

pub use meeting_ai::traits::analysis::Provider as AnalysisProvider;
pub use meeting_ai::traits::transcription::Provider as TranscriptionProvider;
pub use meeting_ai::{AnalysisResult, Error as ProviderError};

pub mod analysis;
pub mod error;
pub mod meeting;
pub mod status_check;

pub mod gateway;
