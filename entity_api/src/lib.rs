pub use entity::{meetings, status_checks, Id};

pub mod error;
pub mod meeting;
pub mod mutate;
pub mod status_check;
