//! Fitcoach Domain Layer
//!
//! This crate contains the value types shared by every other fitcoach crate and
//! the trait boundary to the text-generation collaborator. It performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Activity**: A recorded workout, already validated and persisted upstream
//! - **Recommendation**: The structured coaching output derived from an AI completion
//! - **TextGenerator**: Prompt in, raw provider envelope out
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Infrastructure implementations live in other crates
//! - Serde wire forms use camelCase so records match the document store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod activity;
pub mod recommendation;
pub mod traits;

// Re-exports for convenience
pub use activity::Activity;
pub use recommendation::Recommendation;
pub use traits::TextGenerator;
