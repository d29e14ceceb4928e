//! Core domain models for pipeline generation
//!
//! This module defines the generated document (pipelines and steps), the
//! parameters that drive generation, and the builder and writer that turn
//! one into the other.

pub mod builder;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod step;
pub mod template;
pub mod writer;

pub use builder::build_pipeline;
pub use error::GenerateError;
pub use params::Parameters;
pub use pipeline::*;
pub use step::*;
