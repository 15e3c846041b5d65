//! # Workflows
//!
//! High-level procedures built from the engine for use by rendering surfaces.
//!
//! - [`processing`] - Upload a structure file and follow the service's processing job
//!   until it completes or fails.

pub mod processing;
