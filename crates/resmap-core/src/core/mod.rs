//! # Core Module
//!
//! Stateless building blocks shared by every rendering surface.
//!
//! - **Data Models** ([`models`]) - Datasets, interaction records, per-frame series and
//!   processing job payloads, exactly as the analysis service serializes them.
//! - **Classification** ([`classification`]) - The ordered keyword rule tables, the color
//!   palettes, and the two pure functions built on them: color resolution and selected
//!   category matching.

pub mod classification;
pub mod models;
