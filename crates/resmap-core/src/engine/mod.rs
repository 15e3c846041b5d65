//! # Engine Module
//!
//! The stateful layer between the analysis service and the rendering surfaces.
//!
//! ## Architecture
//!
//! - **Transport Contract** ([`transport`]) - The narrow async interface the store uses to
//!   reach the service, plus the payload envelopes it returns.
//! - **Resource Slots** ([`slot`]) - One generic loading/error/payload cell, instantiated
//!   once per fetched collection.
//! - **Selection State** ([`selection`]) - Threshold, selected categories, chart kind, color
//!   scheme and log-scale flag; changed only by explicit user actions.
//! - **Resource Store** ([`store`]) - Orchestrates fetches and derives the filtered view.
//! - **Progress Monitoring** ([`progress`]) - Callback based reporting for long operations.
//! - **Error Handling** ([`error`]) - Transport error taxonomy.
//!
//! The store never returns errors to callers of its operations: every failed fetch is
//! recorded in the error slot of the resource it belongs to.

pub mod error;
pub mod progress;
pub mod selection;
pub mod slot;
pub mod store;
pub mod transport;
