//! # resmap Core Library
//!
//! Client-side state and presentation mapping for per-residue interaction maps. The
//! interaction records themselves are computed by a remote analysis service; this crate
//! fetches them, filters them, and maps each record to a color-coded visual category.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict layered architecture so that the classification rules can
//! be tested without a network and the store can be tested without a real server.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Dataset`, `InteractionRecord`)
//!   and the pure classification layer: the ordered rule tables, the color resolver and the
//!   type matcher.
//!
//! - **[`engine`]: The State Core.** The `ResourceStore`, which owns the dataset list, four
//!   independently loaded resource slots and the user's selection state, and derives the
//!   filtered interaction view. It talks to the network only through the [`engine::transport::Transport`]
//!   trait.
//!
//! - **[`client`]: The Transport Adapter.** An HTTP implementation of `Transport` built on
//!   `reqwest`, with a fixed request timeout and a configurable endpoint base.
//!
//! - **[`workflows`]: The Public API.** Multi-step procedures such as uploading a structure
//!   file and following its processing job to completion.

pub mod client;
pub mod core;
pub mod engine;
pub mod workflows;
