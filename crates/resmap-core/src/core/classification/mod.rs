//! # Classification
//!
//! Maps the free-text interaction type labels produced by the analysis service onto a
//! fixed set of categories.
//!
//! Two independent tables live in [`rules`]:
//!
//! - the **filter categories**, a user-facing list of fifteen categories. A record is kept
//!   when *any* selected category has a keyword occurring in its label, so one record may
//!   match several categories at once ([`matcher`]).
//! - the **color classes**, nine coarser classes evaluated in a fixed priority order. The
//!   first class with a matching keyword decides the record's color, which resolves
//!   multi-tag labels such as `"H-bond; Salt-bridge"` to a single representative color
//!   ([`color`]).
//!
//! All matching is a case-insensitive substring test against the whole label.

pub mod color;
pub mod matcher;
pub mod palette;
pub mod rules;

pub use color::{Rgba, classify, opacity_for, resolve_color};
pub use matcher::{matches_selected, matching_categories};
pub use palette::{ColorScheme, DEFAULT_SCHEME, Rgb, scheme, scheme_ids, scheme_or_default};
pub use rules::{CategoryRule, ColorClass, FILTER_CATEGORIES, all_category_ids, find_category};
