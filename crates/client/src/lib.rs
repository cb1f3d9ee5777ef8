//! Client side of the pet catalog.
//!
//! [`api`] is the data layer: one HTTP call per UI action against the pet
//! service. [`ui`] holds the per-page view state, the shared pet form,
//! client-side filtering, notifications and plain-text rendering used by
//! the `pets` binary.

pub mod api;
pub mod models;
pub mod ui;
