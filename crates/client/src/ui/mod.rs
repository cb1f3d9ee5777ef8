//! Terminal rendition of the catalog pages.
//!
//! Each page owns its local view state (loading flag, fetched records,
//! filter or form values) and talks to the service only through
//! [`PetClient`](crate::api::PetClient). Rendering is a pure function of
//! that state.

pub mod filter;
pub mod form;
pub mod notify;
pub mod pages;
pub mod render;
