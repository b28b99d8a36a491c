//! Core types and logic for the Igniters Academy site.
//!
//! This crate provides everything shared by the site server and the CLI:
//! - `Event` and schedule ordering
//! - `source` module for resolving events from the remote endpoint,
//!   with the built-in fallback schedule
//! - `contact` module for submitting contact messages
//! - `html` module for rendering escaped event cards

pub mod contact;
pub mod error;
pub mod event;
pub mod fallback;
pub mod html;
pub mod source;

// Re-export event types at crate root for convenience
pub use event::*;
