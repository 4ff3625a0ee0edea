//! Public API module.
//!
//! This module contains the high-level user-facing API for the `ipwatch` crate.

pub mod lister;
pub mod models;
