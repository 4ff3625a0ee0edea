//! Core internal logic for address enumeration.
//!
//! This module contains the OS query and the text rendering of its results.

pub(crate) mod enumerate;
pub(crate) mod format;
