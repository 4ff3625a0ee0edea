//! Periodic presentation of the address list.
//!
//! This module provides the presenter state machine and the async driver
//! that ticks it on a fixed interval.

pub mod periodic;
pub mod presenter;
