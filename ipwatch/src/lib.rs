//! A Rust library for listing local network interface addresses and keeping
//! a text display of them fresh.
//!
//! This crate provides a small synchronous API around the operating system's
//! interface-address list:
//!
//! - Enumerating `(interface, address)` pairs for IPv4 (and optionally IPv6)
//! - Rendering them as `"<name> : <address>"` lines
//! - Driving a [`Presenter`] that republishes the text on a fixed period
//!
//! # Example
//!
//! ```no_run
//! use ipwatch::{AddressLister, EnumerateOptions};
//!
//! let lister = AddressLister::new(EnumerateOptions::default());
//! for addr in lister.addresses() {
//!     println!("{addr}");
//! }
//! ```
//!
//! # Error Handling
//!
//! Enumeration is best-effort and never fails: when the OS query fails or
//! reports nothing, the result is simply empty. Fallible operations
//! (configuration loading) return `Result<T, WatchError>`.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`. For example:

//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

// Internal implementation modules
mod core;
mod types;

// Public API modules
pub mod api;
pub mod config;
pub mod monitoring;

// Re-exported public API
pub use api::lister::AddressLister;
pub use api::models::{
    EnumerateOptions, InterfaceAddress, InterfaceEntry, PresenterState, RawAddress, WatchError,
};
pub use config::WatchConfig;
pub use crate::core::enumerate::{
    InterfaceSource, SystemInterfaces, filter_entries, list_addresses, local_addresses,
};
pub use crate::core::format::render_text;
pub use monitoring::periodic::run_periodic;
pub use monitoring::presenter::{Presenter, TextSurface};

/// A specialized `Result` type for ipwatch operations.
pub type Result<T> = std::result::Result<T, WatchError>;
