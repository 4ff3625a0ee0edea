use crate::api::models::{EnumerateOptions, InterfaceAddress};
use crate::core::enumerate::{InterfaceSource, SystemInterfaces, list_addresses};
use crate::core::format::render_text;

/// High-level entry point for listing local interface addresses.
///
/// Pairs an [`InterfaceSource`] with the [`EnumerateOptions`] to apply.
/// Every call re-reads the source; nothing is cached.
///
/// # Example
///
/// ```no_run
/// use ipwatch::{AddressLister, EnumerateOptions};
///
/// let lister = AddressLister::new(EnumerateOptions::default().with_ipv6(true));
/// print!("{}", lister.text());
/// ```
#[derive(Debug, Clone)]
pub struct AddressLister<S = SystemInterfaces> {
    source: S,
    options: EnumerateOptions,
}

impl AddressLister<SystemInterfaces> {
    /// Creates a lister backed by the host's interface list.
    pub fn new(options: EnumerateOptions) -> Self {
        Self::with_source(SystemInterfaces, options)
    }
}

impl<S: InterfaceSource> AddressLister<S> {
    /// Creates a lister backed by a custom source.
    pub fn with_source(source: S, options: EnumerateOptions) -> Self {
        Self { source, options }
    }

    /// Returns the current addresses in the order the source reports them.
    pub fn addresses(&self) -> Vec<InterfaceAddress> {
        list_addresses(&self.source, &self.options)
    }

    /// Returns the current addresses rendered as text.
    pub fn text(&self) -> String {
        render_text(&self.addresses())
    }

    pub fn options(&self) -> &EnumerateOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
