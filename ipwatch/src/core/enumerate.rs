//! Network interface address enumeration.
//!
//! Reads the operating system's interface-address list and reduces it to
//! displayable `(name, address)` pairs. The query is best-effort: failures
//! are logged and produce an empty list.

use log::{debug, warn};
use nix::ifaddrs::getifaddrs;
use nix::net::if_::InterfaceFlags;
use nix::sys::socket::SockaddrStorage;
use std::net::{IpAddr, SocketAddrV4, SocketAddrV6};

use crate::api::models::{EnumerateOptions, InterfaceAddress, InterfaceEntry, RawAddress};

/// Source of raw interface-address entries.
///
/// [`SystemInterfaces`] queries the host. Tests and alternative front-ends
/// can supply their own snapshot.
pub trait InterfaceSource {
    /// Returns the current entries in the order the source reports them.
    ///
    /// Must not fail; an unavailable list is reported as empty.
    fn entries(&self) -> Vec<InterfaceEntry>;
}

impl<T: InterfaceSource + ?Sized> InterfaceSource for &T {
    fn entries(&self) -> Vec<InterfaceEntry> {
        (**self).entries()
    }
}

/// The host's interface-address list, read through `getifaddrs(3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn entries(&self) -> Vec<InterfaceEntry> {
        // The iterator owns the OS list and frees it when dropped.
        let addrs = match getifaddrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                warn!("Failed to read interface addresses: {e}");
                return Vec::new();
            }
        };

        let entries: Vec<InterfaceEntry> = addrs
            .map(|ifa| InterfaceEntry {
                loopback: ifa.flags.contains(InterfaceFlags::IFF_LOOPBACK),
                address: ifa.address.as_ref().map(raw_address),
                name: ifa.interface_name,
            })
            .collect();

        debug!("OS reported {} interface entries", entries.len());
        entries
    }
}

fn raw_address(storage: &SockaddrStorage) -> RawAddress {
    if let Some(sin) = storage.as_sockaddr_in() {
        RawAddress::Inet(*SocketAddrV4::from(*sin).ip())
    } else if let Some(sin6) = storage.as_sockaddr_in6() {
        RawAddress::Inet6(*SocketAddrV6::from(*sin6).ip())
    } else {
        RawAddress::Other
    }
}

/// Reduces raw entries to displayable addresses.
///
/// Keeps entries with a non-null IPv4 address, plus IPv6 when
/// `include_ipv6` is set. Loopback interfaces are dropped when
/// `include_loopback` is unset. Input order is preserved.
pub fn filter_entries(
    entries: impl IntoIterator<Item = InterfaceEntry>,
    options: &EnumerateOptions,
) -> Vec<InterfaceAddress> {
    entries
        .into_iter()
        .filter(|entry| options.include_loopback || !entry.loopback)
        .filter_map(|entry| {
            let ip: IpAddr = match entry.address? {
                RawAddress::Inet(v4) => v4.into(),
                RawAddress::Inet6(v6) if options.include_ipv6 => v6.into(),
                RawAddress::Inet6(_) | RawAddress::Other => return None,
            };
            Some(InterfaceAddress::new(entry.name, ip))
        })
        .collect()
}

/// Enumerates the addresses of `source` that pass `options`.
pub fn list_addresses<S: InterfaceSource + ?Sized>(
    source: &S,
    options: &EnumerateOptions,
) -> Vec<InterfaceAddress> {
    filter_entries(source.entries(), options)
}

/// Enumerates the host's addresses that pass `options`.
pub fn local_addresses(options: &EnumerateOptions) -> Vec<InterfaceAddress> {
    list_addresses(&SystemInterfaces, options)
}
