use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use thiserror::Error;

/// Address reported by the OS for one interface-address entry.
///
/// The OS list also carries link-layer and other families; those are kept
/// as [`RawAddress::Other`] so the filter can see and skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawAddress {
    /// An IPv4 address (`AF_INET`).
    Inet(Ipv4Addr),
    /// An IPv6 address (`AF_INET6`).
    Inet6(Ipv6Addr),
    /// Any other address family (link-layer, etc.).
    Other,
}

impl RawAddress {
    /// Returns the IP address for the inet families, `None` otherwise.
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Inet(v4) => Some(IpAddr::V4(*v4)),
            Self::Inet6(v6) => Some(IpAddr::V6(*v6)),
            Self::Other => None,
        }
    }
}

impl From<IpAddr> for RawAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Self::Inet(v4),
            IpAddr::V6(v6) => Self::Inet6(v6),
        }
    }
}

/// One row of the OS interface-address list, before filtering.
///
/// An interface appears once per assigned address, so a single adapter
/// usually yields several entries (link-layer, IPv4, IPv6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// Interface name (e.g. "eth0", "wlan0").
    pub name: String,
    /// Address of this entry, `None` when the OS reports a null address.
    pub address: Option<RawAddress>,
    /// Whether the interface is a loopback interface.
    pub loopback: bool,
}

impl InterfaceEntry {
    /// Creates an entry for a non-loopback interface.
    pub fn new(name: impl Into<String>, address: Option<RawAddress>) -> Self {
        Self {
            name: name.into(),
            address,
            loopback: false,
        }
    }

    /// Marks the entry as belonging to a loopback interface.
    #[must_use]
    pub fn with_loopback(mut self, loopback: bool) -> Self {
        self.loopback = loopback;
        self
    }
}

/// An `(interface name, address)` pair ready for display.
///
/// # Example
///
/// ```rust
/// use ipwatch::InterfaceAddress;
///
/// let addr = InterfaceAddress::new("eth0", "192.168.1.5".parse().unwrap());
/// assert_eq!(addr.to_string(), "eth0 : 192.168.1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// Interface name.
    pub name: String,
    /// IPv4 or IPv6 address.
    pub addr: IpAddr,
}

impl InterfaceAddress {
    pub fn new(name: impl Into<String>, addr: IpAddr) -> Self {
        Self {
            name: name.into(),
            addr,
        }
    }
}

impl Display for InterfaceAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.name, self.addr)
    }
}

/// Controls which entries the enumerator keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Keep IPv6 entries. Off by default.
    pub include_ipv6: bool,
    /// Keep entries of loopback interfaces. On by default.
    pub include_loopback: bool,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            include_ipv6: false,
            include_loopback: true,
        }
    }
}

impl EnumerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ipv6(mut self, include_ipv6: bool) -> Self {
        self.include_ipv6 = include_ipv6;
        self
    }

    #[must_use]
    pub fn with_loopback(mut self, include_loopback: bool) -> Self {
        self.include_loopback = include_loopback;
        self
    }
}

/// Lifecycle state of a [`Presenter`](crate::Presenter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenterState {
    /// Constructed or stopped; ticks are ignored.
    #[default]
    Idle,
    /// Rendering on every tick.
    Displaying,
}

impl Display for PresenterState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Displaying => write!(f, "displaying"),
        }
    }
}

/// Errors that can occur while configuring or running ipwatch.
///
/// Address enumeration itself never fails; these cover the surrounding
/// configuration layer.
///
/// # Example
///
/// ```rust
/// use ipwatch::{WatchConfig, WatchError};
///
/// let config = WatchConfig {
///     refresh_interval_ms: 0,
///     ..WatchConfig::default()
/// };
/// assert!(matches!(config.validate(), Err(WatchError::InvalidInterval(0))));
/// ```
#[derive(Debug, Error)]
pub enum WatchError {
    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML or has wrong field types.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The refresh interval must be between 1 and `u32::MAX` milliseconds.
    #[error("invalid refresh interval: {0} ms")]
    InvalidInterval(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_address_display_ipv4() {
        let addr = InterfaceAddress::new("eth0", "192.168.1.5".parse().unwrap());
        assert_eq!(format!("{addr}"), "eth0 : 192.168.1.5");
    }

    #[test]
    fn interface_address_display_ipv6_uses_compressed_form() {
        let addr = InterfaceAddress::new("wlan0", "fe80:0:0:0:1:2:3:4".parse().unwrap());
        assert_eq!(format!("{addr}"), "wlan0 : fe80::1:2:3:4");
    }

    #[test]
    fn raw_address_ip() {
        let v4 = Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(RawAddress::Inet(v4).ip(), Some(IpAddr::V4(v4)));
        assert_eq!(
            RawAddress::Inet6(Ipv6Addr::LOCALHOST).ip(),
            Some(IpAddr::V6(Ipv6Addr::LOCALHOST))
        );
        assert_eq!(RawAddress::Other.ip(), None);
    }

    #[test]
    fn raw_address_from_ip() {
        let ip: IpAddr = "::1".parse().unwrap();
        assert_eq!(RawAddress::from(ip), RawAddress::Inet6(Ipv6Addr::LOCALHOST));
    }

    #[test]
    fn enumerate_options_defaults() {
        let opts = EnumerateOptions::default();
        assert!(!opts.include_ipv6);
        assert!(opts.include_loopback);
    }

    #[test]
    fn enumerate_options_builders() {
        let opts = EnumerateOptions::new().with_ipv6(true).with_loopback(false);
        assert!(opts.include_ipv6);
        assert!(!opts.include_loopback);
    }

    #[test]
    fn presenter_state_display() {
        assert_eq!(PresenterState::default(), PresenterState::Idle);
        assert_eq!(format!("{}", PresenterState::Displaying), "displaying");
    }

    #[test]
    fn watch_error_display() {
        assert_eq!(
            format!("{}", WatchError::InvalidInterval(0)),
            "invalid refresh interval: 0 ms"
        );
    }
}
