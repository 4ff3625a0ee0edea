//! Text rendering of the address list.

use std::fmt::Write;

use crate::api::models::InterfaceAddress;

/// Renders addresses as one `"<name> : <address>"` line each.
///
/// Every line ends with `'\n'`, including the last one; an empty list
/// renders as the empty string.
pub fn render_text(addresses: &[InterfaceAddress]) -> String {
    addresses.iter().fold(String::new(), |mut out, addr| {
        let _ = writeln!(out, "{addr}");
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_empty_string() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn single_address_has_trailing_newline() {
        let addrs = [InterfaceAddress::new("eth0", "192.168.1.5".parse().unwrap())];
        assert_eq!(render_text(&addrs), "eth0 : 192.168.1.5\n");
    }

    #[test]
    fn multiple_addresses_keep_order() {
        let addrs = [
            InterfaceAddress::new("lo", "127.0.0.1".parse().unwrap()),
            InterfaceAddress::new("eth0", "192.168.1.5".parse().unwrap()),
            InterfaceAddress::new("eth0", "fe80::1".parse().unwrap()),
        ];
        assert_eq!(
            render_text(&addrs),
            "lo : 127.0.0.1\neth0 : 192.168.1.5\neth0 : fe80::1\n"
        );
    }
}
