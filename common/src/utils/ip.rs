use std::net::IpAddr;

/// Whether an address belongs to a private range (RFC 1918 for IPv4,
/// unique-local for IPv6).
pub fn is_private(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_private(),
        IpAddr::V6(v6) => (v6.segments()[0] & 0xfe00) == 0xfc00,
    }
}
