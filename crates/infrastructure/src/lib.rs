//! Wire codec and UDP transport adapters for dnsq.
pub mod dns;
