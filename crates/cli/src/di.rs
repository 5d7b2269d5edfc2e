use dnsq_application::use_cases::ResolveQueryUseCase;
use dnsq_infrastructure::dns::{UdpTransport, WireCodec};
use std::sync::Arc;

/// Wires the hand-written wire codec and the UDP transport into the lookup.
pub fn resolve_query_use_case() -> ResolveQueryUseCase {
    ResolveQueryUseCase::new(Arc::new(WireCodec::new()), Arc::new(UdpTransport::new()))
}
