pub mod transport;
pub mod wire;

pub use transport::UdpTransport;
pub use wire::{MessageBuilder, RecordParser, ResponseParser, WireCodec};
