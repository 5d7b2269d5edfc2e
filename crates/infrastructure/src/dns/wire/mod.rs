pub mod codec;
pub mod message_builder;
pub mod name;
mod reader;
pub mod record_parser;
pub mod response_parser;

pub use codec::WireCodec;
pub use message_builder::MessageBuilder;
pub use name::read_name;
pub use record_parser::RecordParser;
pub use response_parser::ResponseParser;
