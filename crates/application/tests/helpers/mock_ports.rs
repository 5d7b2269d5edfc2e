#![allow(dead_code)]

use async_trait::async_trait;
use dnsq_application::ports::{DnsCodec, DnsTransport, TransportResponse};
use dnsq_domain::{
    DecodedMessage, DnsQuery, DnsRecord, DomainError, EncodeError, Header, RecordData,
};
use std::collections::VecDeque;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const QUERY_BYTES: &[u8] = &[0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0, 0];

/// Transport that replays a script of outcomes, one per call.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Result<Vec<u8>, DomainError>>>>,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    calls: Arc<AtomicU32>,
    always_timeout: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always_timing_out() -> Self {
        Self {
            always_timeout: true,
            ..Self::default()
        }
    }

    pub fn push_response(&self, bytes: Vec<u8>) {
        self.script.lock().unwrap().push_back(Ok(bytes));
    }

    pub fn push_timeout(&self) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(DomainError::QueryTimeout {
                server: server_addr(),
            }));
    }

    pub fn push_error(&self, error: DomainError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent_messages(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(message_bytes.to_vec());

        if self.always_timeout {
            return Err(DomainError::QueryTimeout { server });
        }

        match self.script.lock().unwrap().pop_front() {
            Some(Ok(bytes)) => Ok(TransportResponse {
                bytes,
                protocol_used: "MOCK",
            }),
            Some(Err(e)) => Err(e),
            None => Err(DomainError::Transport {
                server,
                reason: "mock script exhausted".to_string(),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

/// Codec that emits fixed query bytes and decodes every reply to the same
/// canned message.
#[derive(Clone)]
pub struct MockCodec {
    encode_error: Option<EncodeError>,
    decode_error: Option<DomainError>,
    decoded: DecodedMessage,
    decode_calls: Arc<Mutex<Vec<(Vec<u8>, usize)>>>,
}

impl MockCodec {
    pub fn new() -> Self {
        let header = Header {
            response: true,
            recursion_available: true,
            ancount: 1,
            ..Header::default()
        };
        let answer = DnsRecord::new(
            "example.com",
            300,
            4,
            RecordData::A(Ipv4Addr::new(93, 184, 216, 34)),
        );
        Self {
            encode_error: None,
            decode_error: None,
            decoded: DecodedMessage::new(header, vec![answer], vec![]),
            decode_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_encode(error: EncodeError) -> Self {
        Self {
            encode_error: Some(error),
            ..Self::new()
        }
    }

    pub fn failing_decode(error: DomainError) -> Self {
        Self {
            decode_error: Some(error),
            ..Self::new()
        }
    }

    pub fn decoded(&self) -> DecodedMessage {
        self.decoded.clone()
    }

    pub fn decode_calls(&self) -> Vec<(Vec<u8>, usize)> {
        self.decode_calls.lock().unwrap().clone()
    }
}

impl Default for MockCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsCodec for MockCodec {
    fn encode(&self, _query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        match &self.encode_error {
            Some(e) => Err(e.clone().into()),
            None => Ok(QUERY_BYTES.to_vec()),
        }
    }

    fn decode(&self, response: &[u8], query_len: usize) -> Result<DecodedMessage, DomainError> {
        self.decode_calls
            .lock()
            .unwrap()
            .push((response.to_vec(), query_len));
        match &self.decode_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.decoded.clone()),
        }
    }
}

pub fn server_addr() -> SocketAddr {
    "192.0.2.53:53".parse().unwrap()
}
