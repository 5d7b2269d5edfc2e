use crate::ports::{DnsCodec, DnsTransport};
use dnsq_domain::{DnsRequest, DomainError, Resolution};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Encodes a query once, sends it until a reply arrives or the retry budget is
/// spent, then validates and decodes the reply.
pub struct ResolveQueryUseCase {
    codec: Arc<dyn DnsCodec>,
    transport: Arc<dyn DnsTransport>,
}

impl ResolveQueryUseCase {
    pub fn new(codec: Arc<dyn DnsCodec>, transport: Arc<dyn DnsTransport>) -> Self {
        Self { codec, transport }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<Resolution, DomainError> {
        let message = self.codec.encode(&request.query)?;
        let max_attempts = request.max_attempts();

        debug!(
            domain = %request.query.domain,
            record_type = %request.query.record_type,
            server = %request.server,
            bytes = message.len(),
            "Query encoded"
        );

        let start = Instant::now();
        let mut attempt: u32 = 0;

        // The same bytes (and transaction ID) go out on every attempt.
        let response = loop {
            attempt += 1;
            match self
                .transport
                .send(&message, request.server, request.timeout)
                .await
            {
                Ok(response) => break response,
                Err(e) if e.is_retryable() => {
                    if attempt >= max_attempts {
                        warn!(
                            server = %request.server,
                            attempts = attempt,
                            "Retry budget exhausted"
                        );
                        return Err(DomainError::RetriesExhausted {
                            attempts: attempt,
                            server: request.server,
                        });
                    }
                    warn!(
                        server = %request.server,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        "Query timed out, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        };

        let elapsed = start.elapsed();
        let decoded = self.codec.decode(&response.bytes, message.len())?;
        let retries = attempt - 1;

        info!(
            domain = %request.query.domain,
            protocol = response.protocol_used,
            retries = retries,
            elapsed_ms = elapsed.as_millis() as u64,
            answers = decoded.answers().len(),
            additional = decoded.additional().len(),
            "Query resolved"
        );

        Ok(Resolution {
            message: decoded,
            retries,
            elapsed,
        })
    }
}
