use clap::Parser;
use dnsq_domain::{CliOverrides, Config, DnsRequest, RecordType};
use std::ffi::OsString;
use std::net::{Ipv4Addr, SocketAddr};

#[derive(Parser, Debug)]
#[command(name = "dnsq")]
#[command(version)]
#[command(about = "Send a single DNS query over UDP and print the decoded response")]
pub struct Cli {
    /// Seconds to wait for each response before retransmitting
    #[arg(short = 't', long = "timeout", value_name = "SECONDS", value_parser = parse_timeout_secs)]
    pub timeout: Option<f64>,

    /// Retransmissions allowed after the first send
    #[arg(short = 'r', long = "max-retries", value_name = "N")]
    pub max_retries: Option<u32>,

    /// UDP port of the DNS server
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Query for mail exchange records (also accepted as -mx)
    #[arg(long, conflicts_with = "ns")]
    pub mx: bool,

    /// Query for name server records (also accepted as -ns)
    #[arg(long)]
    pub ns: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// IPv4 address of the DNS server, written as @a.b.c.d
    #[arg(value_name = "@SERVER", value_parser = parse_server)]
    pub server: Ipv4Addr,

    /// Domain name to look up
    pub name: String,
}

impl Cli {
    pub fn record_type(&self) -> RecordType {
        if self.mx {
            RecordType::MX
        } else if self.ns {
            RecordType::NS
        } else {
            RecordType::A
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            timeout_ms: self.timeout.map(secs_to_millis),
            max_retries: self.max_retries,
            log_level: self.log_level.clone(),
        }
    }

    /// Builds the request from parsed arguments and the merged configuration.
    pub fn to_request(&self, config: &Config) -> DnsRequest {
        let server = SocketAddr::from((self.server, config.resolver.port));
        DnsRequest::new(self.name.as_str(), self.record_type(), server)
            .with_timeout(config.resolver.timeout())
            .with_max_retries(config.resolver.max_retries)
    }
}

/// Rewrites the single-dash `-mx` and `-ns` flags into their long form so clap
/// does not read them as bundled short options.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == "-mx" {
                OsString::from("--mx")
            } else if arg == "-ns" {
                OsString::from("--ns")
            } else {
                arg
            }
        })
        .collect()
}

fn parse_server(value: &str) -> Result<Ipv4Addr, String> {
    let Some(address) = value.strip_prefix('@') else {
        return Err(format!("server must be written as @a.b.c.d, got '{}'", value));
    };
    address
        .parse()
        .map_err(|_| format!("'{}' is not a valid IPv4 address", address))
}

fn parse_timeout_secs(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err("timeout must be greater than 0".to_string());
    }
    Ok(secs)
}

fn secs_to_millis(secs: f64) -> u64 {
    (secs * 1000.0).round() as u64
}
