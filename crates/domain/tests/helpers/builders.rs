#![allow(dead_code)]
use dnsq_domain::{DnsRecord, RecordData};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub struct DnsRecordBuilder {
    name: String,
    ttl: u32,
    rdlength: u16,
    data: RecordData,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            ttl: 300,
            rdlength: 4,
            data: RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.data = RecordData::A(Ipv4Addr::from_str(address).unwrap());
        self.rdlength = 4;
        self
    }

    pub fn mx(mut self, preference: u16, exchange: &str) -> Self {
        self.data = RecordData::Mx {
            preference,
            exchange: exchange.to_string(),
        };
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.data = RecordData::Cname(target.to_string());
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::new(self.name, self.ttl, self.rdlength, self.data)
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
