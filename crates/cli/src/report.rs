use dnsq_domain::{DecodedMessage, DnsRecord, DnsRequest, RecordData, Resolution};
use std::fmt::Write;

pub fn render_banner(request: &DnsRequest) -> String {
    format!(
        "DnsClient sending request for {}\nServer: {}\nRequest type: {}\n",
        request.query.domain,
        request.server.ip(),
        request.query.record_type
    )
}

pub fn render_resolution(resolution: &Resolution) -> String {
    let mut out = format!(
        "Response received after {:.3} seconds ({} retries)\n",
        resolution.elapsed.as_secs_f64(),
        resolution.retries
    );
    out.push_str(&render_message(&resolution.message));
    out
}

/// Empty sections print no header; a response with nothing in either section
/// prints `NOT FOUND`.
pub fn render_message(message: &DecodedMessage) -> String {
    if message.is_not_found() {
        return "NOT FOUND\n".to_string();
    }

    let authoritative = message.is_authoritative();
    let mut out = String::new();
    render_section(&mut out, "Answer", message.answers(), authoritative);
    render_section(&mut out, "Additional", message.additional(), authoritative);
    out
}

fn render_section(out: &mut String, title: &str, records: &[DnsRecord], authoritative: bool) {
    if records.is_empty() {
        return;
    }
    let _ = writeln!(out, "***{} Section ({} records)***", title, records.len());
    for record in records {
        out.push_str(&render_record(record, authoritative));
        out.push('\n');
    }
}

pub fn render_record(record: &DnsRecord, authoritative: bool) -> String {
    let auth = if authoritative { "auth" } else { "nonauth" };
    match &record.data {
        RecordData::Mx {
            preference,
            exchange,
        } => format!("MX\t{}\t{}\t{}\t{}", exchange, preference, record.ttl, auth),
        data => format!(
            "{}\t{}\t{}\t{}",
            record.record_type().report_label(),
            data,
            record.ttl,
            auth
        ),
    }
}
