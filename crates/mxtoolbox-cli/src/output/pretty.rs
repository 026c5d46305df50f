//! Fixed text layout, one block per response shape.

use mxtoolbox::{BlacklistReport, LookupReport, PingReport, Report, ScanReport, TcpReport};
use std::io::{self, Write};

/// Write a report in the line-oriented text layout.
pub fn write_report<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    match report {
        Report::Lookup(r) => write_lookup(r, out),
        Report::Tcp(r) => write_tcp(r, out),
        Report::Blacklist(r) => write_blacklist(r, out),
        Report::Ping(r) => write_ping(r, out),
        Report::Scan(r) => write_scan(r, out),
    }
}

fn write_lookup<W: Write>(report: &LookupReport, out: &mut W) -> io::Result<()> {
    for (i, answer) in report.information.iter().enumerate() {
        writeln!(out, "Record {}", i + 1)?;
        writeln!(out, "Domain Name:  {}", answer.domain_name)?;
        writeln!(out, "IP Address:   {}", answer.ip_address)?;
        writeln!(out, "Record Type:  {}", answer.record_type)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_tcp<W: Write>(report: &TcpReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Scanned: {}", report.command_argument)?;
    for probe in &report.information {
        writeln!(out, "Result: {}", probe.summary)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_blacklist<W: Write>(report: &BlacklistReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} is on {} blacklists:",
        report.command_argument,
        report.listed_count()
    )?;
    for listing in &report.failed {
        writeln!(out, "    {}", listing.name)?;
    }
    Ok(())
}

fn write_ping<W: Write>(report: &PingReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Sent ping to {}", report.command_argument)?;
    for reply in &report.information {
        writeln!(out, "Status:     {}", reply.reply)?;
        writeln!(out, "IP Address: {}", reply.ip_address)?;
        writeln!(out, "Time (ms):  {}", reply.time_ms())?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_scan<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Open ports on {}", report.command_argument)?;
    for port in report.open_ports() {
        writeln!(out, "{} {}", port.name, port.port)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxtoolbox::{ApiResponse, Command};

    fn render(command: Command, body: &str) -> String {
        let report = ApiResponse::new(command, body).report().unwrap();
        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn a_lookup_layout() {
        let body = r#"{
            "CommandArgument": "example.com",
            "Information": [
                {"Domain Name": "example.com", "IP Address": "93.184.216.34", "Type": "A", "TTL": "1 hrs"},
                {"Domain Name": "example.com", "IP Address": "93.184.216.35", "Type": "A"}
            ]
        }"#;

        assert_eq!(
            render(Command::A, body),
            "Record 1\n\
             Domain Name:  example.com\n\
             IP Address:   93.184.216.34\n\
             Record Type:  A\n\
             \n\
             Record 2\n\
             Domain Name:  example.com\n\
             IP Address:   93.184.216.35\n\
             Record Type:  A\n\
             \n"
        );
    }

    #[test]
    fn ptr_lookup_layout() {
        let body = r#"{"Information": [
            {"Domain Name": "one.one.one.one", "IP Address": "1.1.1.1", "Type": "PTR"}
        ]}"#;

        assert_eq!(
            render(Command::Ptr, body),
            "Record 1\n\
             Domain Name:  one.one.one.one\n\
             IP Address:   1.1.1.1\n\
             Record Type:  PTR\n\
             \n"
        );
    }

    #[test]
    fn tcp_layout() {
        let body = r#"{
            "CommandArgument": "mail.example.com",
            "Information": [{"Summary": "220 mail.example.com ESMTP ready"}]
        }"#;

        assert_eq!(
            render(Command::Tcp, body),
            "Scanned: mail.example.com\n\
             Result: 220 mail.example.com ESMTP ready\n\
             \n"
        );
    }

    #[test]
    fn blacklist_layout() {
        let body = r#"{
            "CommandArgument": "192.0.2.10",
            "Failed": [{"Name": "SPAMCOP"}, {"Name": "UCEPROTECTL1"}],
            "Passed": [{"Name": "SORBS SPAM"}]
        }"#;

        assert_eq!(
            render(Command::Blacklist, body),
            "192.0.2.10 is on 2 blacklists:\n    SPAMCOP\n    UCEPROTECTL1\n"
        );
    }

    #[test]
    fn blacklist_with_no_listings() {
        let body = r#"{"CommandArgument": "example.com", "Failed": []}"#;

        assert_eq!(
            render(Command::Blacklist, body),
            "example.com is on 0 blacklists:\n"
        );
    }

    #[test]
    fn ping_layout_strips_escaped_less_than() {
        let body = r#"{
            "CommandArgument": "example.com",
            "Information": [
                {"Reply": "Reply", "IP Address": "93.184.216.34", "Time": "&lt;1"},
                {"Reply": "Reply", "IP Address": "93.184.216.34", "Time": "12"}
            ]
        }"#;

        assert_eq!(
            render(Command::Ping, body),
            "Sent ping to example.com\n\
             Status:     Reply\n\
             IP Address: 93.184.216.34\n\
             Time (ms):  1\n\
             \n\
             Status:     Reply\n\
             IP Address: 93.184.216.34\n\
             Time (ms):  12\n\
             \n"
        );
    }

    #[test]
    fn scan_layout_lists_open_ports_only() {
        let body = r#"{
            "CommandArgument": "example.com",
            "Information": [
                {"Name": "80", "Port": 80, "Result": "Open"},
                {"Name": "81", "Port": 81, "Result": "Closed"}
            ]
        }"#;

        assert_eq!(
            render(Command::Scan, body),
            "Open ports on example.com\n80 80\n"
        );
    }

    #[test]
    fn empty_records_print_header_only() {
        let body = r#"{"CommandArgument": "example.com", "Information": []}"#;

        assert_eq!(render(Command::Tcp, body), "Scanned: example.com\n");
        assert_eq!(render(Command::Ping, body), "Sent ping to example.com\n");
        assert_eq!(render(Command::Scan, body), "Open ports on example.com\n");
        assert_eq!(render(Command::A, body), "");
    }
}
