use crate::cli::report::Report;
use chrono::NaiveDateTime;
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

const HOUR_FORMAT: &str = "%Y-%m-%d %H:%M";
const BAR_WIDTH: u64 = 30;

struct Palette {
    color: bool,
    heading: Style,
    good: Style,
    warn: Style,
    bad: Style,
}

impl Palette {
    fn new(color: bool) -> Self {
        Self {
            color,
            heading: Style::new().bold(),
            good: Style::new().green(),
            warn: Style::new().yellow(),
            bad: Style::new().red().bold(),
        }
    }

    fn paint(&self, value: impl Display, style: Style) -> String {
        if self.color {
            value.style(style).to_string()
        } else {
            value.to_string()
        }
    }
}

fn hour(ts: &NaiveDateTime) -> String {
    ts.format(HOUR_FORMAT).to_string()
}

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (value * BAR_WIDTH).div_ceil(max).max(1);
    "█".repeat(width as usize)
}

pub fn render_pretty(report: &Report, color: bool) -> String {
    let p = Palette::new(color);
    let mut out = String::new();

    let title = format!("Logsift report for client {}", report.client_id);
    out.push_str(&format!("{}\n", p.paint(&title, p.heading)));
    out.push_str(&format!("{}\n", "=".repeat(title.chars().count())));
    out.push_str(&format!(
        "events: {} | skipped lines: {}\n\n",
        report.ingest.accepted, report.ingest.skipped
    ));

    out.push_str(&format!("{}\n", p.paint("Status codes", p.heading)));
    if report.status_code_counts.is_empty() {
        out.push_str("  <none>\n");
    }
    for (code, count) in &report.status_code_counts {
        let style = match code {
            200..=399 => p.good,
            400..=499 => p.warn,
            _ => p.bad,
        };
        out.push_str(&format!("  {:<5} {count}\n", p.paint(code, style)));
    }

    out.push_str(&format!("\n{}\n", p.paint("Requests per hour", p.heading)));
    let max = report
        .request_counts_by_hour
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    if report.request_counts_by_hour.is_empty() {
        out.push_str("  <none>\n");
    }
    for (ts, count) in &report.request_counts_by_hour {
        out.push_str(&format!("  {}  {count:>6} {}\n", hour(ts), bar(*count, max)));
    }

    out.push_str(&format!("\n{}\n", p.paint("Errors per hour", p.heading)));
    if report.error_counts_by_hour.is_empty() {
        out.push_str("  <none>\n");
    }
    for (ts, counts) in &report.error_counts_by_hour {
        out.push_str(&format!(
            "  {}  4xx={} 5xx={}\n",
            hour(ts),
            p.paint(counts.count_4xx, p.warn),
            p.paint(counts.count_5xx, p.bad)
        ));
    }

    out.push_str(&format!("\n{}\n", p.paint("Top endpoints (all clients)", p.heading)));
    if report.top_endpoints.is_empty() {
        out.push_str("  <none>\n");
    }
    for e in &report.top_endpoints {
        out.push_str(&format!("  {:>6}  {}\n", e.count, e.endpoint));
    }

    out.push_str(&format!("\n{}\n", p.paint("Unhealthy endpoints", p.heading)));
    if report.endpoint_health.is_empty() {
        out.push_str("  <none>\n");
    }
    for h in &report.endpoint_health {
        out.push_str(&format!(
            "  {} @ {}  {} requests, {} errors, rate {:.2}\n",
            p.paint(&h.endpoint, p.bad),
            hour(&h.hour_window),
            h.total_requests,
            h.error_count,
            h.error_rate
        ));
    }

    out.push_str(&format!(
        "\n{}\n",
        p.paint(
            format!("Suspicious IPs (>= {} auth failures/hour)", report.suspicious_ip_threshold),
            p.heading
        )
    ));
    if report.suspicious_ips.is_empty() {
        out.push_str("  <none>\n");
    }
    for s in &report.suspicious_ips {
        out.push_str(&format!(
            "  {} @ {}  {} failures\n",
            p.paint(&s.ip_address, p.bad),
            hour(&s.hour_window),
            s.error_count
        ));
    }

    out
}
