//! Text and NDJSON rendering for the check command.

use std::io::{self, Write};

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use scopecheck::{Dashboard, DashboardRow, Status};

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    pub unicode: bool,
    /// Show each rule's configuration key under its row.
    pub verbose: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
            verbose: false,
        }
    }
}

fn icon(status: Status, opts: RenderOptions) -> String {
    let raw = match (opts.unicode, status) {
        (true, Status::Ok) => "✓",
        (true, Status::Warning) => "⚠",
        (true, Status::Problem) => "✗",
        (true, Status::Unknown) => "?",
        (false, Status::Ok) => "[+]",
        (false, Status::Warning) => "[!]",
        (false, Status::Problem) => "[x]",
        (false, Status::Unknown) => "[?]",
    };
    if !opts.color {
        return raw.to_string();
    }
    match status {
        Status::Ok => raw.green(),
        Status::Warning => raw.yellow(),
        Status::Problem => raw.red(),
        Status::Unknown => raw.magenta(),
    }
    .to_string()
}

fn arrow(opts: RenderOptions) -> String {
    let raw = if opts.unicode { "→" } else { "[>]" };
    if opts.color {
        raw.dark_grey().to_string()
    } else {
        raw.to_string()
    }
}

pub fn render_header(title: &str, rule_count: usize, source: &str) -> String {
    format!("{}\n  Rules: {}\n  Source: {}\n\n", title, rule_count, source)
}

/// Render all rows with the info column aligned past the longest title.
pub fn render_report(dashboard: &Dashboard, opts: RenderOptions) -> String {
    let width = dashboard
        .rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.title.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &dashboard.rows {
        out.push_str(&render_row(row, width, opts));
    }
    out
}

fn render_row(row: &DashboardRow, width: usize, opts: RenderOptions) -> String {
    let mut out = String::new();
    let pad = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(row.title.as_str())));

    let mut info = row.report.info_lines();
    let first = info.next().unwrap_or("");
    out.push_str(&format!(
        "  {} {}{}  {}\n",
        icon(row.report.status, opts),
        row.title,
        pad,
        first
    ));

    if opts.verbose {
        out.push_str(&format!("      ({})\n", row.key));
    }

    for line in info {
        out.push_str(&format!("      {}\n", line));
    }

    for line in row.report.action_lines() {
        out.push_str(&format!("      {} {}\n", arrow(opts), line));
    }

    out
}

pub fn render_summary(dashboard: &Dashboard) -> String {
    let title = if !dashboard.is_success() {
        "Audit found problems"
    } else if dashboard.warnings > 0 {
        "Audit passed with warnings"
    } else {
        "All settings match recommendations"
    };

    format!(
        "\n{}: {} ok, {} warnings, {} problems, {} unknown\n",
        title, dashboard.ok, dashboard.warnings, dashboard.problems, dashboard.unknown
    )
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
