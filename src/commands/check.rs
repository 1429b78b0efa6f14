//! Check command engine implementation

use std::path::PathBuf;

use anyhow::Result;
use is_terminal::IsTerminal;

use scopecheck::{rules, ConfigSnapshot, Dashboard};

use crate::cli::ColorWhen;
use crate::render::{self, RenderOptions};

pub fn cmd_check(
    snapshot_path: PathBuf,
    rules_path: Option<PathBuf>,
    strict: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
    ascii: bool,
) -> Result<()> {
    let snapshot = ConfigSnapshot::load(&snapshot_path)?;
    let (catalog, rule_warnings) = rules::load_or_builtin(rules_path.as_deref())?;

    for warning in &rule_warnings {
        eprintln!(
            "warning: unknown key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }

    let color = match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        _ => !json && std::io::stdout().is_terminal(),
    };
    let opts = RenderOptions {
        color,
        unicode: !ascii,
        verbose: verbose > 0,
    };

    let dashboard = if json {
        execute_json(&catalog, &snapshot)?
    } else {
        print!(
            "{}",
            render::render_header(
                "Configuration Audit",
                catalog.len(),
                &snapshot_path.display().to_string()
            )
        );
        let dashboard = Dashboard::run(&catalog, &snapshot, &snapshot)?;
        print!("{}", render::render_report(&dashboard, opts));
        print!("{}", render::render_summary(&dashboard));
        dashboard
    };

    let has_issues = if strict {
        !dashboard.is_clean()
    } else {
        !dashboard.is_success()
    };

    if json {
        let _ = render::write_event(
            &mut std::io::stdout().lock(),
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "ok": dashboard.ok,
                "warnings": dashboard.warnings,
                "problems": dashboard.problems,
                "unknown": dashboard.unknown,
                "success": !has_issues,
            }),
        );
    }

    if has_issues {
        std::process::exit(1);
    }

    Ok(())
}

fn execute_json(catalog: &[rules::ConfigRule], snapshot: &ConfigSnapshot) -> Result<Dashboard> {
    let mut out = std::io::stdout().lock();
    let _ = render::write_event(
        &mut out,
        &serde_json::json!({
            "event": "start",
            "command": "check",
            "rules": catalog.len(),
        }),
    );

    Dashboard::run_with_callback(catalog, snapshot, snapshot, |row| {
        let _ = render::write_event(
            &mut out,
            &serde_json::json!({
                "event": "row",
                "command": "check",
                "title": row.title,
                "key": row.key,
                "status": row.report.status.as_str(),
                "status_code": row.report.status.as_u8(),
                "info": row.report.info,
                "action": row.report.action,
            }),
        );
    })
}
