//! Environment diagnostics for the `doctor` subcommand.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

use crate::{cache, lock, tmux, ui};

/// Snapshot of everything `doctor` inspects. Serialized as-is for `--json`.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub version: String,
    pub host: String,
    pub git: Option<String>,
    pub tmux: Option<String>,
    pub inside_tmux: bool,
    pub cache_path: String,
    pub cache_entries: usize,
    pub lock_path: String,
}

/// First line of `<bin> <arg>` stdout, when the probe succeeds.
fn tool_version(bin: &Path, arg: &str) -> Option<String> {
    let out = Command::new(bin).arg(arg).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .next()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

pub fn collect_report() -> DoctorReport {
    let cache_path = cache::default_cache_path();
    let cache_entries = cache::read_cache(&cache_path).len();
    DoctorReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        host: format!("{} / {}", std::env::consts::OS, std::env::consts::ARCH),
        git: which::which("git")
            .ok()
            .and_then(|p| tool_version(&p, "--version")),
        tmux: which::which("tmux")
            .ok()
            .and_then(|p| tool_version(&p, "-V")),
        inside_tmux: tmux::inside_tmux(),
        cache_path: cache_path.display().to_string(),
        cache_entries,
        lock_path: lock::default_lock_path().display().to_string(),
    }
}

/// Print diagnostics to stderr (or a JSON report to stdout). Always
/// completes; a missing tool is a finding, not a failure.
pub fn run_doctor(json: bool) {
    let report = collect_report();
    if json {
        if let Ok(s) = serde_json::to_string_pretty(&report) {
            println!("{s}");
        }
        return;
    }

    let use_err = ui::color_enabled_stderr();
    eprintln!("tmux-peacock doctor");
    eprintln!();
    eprintln!("  version: v{}", report.version);
    eprintln!("  host:    {}", report.host);
    eprintln!();
    match &report.git {
        Some(v) => eprintln!("  git:  {v}"),
        None => ui::log_warn_stderr(use_err, "  git:  not found (titles fall back to directory names)"),
    }
    match &report.tmux {
        Some(v) => eprintln!("  tmux: {v}"),
        None => ui::log_warn_stderr(use_err, "  tmux: not found (sync has nothing to style)"),
    }
    eprintln!(
        "  inside tmux: {}",
        if report.inside_tmux { "yes" } else { "no" }
    );
    eprintln!();
    eprintln!(
        "  cache: {} ({} entries)",
        report.cache_path, report.cache_entries
    );
    eprintln!("  lock:  {}", report.lock_path);
    eprintln!();
    eprintln!("doctor: completed diagnostics.");
}
