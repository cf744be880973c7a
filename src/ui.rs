//! Color-aware stderr diagnostics.
//!
//! Applies only to stderr one-liners (`--verbose`, doctor). Precedence:
//! NO_COLOR disables unconditionally, then an explicit CLI mode, then the
//! TMUX_PEACOCK_COLOR environment preference, then TTY detection.

use clap::ValueEnum;
use once_cell::sync::OnceCell;

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

static COLOR_MODE: OnceCell<ColorMode> = OnceCell::new();

/// Record the CLI-selected mode; first caller wins.
pub fn set_color_mode(mode: ColorMode) {
    let _ = COLOR_MODE.set(mode);
}

fn mode_from_env() -> Option<ColorMode> {
    match std::env::var("TMUX_PEACOCK_COLOR")
        .ok()?
        .trim()
        .to_ascii_lowercase()
        .as_str()
    {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

fn enabled_for(is_tty: bool) -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    let mode = COLOR_MODE
        .get()
        .copied()
        .or_else(mode_from_env)
        .unwrap_or(ColorMode::Auto);
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty,
    }
}

pub fn color_enabled_stderr() -> bool {
    enabled_for(atty::is(atty::Stream::Stderr))
}

/// Wrap a string in an ANSI code when enabled; otherwise return it unchanged.
pub fn paint(enabled: bool, code: &str, s: &str) -> String {
    if enabled {
        format!("{code}{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

pub fn log_info_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[36;1m", msg));
}

pub fn log_warn_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[33m", msg));
}
