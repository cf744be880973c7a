//! tmux styling: push the resolved color into pane and window options.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::color::{background_tint, mute_color};

/// Channel factor for the inactive pane border.
const BORDER_MUTE: f64 = 0.6;
/// Channel factor for the active pane border.
const BORDER_ACTIVE_MUTE: f64 = 0.8;
/// Blend factor for the inactive window background wash.
const WINDOW_TINT: f64 = 0.08;

/// True when the process runs inside a tmux client.
pub fn inside_tmux() -> bool {
    std::env::var("TMUX").map(|v| !v.is_empty()).unwrap_or(false)
}

fn tmux_bin() -> Option<PathBuf> {
    which::which("tmux").ok()
}

/// Best-effort `tmux set-option <name> <value>`; output ignored.
fn set_option(tmux: &Path, name: &str, value: &str) {
    let _ = Command::new(tmux)
        .arg("set-option")
        .arg(name)
        .arg(value)
        .output();
}

/// Styles derived from one base color, or the neutral defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneStyles {
    pub border: String,
    pub active_border: String,
    pub window_bg: String,
    pub active_window_bg: String,
}

/// Compute the four style values for a base color. `None` input (or a
/// malformed color) yields the neutral defaults.
pub fn pane_styles(color: Option<&str>) -> PaneStyles {
    let derived = color.and_then(|c| {
        Some((
            mute_color(c, BORDER_MUTE)?,
            mute_color(c, BORDER_ACTIVE_MUTE)?,
            background_tint(c, WINDOW_TINT)?,
        ))
    });
    match derived {
        Some((muted, bright, tint)) => PaneStyles {
            border: format!("fg={muted}"),
            active_border: format!("fg={bright}"),
            window_bg: format!("bg={tint}"),
            active_window_bg: "bg=default".to_string(),
        },
        None => PaneStyles {
            border: "fg=colour240".to_string(),
            active_border: "fg=colour250".to_string(),
            window_bg: "bg=default".to_string(),
            active_window_bg: "bg=default".to_string(),
        },
    }
}

/// Apply pane border and window styles for `color` (neutral defaults when
/// absent or malformed). Returns `false` when tmux is not on PATH; each
/// set-option is best-effort either way.
pub fn apply_pane_styles(color: Option<&str>) -> bool {
    let tmux = match tmux_bin() {
        Some(t) => t,
        None => return false,
    };
    let styles = pane_styles(color);
    set_option(&tmux, "pane-border-style", &styles.border);
    set_option(&tmux, "pane-active-border-style", &styles.active_border);
    set_option(&tmux, "window-style", &styles.window_bg);
    set_option(&tmux, "window-active-style", &styles.active_window_bg);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_styles_from_color() {
        let styles = pane_styles(Some("#1e90ff"));
        assert_eq!(styles.border, "fg=#125699");
        assert_eq!(styles.active_border, "fg=#1873cc");
        assert_eq!(styles.window_bg, "bg=#1e2730");
        assert_eq!(styles.active_window_bg, "bg=default");
    }

    #[test]
    fn test_pane_styles_neutral_defaults() {
        let neutral = PaneStyles {
            border: "fg=colour240".to_string(),
            active_border: "fg=colour250".to_string(),
            window_bg: "bg=default".to_string(),
            active_window_bg: "bg=default".to_string(),
        };
        assert_eq!(pane_styles(None), neutral);
        // malformed colors degrade to the same defaults
        assert_eq!(pane_styles(Some("red")), neutral);
    }

    #[test]
    fn test_inside_tmux_reads_env_marker() {
        // Only assert the negative case deterministically; mutating TMUX
        // here would race other tests in the same process.
        if std::env::var("TMUX").is_err() {
            assert!(!inside_tmux());
        }
    }
}
