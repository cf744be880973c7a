use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tmux_peacock::lock::SyncLock;
use tmux_peacock::{cache, doctor, lock, resolve, title, tmux, ui};

#[derive(Parser, Debug)]
#[command(
    name = "tmux-peacock",
    version,
    about = "Derive per-project pane colors and titles for tmux, synced with the VSCode Peacock extension."
)]
struct Cli {
    /// Colorize stderr diagnostics: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    color: Option<ui::ColorMode>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
enum Cmd {
    /// Apply the project color to tmux pane borders and window styling
    Sync {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Log resolution steps to stderr
        #[arg(long)]
        verbose: bool,
    },
    /// Print the pane title for a directory
    Title {
        /// Directory to resolve (defaults to the current directory)
        dir: Option<PathBuf>,
        /// Wrap the title in tmux foreground color markers
        #[arg(long)]
        colored: bool,
    },
    /// Run diagnostics to check environment and configuration
    Doctor {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// Fall back to the current directory when the argument is missing or not
/// a directory; canonicalize so subpaths line up with git's toplevel.
fn effective_dir(arg: Option<PathBuf>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let dir = match arg {
        Some(d) if d.is_dir() => d,
        _ => cwd,
    };
    std::fs::canonicalize(&dir).unwrap_or(dir)
}

fn run_sync(dir: &Path, verbose: bool) {
    if !tmux::inside_tmux() {
        // Nothing to style outside tmux; not an error.
        return;
    }
    let use_err = ui::color_enabled_stderr();

    let mut sync_lock = SyncLock::new(lock::default_lock_path());
    if !sync_lock.acquire() {
        // A concurrent invocation is already syncing and will reach the
        // same visual result.
        if verbose {
            ui::log_info_stderr(use_err, "sync already in progress; skipping");
        }
        return;
    }

    let color = resolve::resolve_color(Some(dir), &cache::default_cache_path());
    if verbose {
        ui::log_info_stderr(
            use_err,
            &format!("resolved {} -> {}", dir.display(), color),
        );
    }
    if !tmux::apply_pane_styles(Some(&color)) && verbose {
        ui::log_warn_stderr(use_err, "tmux not found on PATH; styles not applied");
    }
    sync_lock.release();
}

fn run_title(dir: &Path, colored: bool) {
    let label = title::pane_title(dir);
    if colored {
        let color = resolve::resolve_color(Some(dir), &cache::default_cache_path());
        println!("{}", title::colored_title(&label, &color));
    } else {
        println!("{label}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        ui::set_color_mode(mode);
    }
    match cli.command {
        Cmd::Sync { dir, verbose } => run_sync(&effective_dir(dir), verbose),
        Cmd::Title { dir, colored } => run_title(&effective_dir(dir), colored),
        Cmd::Doctor { json } => doctor::run_doctor(json),
    }
    ExitCode::SUCCESS
}
