//! tmux-peacock: deterministic per-project pane colors and titles for tmux,
//! shared with the VSCode Peacock extension's per-project color setting.
//!
//! Invocations are short-lived single-threaded processes. The cache file is
//! the only shared mutable state: reads are defensive and writes are atomic
//! replaces, so concurrent invocations never observe a partial file. The
//! styling sync is additionally serialized by a non-blocking advisory lock;
//! a process that loses the race simply no-ops.

pub mod cache;
pub mod color;
pub mod doctor;
pub mod git;
pub mod lock;
pub mod resolve;
pub mod title;
pub mod tmux;
pub mod ui;

pub use cache::{cached_color, default_cache_path, read_cache, write_cache, ColorCache};
pub use color::{background_tint, derive_color, mute_color, validate_hex_color};
pub use git::{current_branch, git_toplevel, repo_name, worktree_info};
pub use lock::{default_lock_path, SyncLock};
pub use resolve::resolve_color;
pub use title::{colored_title, normalize_path, pane_title, RepoIdentity};
pub use tmux::{apply_pane_styles, inside_tmux, pane_styles};
