//! Pane label presentation.

use std::path::Path;

use crate::git;

/// Identity of a pane's directory, derived fresh on every invocation.
/// Branch state changes too often for caching to be worth anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub repo_name: String,
    pub branch: Option<String>,
    pub subpath: Option<String>,
}

impl RepoIdentity {
    /// Label grammar: `repo[@branch][:subpath]`.
    pub fn label(&self) -> String {
        let mut out = self.repo_name.clone();
        if let Some(branch) = &self.branch {
            out.push('@');
            out.push_str(branch);
        }
        if let Some(subpath) = &self.subpath {
            out.push(':');
            out.push_str(subpath);
        }
        out
    }
}

/// Resolve the identity of a directory inside the repository rooted at `root`.
pub fn repo_identity(dir: &Path, root: &Path) -> RepoIdentity {
    let (repo_name, subpath) = git::worktree_info(dir, root);
    RepoIdentity {
        repo_name,
        branch: git::current_branch(dir),
        subpath,
    }
}

/// Replace a leading home-directory prefix with `~`.
pub fn normalize_path(dir: &Path) -> String {
    let s = dir.display().to_string();
    if let Some(home) = home::home_dir() {
        let home = home.display().to_string();
        if s == home {
            return "~".to_string();
        }
        if let Some(rest) = s.strip_prefix(&home) {
            if rest.starts_with('/') {
                return format!("~{rest}");
            }
        }
    }
    s
}

/// Plain pane label: repository identity inside a repo, otherwise the
/// basename of the `~`-normalized path.
pub fn pane_title(dir: &Path) -> String {
    match git::git_toplevel(dir) {
        Some(root) => repo_identity(dir, &root).label(),
        None => {
            let normalized = normalize_path(dir);
            if normalized == "~" {
                return normalized;
            }
            let base = Path::new(&normalized)
                .file_name()
                .map(|n| n.to_string_lossy().to_string());
            base.unwrap_or(normalized)
        }
    }
}

/// Wrap a label in tmux foreground color markers.
pub fn colored_title(title: &str, color: &str) -> String {
    format!("#[fg={color}]{title}#[default]")
}
