//! Git identity queries as bounded subprocess invocations.
//!
//! Results are advisory: not a repository, a missing git binary, a non-zero
//! exit, and a timeout all collapse to `None`, and every call site supplies
//! a fallback. Nothing here can abort the caller.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use wait_timeout::ChildExt;

/// Blanket timeout for every git invocation.
pub const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Subpaths longer than this are shortened for pane titles.
const SUBPATH_MAX: usize = 20;
/// Characters kept from the end of a shortened subpath.
const SUBPATH_TAIL: usize = 17;

/// Spawn `git <args>` with `dir` as working directory, wait with the
/// blanket timeout, and capture stdout. Kills the child on timeout.
fn run_git(dir: &Path, args: &[&str]) -> Result<(ExitStatus, String)> {
    let mut child = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn git {args:?}"))?;

    let status = match child
        .wait_timeout(GIT_TIMEOUT)
        .context("failed to wait for git")?
    {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(anyhow!("git {args:?} timed out after {GIT_TIMEOUT:?}"));
        }
    };

    let mut out = String::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout
            .read_to_string(&mut out)
            .context("failed to read git stdout")?;
    }
    Ok((status, out))
}

/// Advisory wrapper around `run_git`: trimmed stdout on zero exit, `None`
/// for every failure mode.
pub fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    if !dir.is_dir() {
        return None;
    }
    match run_git(dir, args) {
        Ok((status, out)) if status.success() => Some(out.trim().to_string()),
        _ => None,
    }
}

/// Toplevel of the repository containing `dir`, or `None` outside a repo.
pub fn git_toplevel(dir: &Path) -> Option<PathBuf> {
    git_output(dir, &["rev-parse", "--show-toplevel"])
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Current branch name; a detached HEAD yields the short commit SHA
/// instead of the literal `HEAD`.
pub fn current_branch(dir: &Path) -> Option<String> {
    let branch = git_output(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    if branch == "HEAD" {
        return git_output(dir, &["rev-parse", "--short", "HEAD"]);
    }
    Some(branch)
}

fn basename(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| p.display().to_string())
}

/// Last path segment of a remote URL, with a trailing `/` and a trailing
/// `.git` suffix stripped.
fn name_from_remote_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    trimmed
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Display name of the repository rooted at `root`.
///
/// A linked worktree (its `.git` entry is a file, not a directory) is named
/// after the worktree directory itself. Otherwise the origin remote's last
/// path segment is used, falling back to the root's basename. Never fails.
pub fn repo_name(dir: &Path, root: &Path) -> String {
    if root.join(".git").is_file() {
        return basename(root);
    }
    if let Some(name) =
        git_output(dir, &["remote", "get-url", "origin"]).and_then(|url| name_from_remote_url(&url))
    {
        return name;
    }
    basename(root)
}

fn truncate_subpath(rel: &str) -> String {
    let count = rel.chars().count();
    if count > SUBPATH_MAX {
        let tail: String = rel.chars().skip(count - SUBPATH_TAIL).collect();
        format!("...{tail}")
    } else {
        rel.to_string()
    }
}

/// Repository name plus `dir` expressed relative to `root`; the subpath is
/// `None` when the two are the same directory and keeps only its ellipsized
/// tail when it would make the pane title too long.
pub fn worktree_info(dir: &Path, root: &Path) -> (String, Option<String>) {
    let name = repo_name(dir, root);
    let rel = match dir.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return (name, None),
    };
    let rel_str = rel.to_string_lossy().to_string();
    if rel_str.is_empty() || rel_str == "." {
        return (name, None);
    }
    (name, Some(truncate_subpath(&rel_str)))
}
