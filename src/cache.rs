//! On-disk color cache: one JSON object mapping project keys to hex colors.
//!
//! The cache file is the only shared mutable resource across concurrent
//! invocations. Reads are defensive (symlink, size, and parse guards all
//! collapse to an empty map) and writes go through an atomic temp-file
//! rename, so a concurrent reader sees either the prior content or the new
//! content, never a partial file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::color::validate_hex_color;

/// Upper bound for any external JSON file we are willing to parse.
pub const MAX_JSON_SIZE: u64 = 1024 * 1024;

pub type ColorCache = BTreeMap<String, String>;

/// Well-known cache location: `$XDG_CONFIG_HOME` (else `~/.config`)
/// joined with `tmux-peacock-colors.json`.
pub fn default_cache_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(std::env::temp_dir);
    base.join("tmux-peacock-colors.json")
}

/// Defensive JSON read shared by the cache and the editor settings file.
///
/// Returns `None` when the file is absent, a symlink, larger than
/// `MAX_JSON_SIZE`, unreadable, or anything but a JSON object.
pub fn read_json_object(path: &Path) -> Option<serde_json::Map<String, Value>> {
    let meta = fs::symlink_metadata(path).ok()?;
    if meta.file_type().is_symlink() || meta.len() > MAX_JSON_SIZE {
        return None;
    }
    let text = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Load the cache. Corruption never surfaces as an error: a missing or
/// rejected file only forgoes the caching benefit.
pub fn read_cache(path: &Path) -> ColorCache {
    match read_json_object(path) {
        Some(map) => map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
        None => ColorCache::new(),
    }
}

/// Validated lookup: an entry that fails hex validation is a miss, so a
/// corrupted value gets regenerated and overwritten by the caller.
pub fn cached_color(cache: &ColorCache, key: &str) -> Option<String> {
    cache.get(key).and_then(|v| validate_hex_color(v))
}

/// Atomically replace the cache file.
///
/// Serializes into a temp file in the destination directory (owner-only
/// permissions) and renames it over the destination. Refuses to write when
/// the destination is a symlink. The temp file is removed on any failure;
/// callers treat failure as non-fatal.
pub fn write_cache(path: &Path, cache: &ColorCache) -> io::Result<()> {
    if let Ok(meta) = fs::symlink_metadata(path) {
        if meta.file_type().is_symlink() {
            return Err(io::Error::other("refusing to write through a symlink"));
        }
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let tmp = tempfile::NamedTempFile::new_in(&parent)?;
    serde_json::to_writer_pretty(tmp.as_file(), cache).map_err(io::Error::from)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
