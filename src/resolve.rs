//! Color resolution: declared editor color, then cache, then derivation.

use std::path::{Path, PathBuf};

use crate::cache::{self, ColorCache};
use crate::color::{derive_color, validate_hex_color};
use crate::git;

/// Editor settings file consulted for a declared per-project color.
const SETTINGS_FILE: &str = ".vscode/settings.json";
/// Field holding the declared color (VSCode Peacock extension convention).
const SETTINGS_KEY: &str = "peacock.color";

/// Declared project color from the editor settings under `target`, if any.
/// A missing file, malformed JSON, and an invalid color value all mean
/// "no override".
pub fn peacock_settings_color(target: &Path) -> Option<String> {
    let settings = cache::read_json_object(&target.join(SETTINGS_FILE))?;
    settings
        .get(SETTINGS_KEY)
        .and_then(|v| v.as_str())
        .and_then(validate_hex_color)
}

/// Stable key for color assignment: the target directory's basename.
fn color_key(target: &Path) -> String {
    target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "root".to_string())
}

/// Resolve the color for `dir` (default: current directory).
///
/// Colors are per-repository, so the git toplevel is used as the target
/// when `dir` is inside one. Precedence: a valid declared settings color
/// (cache untouched), then a valid cached entry for the target's basename,
/// then a freshly derived color which is stored best-effort. Never fails;
/// the worst case is a derived color that could not be persisted.
pub fn resolve_color(dir: Option<&Path>, cache_path: &Path) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let dir = dir.unwrap_or(&cwd);

    let target = git::git_toplevel(dir).unwrap_or_else(|| dir.to_path_buf());

    if let Some(declared) = peacock_settings_color(&target) {
        return declared;
    }

    let key = color_key(&target);
    let mut cache: ColorCache = cache::read_cache(cache_path);
    if let Some(hit) = cache::cached_color(&cache, &key) {
        return hit;
    }

    // Miss or invalid entry: derive and self-heal the cache. Persistence
    // failure costs only the caching benefit.
    let generated = derive_color(&key);
    cache.insert(key, generated.clone());
    let _ = cache::write_cache(cache_path, &cache);
    generated
}
