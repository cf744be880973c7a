//! Cross-process mutual exclusion for the styling sync.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Non-blocking advisory lock bounding one color sync at a time.
///
/// The lock is tied to the holding process's file descriptor: the OS
/// releases it when the process exits, crash included, so there is no
/// staleness cleanup here and the lock file is never unlinked.
#[derive(Debug)]
pub struct SyncLock {
    path: PathBuf,
    file: Option<File>,
}

impl SyncLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// Try to take the exclusive lock without blocking.
    ///
    /// `false` means another process currently holds it; callers skip their
    /// sync rather than retry, since the concurrent sync reaches the same
    /// visual result.
    pub fn acquire(&mut self) -> bool {
        if self.file.is_some() {
            return true;
        }
        let file = match OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&self.path)
        {
            Ok(f) => f,
            Err(_) => return false,
        };
        match file.try_lock_exclusive() {
            Ok(()) => {
                // Truncate only after the lock is ours, then record our PID.
                // The file content is diagnostic; the flock is authoritative.
                let mut f = file;
                let _ = f.set_len(0);
                let _ = write!(f, "{}", std::process::id());
                self.file = Some(f);
                true
            }
            Err(_) => false,
        }
    }

    /// Unlock and close the handle. Safe to call repeatedly and safe to
    /// call when the lock was never acquired.
    pub fn release(&mut self) {
        if let Some(f) = self.file.take() {
            let _ = f.unlock();
        }
    }

    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SyncLock {
    fn drop(&mut self) {
        self.release();
    }
}

/// Well-known lock location in the system temp directory.
pub fn default_lock_path() -> PathBuf {
    std::env::temp_dir().join("tmux-peacock-sync.lock")
}
