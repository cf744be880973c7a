use tmux_peacock::SyncLock;

#[test]
fn test_lock_is_exclusive_and_reacquirable() {
    let td = tempfile::tempdir().expect("tmpdir");
    let path = td.path().join("tmux-peacock-sync.lock");

    let mut first = SyncLock::new(&path);
    assert!(first.acquire(), "first acquire failed");

    // Second handle loses immediately, without blocking.
    let started = std::time::Instant::now();
    let mut second = SyncLock::new(&path);
    assert!(!second.acquire(), "second acquire unexpectedly succeeded");
    assert!(
        started.elapsed() < std::time::Duration::from_secs(1),
        "acquire blocked instead of returning"
    );

    first.release();
    assert!(second.acquire(), "acquire after release failed");
}

#[test]
fn test_lock_release_is_idempotent() {
    let td = tempfile::tempdir().expect("tmpdir");
    let mut lock = SyncLock::new(td.path().join("sync.lock"));
    lock.release();
    assert!(lock.acquire());
    lock.release();
    lock.release();
}
