use std::process::Command;

#[test]
fn test_sync_outside_tmux_is_a_silent_noop() {
    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");

    let out = Command::new(bin)
        .arg("sync")
        .arg(td.path())
        .env_remove("TMUX")
        .env("XDG_CONFIG_HOME", td.path())
        .output()
        .expect("failed to run tmux-peacock sync");
    assert!(
        out.status.success(),
        "sync outside tmux must exit 0, got {:?}",
        out.status.code()
    );
    assert!(out.stdout.is_empty(), "sync printed to stdout");
    assert!(out.stderr.is_empty(), "sync printed to stderr");

    // Nothing was resolved, so nothing was cached.
    assert!(!td.path().join("tmux-peacock-colors.json").exists());
}

#[test]
fn test_sync_lost_lock_race_is_a_noop() {
    use tmux_peacock::SyncLock;

    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");

    // Hold the lock the child will contend for (the child derives its lock
    // path from TMPDIR).
    let lock_path = td.path().join("tmux-peacock-sync.lock");
    let mut holder = SyncLock::new(&lock_path);
    assert!(holder.acquire(), "test could not take the lock");

    let out = Command::new(bin)
        .arg("sync")
        .arg(td.path())
        .env("TMUX", "/tmp/tmux-1000/default,1234,0")
        .env("TMPDIR", td.path())
        .env("XDG_CONFIG_HOME", td.path())
        .output()
        .expect("failed to run tmux-peacock sync");
    assert!(out.status.success(), "losing the lock race must exit 0");

    // The loser skipped the sync entirely: no color was resolved or cached.
    assert!(!td.path().join("tmux-peacock-colors.json").exists());
}
