use std::process::Command;

#[test]
fn test_title_prints_directory_basename_outside_repo() {
    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");
    let project = td.path().join("widget");
    std::fs::create_dir_all(&project).expect("mkdir");

    let out = Command::new(bin)
        .arg("title")
        .arg(&project)
        .output()
        .expect("failed to run tmux-peacock title");
    assert!(
        out.status.success(),
        "title exited non-zero: {:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "widget");
}

#[test]
fn test_title_colored_wraps_in_tmux_markers() {
    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");
    let project = td.path().join("widget");
    std::fs::create_dir_all(&project).expect("mkdir");

    let out = Command::new(bin)
        .arg("title")
        .arg(&project)
        .arg("--colored")
        .env("XDG_CONFIG_HOME", td.path())
        .output()
        .expect("failed to run tmux-peacock title --colored");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout.trim();
    assert!(
        line.starts_with("#[fg=#") && line.ends_with("#[default]"),
        "unexpected colored title: {line}"
    );
    assert!(line.contains("]widget#["), "missing label: {line}");
}

#[test]
fn test_title_colored_is_stable_across_invocations() {
    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");
    let project = td.path().join("stable-name");
    std::fs::create_dir_all(&project).expect("mkdir");

    let run = || {
        let out = Command::new(bin)
            .arg("title")
            .arg(&project)
            .arg("--colored")
            .env("XDG_CONFIG_HOME", td.path())
            .output()
            .expect("failed to run tmux-peacock");
        assert!(out.status.success());
        String::from_utf8_lossy(&out.stdout).trim().to_string()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_title_colored_honors_declared_peacock_color() {
    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");
    let project = td.path().join("widget");
    let vscode = project.join(".vscode");
    std::fs::create_dir_all(&vscode).expect("mkdir");
    std::fs::write(
        vscode.join("settings.json"),
        "{\"peacock.color\": \"#1E90FF\"}",
    )
    .expect("write settings");

    let out = Command::new(bin)
        .arg("title")
        .arg(&project)
        .arg("--colored")
        .env("XDG_CONFIG_HOME", td.path())
        .output()
        .expect("failed to run tmux-peacock");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), "#[fg=#1e90ff]widget#[default]");
    // The declared color short-circuits the cache entirely.
    assert!(!td.path().join("tmux-peacock-colors.json").exists());
}

#[test]
fn test_title_invalid_dir_falls_back_to_cwd() {
    let bin = env!("CARGO_BIN_EXE_tmux-peacock");
    let td = tempfile::tempdir().expect("tmpdir");
    let cwd = td.path().join("fallback-here");
    std::fs::create_dir_all(&cwd).expect("mkdir");

    let out = Command::new(bin)
        .arg("title")
        .arg("/definitely/not/a/dir")
        .current_dir(&cwd)
        .output()
        .expect("failed to run tmux-peacock title");
    assert!(out.status.success(), "invalid dir should not be an error");
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "fallback-here"
    );
}
