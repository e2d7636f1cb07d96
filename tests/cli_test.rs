use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn lsync() -> Command {
    Command::cargo_bin("lsync").unwrap()
}

#[test]
fn syncs_tree_and_exits_zero() {
    let src = tempfile::tempdir().unwrap();
    fs::create_dir(src.path().join("a")).unwrap();
    fs::write(src.path().join("a/x.txt"), "x").unwrap();
    let dst = tempfile::tempdir().unwrap();
    let mirror = dst.path().join("mirror");

    lsync()
        .env("RUST_LOG", "info")
        .arg(src.path())
        .arg(&mirror)
        .assert()
        .success()
        .stderr(predicate::str::contains("sync complete").and(predicate::str::contains("elapsed_secs")));

    assert_eq!(fs::read_to_string(mirror.join("a/x.txt")).unwrap(), "x");

    // Idempotent from the command line too
    lsync().arg(src.path()).arg(&mirror).assert().success();
}

#[test]
fn missing_source_exits_with_noinput() {
    let dst = tempfile::tempdir().unwrap();
    let mirror = dst.path().join("mirror");

    lsync()
        .arg(dst.path().join("no-such-source"))
        .arg(&mirror)
        .assert()
        .code(66)
        .stderr(predicate::str::contains("no-such-source"));

    assert!(!mirror.exists());
}

#[cfg(unix)]
#[test]
fn wrong_argument_count_aborts() {
    for args in [&[][..], &["only-one"][..], &["a", "b", "c"][..]] {
        let output = lsync().args(args).output().unwrap();
        assert!(!output.status.success(), "{args:?} should fail");
        assert_eq!(output.status.code(), None, "{args:?} should abort");
    }
}

#[test]
fn paths_may_start_with_a_hyphen() {
    let work = tempfile::tempdir().unwrap();
    fs::create_dir(work.path().join("-src")).unwrap();
    fs::write(work.path().join("-src/f.txt"), "f").unwrap();

    lsync()
        .current_dir(work.path())
        .args(["-src", "-dst"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(work.path().join("-dst/f.txt")).unwrap(), "f");
}

#[cfg(unix)]
#[test]
fn type_mismatch_aborts() {
    let src = tempfile::tempdir().unwrap();
    fs::create_dir(src.path().join("a")).unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::write(dst.path().join("a"), "file").unwrap();

    let output = lsync().arg(src.path()).arg(dst.path()).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), None, "abort terminates by signal");
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected a directory"));
}

#[test]
fn prints_version() {
    lsync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lsync "));
}

#[cfg(unix)]
#[test]
fn link_failure_aborts_naming_both_paths() {
    use std::os::unix::fs::PermissionsExt;

    let src = tempfile::tempdir().unwrap();
    fs::create_dir(src.path().join("a")).unwrap();
    fs::write(src.path().join("a/x.txt"), "x").unwrap();
    let dst = tempfile::tempdir().unwrap();
    let locked = dst.path().join("a");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users bypass directory permissions; nothing to observe then
    let writable = fs::write(locked.join(".writable"), "").is_ok();
    if !writable {
        let output = lsync().arg(src.path()).arg(dst.path()).output().unwrap();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        assert!(!output.status.success());
        assert_eq!(output.status.code(), None, "link failure terminates by signal");
        assert!(stderr.contains(&src.path().join("a/x.txt").display().to_string()));
        assert!(stderr.contains(&locked.join("x.txt").display().to_string()));
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}
