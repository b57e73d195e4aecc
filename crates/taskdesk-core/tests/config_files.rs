use std::fs;
use std::time::Duration;

use taskdesk_core::config::Config;
use tempfile::tempdir;

#[test]
fn rc_file_with_include_and_comments() {
    let temp = tempdir().expect("tempdir");
    let shared = temp.path().join("shared.rc");
    fs::write(&shared, "color=off\n").expect("write include");

    let rc = temp.path().join("taskdeskrc");
    fs::write(
        &rc,
        "# client settings\ninclude shared.rc\napi.timeout = 5   # seconds\n\nconfirm=no\n",
    )
    .expect("write rc");

    let cfg = Config::load(Some(&rc)).expect("load");
    assert_eq!(cfg.loaded_files, vec![rc.clone(), shared.clone()]);
    assert_eq!(cfg.get("color").as_deref(), Some("off"));
    assert_eq!(cfg.get_bool("confirm"), Some(false));
    assert_eq!(
        cfg.api_settings().expect("settings").timeout,
        Some(Duration::from_secs(5))
    );
}

#[test]
fn missing_include_is_skipped() {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("taskdeskrc");
    fs::write(&rc, "include nowhere.rc\ncolor=off\n").expect("write rc");

    let cfg = Config::load(Some(&rc)).expect("load");
    assert_eq!(cfg.loaded_files, vec![rc]);
    assert_eq!(cfg.get("color").as_deref(), Some("off"));
}

#[test]
fn include_cycle_is_rejected() {
    let temp = tempdir().expect("tempdir");
    let a = temp.path().join("a.rc");
    let b = temp.path().join("b.rc");
    fs::write(&a, "include b.rc\n").expect("write a");
    fs::write(&b, "include a.rc\n").expect("write b");

    let err = Config::load(Some(&a)).expect_err("cycle");
    assert!(err.to_string().contains("include cycle"));
}

#[test]
fn line_without_equals_names_file_and_line() {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("taskdeskrc");
    fs::write(&rc, "color=on\njust words\n").expect("write rc");

    let err = Config::load(Some(&rc)).expect_err("invalid line");
    let text = err.to_string();
    assert!(text.contains("invalid config line"));
    assert!(text.contains(":2:"));
}

#[test]
fn unreadable_rc_is_an_error() {
    let temp = tempdir().expect("tempdir");
    let missing = temp.path().join("absent.rc");
    assert!(Config::load(Some(&missing)).is_err());
}
