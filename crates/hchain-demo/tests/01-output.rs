use std::ffi::OsStr;
use std::mem::size_of;
use std::os::raw::{c_char, c_float, c_int};
use std::path::Path;
use std::process::{Command, Output};

fn run_demo_in(dir: &Path, style: Option<&OsStr>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_hchain-demo"));
    command.current_dir(dir).env_remove("RUST_LOG");
    match style {
        Some(style) => command.env(hchain::ENV_REPORT_STYLE, style),
        None => command.env_remove(hchain::ENV_REPORT_STYLE),
    };
    command.output().expect("Failed to run hchain-demo")
}

fn run_demo(style: Option<&str>) -> Output {
    let dir = tempfile::tempdir().expect("Failed to create a temp dir");
    run_demo_in(dir.path(), style.map(OsStr::new))
}

fn stdout_of(output: &Output) -> &str {
    assert!(output.status.success(), "hchain-demo exited with {}", output.status);
    std::str::from_utf8(&output.stdout).expect("stdout is not utf-8")
}

fn sizes_and_counts() -> String {
    format!(
        "{} 2 \n{} 1 \n{} 0 \n",
        size_of::<c_int>(),
        size_of::<c_float>(),
        size_of::<c_char>()
    )
}

fn sizes() -> String {
    format!("{}\n{}\n{}\n", size_of::<c_int>(), size_of::<c_float>(), size_of::<c_char>())
}

#[test]
fn prints_sizes_and_counts_by_default() {
    let output = run_demo(None);

    assert_eq!(stdout_of(&output), sizes_and_counts());
}

#[test]
fn prints_sizes_only_when_asked() {
    let output = run_demo(Some("sizes"));

    assert_eq!(stdout_of(&output), sizes());
}

#[test]
fn prints_sizes_and_counts_when_asked() {
    let output = run_demo(Some("sizes-and-counts"));

    assert_eq!(stdout_of(&output), sizes_and_counts());
}

#[test]
fn unknown_style_falls_back_to_default() {
    let output = run_demo(Some("bogus"));

    assert_eq!(stdout_of(&output), sizes_and_counts());
}

#[cfg(unix)]
#[test]
fn non_unicode_style_falls_back_to_default() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = tempfile::tempdir().expect("Failed to create a temp dir");
    let style = OsString::from_vec(vec![b's', 0xff, b'z']);
    let output = run_demo_in(dir.path(), Some(style.as_os_str()));

    assert_eq!(stdout_of(&output), sizes_and_counts());
}

#[test]
fn style_is_read_from_dotenv_file() {
    let dir = tempfile::tempdir().expect("Failed to create a temp dir");
    std::fs::write(dir.path().join(".env"), format!("{}=sizes\n", hchain::ENV_REPORT_STYLE))
        .expect("Failed to write .env");

    let output = run_demo_in(dir.path(), None);

    assert_eq!(stdout_of(&output), sizes());
}

#[test]
fn repeated_runs_are_identical() {
    let first = run_demo(None);
    let second = run_demo(None);

    assert_eq!(stdout_of(&first), stdout_of(&second));
}
