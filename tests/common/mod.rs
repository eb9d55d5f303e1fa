// Shared test helpers for integration tests
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A disposable suite workspace: a config file, a directory for fake test
/// binaries and a directory for result files, all inside one temp dir.
pub struct SuiteFixture {
    pub temp: TempDir,
    pub config_path: PathBuf,
    pub tests_dir: PathBuf,
    pub output_dir: PathBuf,
}

pub fn setup_suite(config: &str) -> SuiteFixture {
    let temp = tempdir().expect("Failed to create temporary directory");
    let tests_dir = temp.path().join("tests-bin");
    let output_dir = temp.path().join("results");
    fs::create_dir_all(&tests_dir).expect("Failed to create tests dir");
    fs::create_dir_all(&output_dir).expect("Failed to create output dir");

    let config_path = temp.path().join("testing.yml");
    fs::write(&config_path, config).expect("Failed to write config");

    SuiteFixture {
        temp,
        config_path,
        tests_dir,
        output_dir,
    }
}

/// Writes a fake test binary: a shell script that records its argv next to
/// itself (`<binary>.args`, one argument per line), honors a requested
/// `--gtest_output` file, prints some console noise, and exits with the
/// given code.
#[cfg(unix)]
pub fn create_fake_binary(tests_dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = tests_dir.join(name);
    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$@" > "$0.args"
case "$2" in
  --gtest_output=xml:*) echo '<testsuites/>' > "${{2#--gtest_output=xml:}}" ;;
esac
echo "console noise from {name}"
exit {exit_code}
"#
    );
    fs::write(&path, script).expect("Failed to write fake binary");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake binary executable");
    path
}

/// Path of the argv record a fake binary leaves behind.
pub fn args_file(binary_path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.args", binary_path.display()))
}

/// Reads back the argv recorded by a fake binary, one argument per line.
/// Empty lines are real, empty arguments.
pub fn recorded_args(binary_path: &Path) -> Vec<String> {
    let content =
        fs::read_to_string(args_file(binary_path)).expect("fake binary did not record its argv");
    // printf terminates the last argument with a newline as well.
    let mut args: Vec<String> = content.split('\n').map(str::to_string).collect();
    args.pop();
    args
}
