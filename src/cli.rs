// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, error::ErrorKind};
use std::path::PathBuf;

use crate::commands;
use crate::infra::fs::{absolutize, is_directory, is_file};

fn build_cli() -> Command {
    Command::new("suite-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run Google Test binaries from a tests config and aggregate their exit codes")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a tests config")
                .value_name("CONFIG")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("tests-dir")
                .short('t')
                .long("tests-dir")
                .help("Path to a directory with binaries to run")
                .value_name("TESTS_DIR")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Path to a folder to save tests results")
                .value_name("OUTPUT_DIR")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Absolutizes the named path argument and requires it to name an existing
/// file, exiting with a usage error otherwise.
fn existing_file(cmd: &mut Command, matches: &ArgMatches, id: &str) -> PathBuf {
    let path = absolutize(matches.get_one::<PathBuf>(id).unwrap()); // Required by clap
    if !is_file(&path) {
        cmd.error(
            ErrorKind::ValueValidation,
            format!("file '{}' doesn't exist", path.display()),
        )
        .exit();
    }
    path
}

/// Absolutizes the named path argument and requires it to name an existing
/// directory, exiting with a usage error otherwise.
fn existing_directory(cmd: &mut Command, matches: &ArgMatches, id: &str) -> PathBuf {
    let path = absolutize(matches.get_one::<PathBuf>(id).unwrap()); // Required by clap
    if !is_directory(&path) {
        cmd.error(
            ErrorKind::ValueValidation,
            format!("directory '{}' doesn't exist", path.display()),
        )
        .exit();
    }
    path
}

/// Parses and validates the command line, then runs the suite. The returned
/// value is the summed suite exit code.
pub async fn run() -> Result<i32> {
    let mut cmd = build_cli();
    let matches = cmd.get_matches_mut();

    let config = existing_file(&mut cmd, &matches, "config");
    let tests_dir = existing_directory(&mut cmd, &matches, "tests-dir");
    let output_dir = existing_directory(&mut cmd, &matches, "output-dir");

    commands::run::execute(config, tests_dir, output_dir).await
}
