//! # Execution Module / 执行模块
//!
//! This module drives the actual test runs: `TestBinary` launches one
//! Google Test executable with the synthesized gtest arguments, and
//! `TestSuite` maps configured entries to binaries and runs them in order.
//!
//! 此模块驱动实际的测试运行：`TestBinary` 使用合成的 gtest 参数启动单个
//! Google Test 可执行文件，`TestSuite` 将配置条目映射到二进制文件并按顺序运行。

use anyhow::{Context, Result, anyhow};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use crate::core::config::{TestEntry, load_config};
use crate::core::models::{BinaryRunResult, SuiteReport};

/// The report format the binaries are asked to emit. Doubles as the
/// extension of the `results_*` files.
/// 要求二进制文件产出的报告格式。同时用作 `results_*` 文件的扩展名。
pub const RESULT_FORMAT: &str = "xml";

/// Builds the exclusion filter argument for a run. The leading `-` negates
/// the filter: run everything except the listed cases. Returns the empty
/// string when there is nothing to exclude; the argument is appended to the
/// child's argv either way.
///
/// 为一次运行构建排除过滤参数。前导的 `-` 表示取反：
/// 运行除列出用例以外的所有测试。没有要排除的内容时返回空字符串；
/// 无论如何该参数都会追加到子进程的 argv 中。
pub fn gtest_filter_arg(excluded_tests: Option<&[String]>) -> String {
    match excluded_tests {
        Some(excluded) if !excluded.is_empty() => {
            format!("--gtest_filter=-{}", excluded.join(":"))
        }
        _ => String::new(),
    }
}

/// Builds the output redirection argument for a result file path, or the
/// empty string when no file is wanted.
///
/// 为结果文件路径构建输出重定向参数；不需要文件时返回空字符串。
pub fn gtest_output_arg(output_file_path: Option<&Path>) -> String {
    match output_file_path {
        Some(path) => format!("--gtest_output={}:{}", RESULT_FORMAT, path.display()),
        None => String::new(),
    }
}

/// Computes the result-file path for one binary inside an output directory,
/// or `None` when no output directory was supplied.
pub fn output_path(output_dir: Option<&Path>, binary_name: &str) -> Option<PathBuf> {
    output_dir.map(|dir| dir.join(format!("results_{}.{}", binary_name, RESULT_FORMAT)))
}

/// A single Google Test executable on disk.
/// 磁盘上的单个 Google Test 可执行文件。
#[derive(Debug, Clone)]
pub struct TestBinary {
    path: PathBuf,
}

impl TestBinary {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the binary to completion and returns its exit code verbatim.
    /// There is no timeout and no retry; a hung binary hangs the suite.
    ///
    /// Exactly two arguments are appended, both possibly empty strings: the
    /// exclusion filter and the output redirection. When a result file is
    /// requested, the child's stdout goes to the null device, since the
    /// structured results land in the file and the console text would only
    /// interleave across binaries.
    ///
    /// 将二进制文件运行至结束并原样返回其退出码。
    /// 没有超时也没有重试；挂起的二进制文件会挂起整个套件。
    ///
    /// 恰好追加两个参数，均可能为空字符串：排除过滤器和输出重定向。
    /// 请求结果文件时，子进程的 stdout 被重定向到空设备，
    /// 因为结构化结果会写入文件，控制台文本只会在多个二进制文件之间交错。
    pub async fn run(
        &self,
        excluded_tests: Option<&[String]>,
        output_file_path: Option<&Path>,
    ) -> Result<i32> {
        let filter = gtest_filter_arg(excluded_tests);
        let output = gtest_output_arg(output_file_path);

        let mut cmd = tokio::process::Command::new(&self.path);
        cmd.arg(&filter).arg(&output);

        // Suppress stdout if we're writing results to a file.
        // 如果结果写入文件，则抑制 stdout。
        if output_file_path.is_some() {
            cmd.stdout(Stdio::null());
        }

        let status = cmd
            .status()
            .await
            .with_context(|| format!("failed to launch test binary '{}'", self.path.display()))?;

        // A child killed by a signal reports no exit code; count it as a
        // plain failure.
        // 被信号杀死的子进程没有退出码；按普通失败计。
        Ok(status.code().unwrap_or(1))
    }
}

/// One configured binary with its resolved executable.
struct SuiteEntry {
    entry: TestEntry,
    binary: TestBinary,
}

/// All configured test binaries of one invocation, in configuration order.
/// Built once at startup and immutable thereafter.
///
/// 一次调用中所有已配置的测试二进制文件，按配置顺序排列。
/// 启动时构建一次，此后不可变。
pub struct TestSuite {
    config_path: PathBuf,
    entries: Vec<SuiteEntry>,
}

impl TestSuite {
    /// Builds the suite from a config file and a directory of binaries.
    /// Each binary name resolves to `<tests_dir>/<name>`. A duplicated name
    /// replaces the earlier entry in place (mapping-key semantics: last
    /// wins, first position kept).
    ///
    /// 从配置文件和二进制文件目录构建套件。
    /// 每个二进制文件名解析为 `<tests_dir>/<name>`。
    /// 重复的名称会原位替换较早的条目（映射键语义：后者胜出，保留首次出现的位置）。
    pub fn from_config(config_path: &Path, tests_dir: &Path) -> Result<Self> {
        let mut entries: Vec<SuiteEntry> = Vec::new();

        for entry in load_config(config_path)? {
            let binary = TestBinary::new(tests_dir.join(&entry.binary_name));
            let suite_entry = SuiteEntry { entry, binary };

            match entries
                .iter()
                .position(|e| e.entry.binary_name == suite_entry.entry.binary_name)
            {
                Some(pos) => entries[pos] = suite_entry,
                None => entries.push(suite_entry),
            }
        }

        Ok(Self {
            config_path: config_path.to_path_buf(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured binary names, in run order.
    pub fn binary_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.entry.binary_name.as_str())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Runs one configured binary. Asking for a name the config does not
    /// contain is an error and launches nothing.
    ///
    /// 运行一个已配置的二进制文件。请求配置中不存在的名称是错误，
    /// 并且不会启动任何进程。
    pub async fn run(
        &self,
        binary_name: &str,
        output_dir: Option<&Path>,
    ) -> Result<BinaryRunResult> {
        let suite_entry = self
            .entries
            .iter()
            .find(|e| e.entry.binary_name == binary_name)
            .ok_or_else(|| {
                anyhow!(
                    "'{}' not found in config '{}'",
                    binary_name,
                    self.config_path.display()
                )
            })?;

        self.run_entry(suite_entry, output_dir).await
    }

    /// Runs every configured binary in order, blocking on each before the
    /// next starts. A nonzero exit code never stops the remaining binaries;
    /// a launch failure does. The report's `suite_code()` is the summed
    /// result used as the process exit status.
    ///
    /// 按顺序运行每个已配置的二进制文件，前一个结束后才开始下一个。
    /// 非零退出码不会阻止其余二进制文件的运行；启动失败则会。
    /// 报告的 `suite_code()` 是求和结果，用作进程退出状态。
    pub async fn run_all(&self, output_dir: Option<&Path>) -> Result<SuiteReport> {
        let mut results = Vec::with_capacity(self.entries.len());

        for suite_entry in &self.entries {
            results.push(self.run_entry(suite_entry, output_dir).await?);
        }

        Ok(SuiteReport::new(results))
    }

    async fn run_entry(
        &self,
        suite_entry: &SuiteEntry,
        output_dir: Option<&Path>,
    ) -> Result<BinaryRunResult> {
        let entry = &suite_entry.entry;
        let output_file = output_path(output_dir, &entry.binary_name);

        println!(
            "{} {}",
            "Running".blue().bold(),
            suite_entry.binary.path().display()
        );

        let started = Instant::now();
        let exit_code = suite_entry
            .binary
            .run(entry.excluded_tests.as_deref(), output_file.as_deref())
            .await?;
        let duration = started.elapsed();

        Ok(BinaryRunResult {
            binary_name: entry.binary_name.clone(),
            exit_code,
            duration,
            output_file,
        })
    }
}
