//! # Data Models Module / 数据模型模块
//!
//! This module defines the runtime data structures produced by a suite run:
//! the per-binary run record and the aggregated suite report.
//!
//! 此模块定义套件运行产生的运行时数据结构：
//! 针对单个二进制文件的运行记录和聚合后的套件报告。

use std::path::PathBuf;
use std::time::Duration;

/// The outcome of one test binary invocation.
/// 一次测试二进制文件调用的结果。
#[derive(Debug, Clone)]
pub struct BinaryRunResult {
    /// The configured name of the binary that ran.
    /// 所运行二进制文件的配置名称。
    pub binary_name: String,
    /// The exit code the binary reported, verbatim.
    /// 二进制文件报告的退出码，原样保留。
    pub exit_code: i32,
    /// Wall-clock time from launch to exit.
    /// 从启动到退出的真实耗时。
    pub duration: Duration,
    /// The result file the binary was asked to write, if any.
    /// 要求二进制文件写入的结果文件（如果有）。
    pub output_file: Option<PathBuf>,
}

impl BinaryRunResult {
    /// A binary passed when it exited with code 0.
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// The collected results of a full suite run, in configuration order.
/// 一次完整套件运行收集到的结果，按配置顺序排列。
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    results: Vec<BinaryRunResult>,
}

impl SuiteReport {
    pub fn new(results: Vec<BinaryRunResult>) -> Self {
        Self { results }
    }

    /// The per-binary records, in run order.
    pub fn results(&self) -> &[BinaryRunResult] {
        &self.results
    }

    /// The suite-level exit code: the arithmetic sum of every per-binary
    /// exit code. Binaries exiting 0, 1 and 2 yield 3. The sum is the
    /// contract, not a boolean OR and not a count of failures.
    ///
    /// 套件级退出码：所有二进制文件退出码的算术和。
    /// 退出码为 0、1、2 的二进制文件得到 3。
    /// 约定是求和，不是布尔“或”，也不是失败计数。
    pub fn suite_code(&self) -> i32 {
        self.results.iter().map(|r| r.exit_code).sum()
    }

    /// `true` when at least one binary exited nonzero.
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| !r.passed())
    }
}
