// src/commands/run.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    core::execution::TestSuite,
    reporting::{print_suite_outcome, print_summary},
};

/// Executes one full suite run: load the config, resolve the binaries in
/// the tests directory, run them in configuration order, and report.
/// Returns the summed suite exit code for the process exit status.
///
/// 执行一次完整的套件运行：加载配置、在测试目录中解析二进制文件、
/// 按配置顺序运行并输出报告。返回求和后的套件退出码作为进程退出状态。
pub async fn execute(config: PathBuf, tests_dir: PathBuf, output_dir: PathBuf) -> Result<i32> {
    let suite = TestSuite::from_config(&config, &tests_dir)?;

    println!(
        "{}",
        format!(
            "Loaded {} test binaries from '{}'",
            suite.len(),
            config.display()
        )
        .bold()
    );
    println!("Running binaries from '{}'", tests_dir.display());
    println!("Writing results to '{}'", output_dir.display());

    let report = suite.run_all(Some(output_dir.as_path())).await?;

    print_summary(report.results());
    let suite_code = report.suite_code();
    print_suite_outcome(suite_code);

    Ok(suite_code)
}
