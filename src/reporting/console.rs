//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints colorful, formatted summaries of a suite run to the
//! console.
//!
//! 此模块在控制台打印彩色、格式化的套件运行摘要。

use crate::core::models::BinaryRunResult;
use colored::*;

/// Prints a formatted summary of per-binary results to the console.
/// Displays a table with status, binary name and duration, using color
/// coding to highlight failures.
///
/// 在控制台打印格式化的二进制文件结果摘要。
/// 显示一个包含状态、二进制文件名和耗时的表格，用颜色标出失败项。
///
/// # Output Format / 输出格式
/// ```text
/// --- Suite Summary ---
///   - Passed           | base_unittests                           |      1.23s
///   - Failed (code 2)  | net_unittests                            |      0.45s
/// ```
pub fn print_summary(results: &[BinaryRunResult]) {
    println!("\n{}", "--- Suite Summary ---".bold());

    for result in results {
        let status_colored = if result.passed() {
            "Passed".green()
        } else {
            format!("Failed (code {})", result.exit_code).red()
        };
        let duration_str = format!("{:.2?}", result.duration);

        println!(
            "  - {:<18} | {:<40} | {:>10}",
            status_colored, result.binary_name, duration_str
        );
    }
}

/// Prints the final banner with the summed suite exit code.
///
/// 打印带有求和后套件退出码的最终横幅。
pub fn print_suite_outcome(suite_code: i32) {
    if suite_code == 0 {
        println!("\n{}", "TEST SUITE PASSED".green().bold());
    } else {
        println!(
            "\n{}",
            format!("TEST SUITE FAILED (combined exit code {})", suite_code)
                .red()
                .bold()
        );
    }
}
