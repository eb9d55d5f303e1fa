//! # Reporting Module / 报告模块
//!
//! This module handles the display of suite results. The per-binary XML
//! reports are written by the test binaries themselves; what lives here is
//! the colored console view of a finished run.
//!
//! 此模块处理套件结果的展示。针对单个二进制文件的 XML 报告由测试
//! 二进制文件自行写入；这里负责的是运行结束后的彩色控制台视图。

pub mod console;

// Re-export common reporting functions
pub use console::{print_suite_outcome, print_summary};
