//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including the configuration model and the test execution engine.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括配置模型和测试执行引擎。

pub mod config;
pub mod execution;
pub mod models;

// Re-exports
pub use config::TestEntry;
pub use execution::{TestBinary, TestSuite};
pub use models::{BinaryRunResult, SuiteReport};
