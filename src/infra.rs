//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Suite Runner,
//! currently file system helpers used by argument validation.
//!
//! 此模块为 Suite Runner 提供基础设施服务，
//! 目前包括参数校验使用的文件系统辅助功能。

pub mod fs;
