//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for path handling,
//! such as absolutizing arguments and checking path types.
//!
//! 此模块提供路径处理的实用功能，
//! 如参数绝对化和路径类型检查。

use std::env;
use std::path::{Path, PathBuf};

/// Makes a path absolute against the current working directory without
/// requiring it to exist. Existing paths keep their spelling; no symlink
/// resolution happens.
///
/// # Arguments
/// * `path` - Path to absolutize
///
/// # Returns
/// The absolute form of `path`
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Checks if a path exists and is a regular file.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a file, `false` otherwise
pub fn is_file(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
