//! # Configuration Module / 配置模块
//!
//! This module defines the document model of the YAML tests config and the
//! normalization of its entries into a single internal record type.
//!
//! 此模块定义 YAML 测试配置的文档模型，
//! 以及将其条目规范化为单一内部记录类型的逻辑。

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The top-level shape of a tests config file.
/// 测试配置文件的顶层结构。
#[derive(Debug, Deserialize)]
pub struct SuiteConfig {
    /// The ordered list of test binaries to run.
    /// 要运行的测试二进制文件的有序列表。
    pub tests: Vec<RawEntry>,
}

/// One item of the `tests` sequence, as written in the config file.
/// A bare string is shorthand for a binary with no settings:
///
/// ```yaml
/// tests:
///   - simple_binary_name
///   - binary_with_exclusions:
///       to_fix:
///         - TestSuite.DisabledCase1
///         - TestSuite.DisabledCase2
/// ```
///
/// `tests` 序列中的单个条目，即配置文件中书写的形式。
/// 裸字符串是无任何设置的二进制文件的简写。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// `- binary_name` — run everything in the binary.
    /// `- binary_name` — 运行该二进制文件中的所有测试。
    Shorthand(String),
    /// A mapping from the binary name to its settings, which may be null.
    /// 从二进制文件名到其设置的映射，设置可以为 null。
    Detailed(BTreeMap<String, Option<EntrySettings>>),
}

/// The per-binary settings attached to a detailed entry. Unknown keys are
/// ignored.
/// 附加到详细条目上的针对单个二进制文件的设置。未知键会被忽略。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntrySettings {
    /// Test cases to skip until they are fixed; the binary runs everything
    /// else.
    /// 修复之前要跳过的测试用例；二进制文件会运行其余所有测试。
    #[serde(default)]
    pub to_fix: Option<Vec<String>>,
    /// Operating systems this binary is meant for. Accepted but not applied.
    /// 此二进制文件适用的操作系统。可解析但尚未生效。
    // TODO: skip entries whose platform list does not include the current OS.
    #[serde(default)]
    pub platform: Option<Vec<String>>,
}

/// A normalized test entry: one binary plus its optional exclusion list.
/// Shorthand and detailed config forms both collapse into this record.
///
/// 规范化后的测试条目：一个二进制文件及其可选的排除列表。
/// 简写和详细两种配置形式都会折叠为此记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    /// The file name of the test binary inside the tests directory.
    /// 测试目录中测试二进制文件的文件名。
    pub binary_name: String,
    /// Test cases the binary must not run. `None` means run everything.
    /// 二进制文件不得运行的测试用例。`None` 表示运行所有测试。
    pub excluded_tests: Option<Vec<String>>,
    /// The parsed, currently unapplied platform restriction.
    /// 已解析但当前未生效的平台限制。
    pub platforms: Option<Vec<String>>,
}

impl RawEntry {
    /// Normalizes a raw config item. A shorthand string becomes a name with
    /// no settings; a detailed mapping must name exactly one binary.
    ///
    /// 规范化一个原始配置条目。简写字符串成为不带设置的名称；
    /// 详细映射必须且只能命名一个二进制文件。
    pub fn normalize(self) -> Result<TestEntry> {
        match self {
            RawEntry::Shorthand(binary_name) => Ok(TestEntry {
                binary_name,
                excluded_tests: None,
                platforms: None,
            }),
            RawEntry::Detailed(map) => {
                let mut pairs = map.into_iter();
                match (pairs.next(), pairs.next()) {
                    (Some((binary_name, settings)), None) => {
                        let settings = settings.unwrap_or_default();
                        Ok(TestEntry {
                            binary_name,
                            excluded_tests: settings.to_fix,
                            platforms: settings.platform,
                        })
                    }
                    _ => bail!("test entry must name exactly one binary"),
                }
            }
        }
    }
}

/// Reads and parses a tests config file, returning its entries in document
/// order. Any malformed entry fails the whole load; nothing runs on a bad
/// config.
///
/// 读取并解析测试配置文件，按文档顺序返回其条目。
/// 任何格式错误的条目都会使整个加载失败；配置有误时不会运行任何测试。
pub fn load_config(path: &Path) -> Result<Vec<TestEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read test config '{}'", path.display()))?;

    let config: SuiteConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse test config '{}'", path.display()))?;

    config.tests.into_iter().map(RawEntry::normalize).collect()
}
