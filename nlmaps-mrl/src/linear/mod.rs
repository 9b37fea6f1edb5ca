//! # Linear 模块
//!
//! 括号形式与线性 token 序列之间的双向转换。
//!
//! ```text
//! area(keyval('name','Paris'))  ──linearise──►  area@1 keyval@2 name@0 Paris@s
//!                               ◄─functionalise─
//! ```
//!
//! ## 模块结构
//!
//! - [`token`]：`name@k` / `value@s` token
//! - [`escape`]：字符串值的占位符转义
//! - [`linearise`]：树 → 先序 token 序列
//! - [`functionalise`]：token 序列 → 树（显式栈）

pub mod escape;
pub mod functionalise;
pub mod linearise;
pub mod token;


use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, DiagnosticResult};
use crate::error::MrlResult;

pub use functionalise::{
    FunctionaliseOptions, PassThrough, functionalise, functionalise_batch, functionalise_line,
};
pub use linearise::{linearise, linearise_batch, linearise_line};
pub use token::{Arity, LinearToken, join_tokens};

/// 叶子标注约定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// 字符串叶子 → `@s`，裸叶子 → `@0`
    Plain,
    /// 在 Plain 基础上，`keyval` 的第一个参数（OSM 标签键）总是写成 `@0`，
    /// 还原时 `keyval`/`findkey` 的首个 `@0` 子节点重新加引号
    #[default]
    NlMaps,
}

/// 线性化时视为"键"位置的函子
const KEY_FUNCTORS_LINEARISE: &[&str] = &["keyval"];
/// 还原时首个 `@0` 子节点需要加引号的函子
const KEY_FUNCTORS_FUNCTIONALISE: &[&str] = &["keyval", "findkey"];

impl Dialect {
    /// 线性化：`parent` 的第 `index` 个字符串参数是否写成 `@0`
    pub fn emits_key(self, parent: &str, index: usize) -> bool {
        self == Self::NlMaps && index == 0 && KEY_FUNCTORS_LINEARISE.contains(&parent)
    }

    /// 还原：`parent` 的第 `index` 个 `@0` 子节点是否还原为字符串
    pub fn quotes_key(self, parent: &str, index: usize) -> bool {
        self == Self::NlMaps && index == 0 && KEY_FUNCTORS_FUNCTIONALISE.contains(&parent)
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "nlmaps" => Ok(Self::NlMaps),
            other => Err(format!("未知的 dialect '{}'，可选 plain / nlmaps", other)),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::NlMaps => write!(f, "nlmaps"),
        }
    }
}

/// 批处理中某行失败时输出什么
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnLineError {
    /// 输出空行，保持与输入逐行对齐
    #[default]
    Empty,
    /// 跳过该行
    Skip,
}

/// 批处理结果
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    /// 输出行
    pub lines: Vec<String>,
    /// 失败行的诊断
    pub diagnostics: DiagnosticResult,
    /// 成功行数
    pub succeeded: usize,
    /// 失败行数
    pub failed: usize,
}

/// 逐行执行 `convert`，失败行记录诊断后继续
pub(crate) fn run_batch<S, F>(
    source: &str,
    lines: &[S],
    on_error: OnLineError,
    mut convert: F,
) -> BatchOutput
where
    S: AsRef<str>,
    F: FnMut(&str, usize) -> MrlResult<String>,
{
    let mut output = BatchOutput::default();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;

        match convert(line, line_number) {
            Ok(converted) => {
                output.lines.push(converted);
                output.succeeded += 1;
            }
            Err(e) => {
                output.diagnostics.push(
                    Diagnostic::error(source, e.to_string())
                        .with_line(line_number)
                        .with_detail(line),
                );
                output.failed += 1;
                if on_error == OnLineError::Empty {
                    output.lines.push(String::new());
                }
            }
        }
    }

    output
}
