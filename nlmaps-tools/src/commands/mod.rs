//! # Commands 模块
//!
//! 四个入口的实现。每个命令：读入整个文件 → 逐行处理 → 写出结果。
//! 行级错误记录为诊断并以 warn 级别输出，文件级错误与对齐错误直接返回。

pub mod eval;
pub mod functionalise;
pub mod linearise;
pub mod seq_eval;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use nlmaps_mrl::{DiagnosticResult, corpus};
use tracing::{debug, info, warn};

/// 批处理命令的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// 输入行数
    pub total: usize,
    /// 成功行数
    pub succeeded: usize,
    /// 失败行数
    pub failed: usize,
}

/// 读取语料文件
pub(crate) fn read_corpus(path: &Path) -> anyhow::Result<Vec<String>> {
    let lines = corpus::read_lines(path)?;
    debug!(path = %path.display(), lines = lines.len(), "读取输入文件");
    Ok(lines)
}

/// 写出语料文件
pub(crate) fn write_corpus<S: AsRef<str>>(path: &Path, lines: &[S]) -> anyhow::Result<()> {
    corpus::write_lines(path, lines)?;
    info!(path = %path.display(), lines = lines.len(), "写出文件");
    Ok(())
}

/// 逐条输出诊断
pub(crate) fn log_diagnostics(result: &DiagnosticResult) {
    for diag in &result.diagnostics {
        warn!(
            severity = %diag.level,
            source = %diag.source,
            line = ?diag.line,
            detail = ?diag.detail,
            "{}",
            diag.message
        );
    }
}

/// 与输入文件同名、追加扩展名的报告路径（`dev.lin` → `dev.lin.eval`）
pub fn sidecar_path(input: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("out/dev.lin"), "sigf_neg"),
            PathBuf::from("out/dev.lin.sigf_neg")
        );
    }
}
