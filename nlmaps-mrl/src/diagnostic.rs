//! # 诊断模块
//!
//! 批处理中逐行问题的收集与展示，不依赖 IO。
//!
//! ## 设计原则
//!
//! - 行级错误不终止批处理，只记录为诊断
//! - 诊断分级：Error（该行没有输出）、Warn（有输出但可疑）

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 来源文件路径或标识
    pub source: String,
    /// 行号（如果可定位，从 1 开始）
    pub line: Option<usize>,
    /// 诊断消息
    pub message: String,
    /// 诊断详情（可选，如原始行内容）
    pub detail: Option<String>,
}

impl Diagnostic {
    fn new(level: DiagnosticLevel, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            source: source.into(),
            line: None,
            message: message.into(),
            detail: None,
        }
    }

    /// 创建错误诊断
    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, source, message)
    }

    /// 创建警告诊断
    pub fn warn(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warn, source, message)
    }

    /// 设置行号
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// 设置详情
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.source)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  | {}", detail)?;
        }
        Ok(())
    }
}

/// 诊断结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticResult {
    /// 诊断条目列表
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticResult {
    /// 创建空结果
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 合并另一个结果
    pub fn merge(&mut self, other: DiagnosticResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.count(DiagnosticLevel::Error)
    }

    /// 获取警告数量
    pub fn warn_count(&self) -> usize {
        self.count(DiagnosticLevel::Warn)
    }

    fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("dev.mrl", "缺少右括号")
            .with_line(12)
            .with_detail("area(keyval('name','Paris')");
        assert_eq!(
            diag.to_string(),
            "[ERROR] dev.mrl:12: 缺少右括号\n  | area(keyval('name','Paris')"
        );

        let diag = Diagnostic::warn("dev.mrl", "还原结果不同");
        assert_eq!(diag.to_string(), "[WARN] dev.mrl: 还原结果不同");
    }

    #[test]
    fn test_result_counts_and_merge() {
        let mut result = DiagnosticResult::new();
        assert!(result.is_empty());

        result.push(Diagnostic::error("a", "e1"));
        let mut other = DiagnosticResult::new();
        other.push(Diagnostic::warn("b", "w1"));
        other.push(Diagnostic::warn("b", "w2"));
        result.merge(other);

        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warn_count(), 2);
        assert!(result.has_errors());
        assert_eq!(result.diagnostics[1].source, "b");
    }
}
