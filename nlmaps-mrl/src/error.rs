//! # Error 模块
//!
//! 定义 nlmaps-mrl 中使用的错误类型。
//!
//! - 行级错误（[`ParseError`]、[`MalformedSequenceError`]）只影响出错的那一行，
//!   批处理会记录诊断后继续。
//! - 文件级错误（[`FileError`]、[`AlignmentError`]）终止本次运行。

use std::path::PathBuf;

use thiserror::Error;

/// 括号表达式解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 空输入
    #[error("第 {line} 行：表达式为空")]
    EmptyInput { line: usize },

    /// 输入意外结束
    #[error("第 {line} 行：表达式在位置 {position} 意外结束")]
    UnexpectedEnd { line: usize, position: usize },

    /// 左括号未闭合
    #[error("第 {line} 行：'{functor}(' 缺少右括号 ')'")]
    UnclosedParen { line: usize, functor: String },

    /// 括号前缺少函子名
    #[error("第 {line} 行：位置 {position} 的 '(' 前缺少函子名")]
    EmptyFunctor { line: usize, position: usize },

    /// 参数为空（`f()`、`f(a,,b)`）
    #[error("第 {line} 行：位置 {position} 处的参数为空")]
    EmptyArgument { line: usize, position: usize },

    /// 字符串字面量未闭合
    #[error("第 {line} 行：位置 {position} 开始的字符串字面量未闭合")]
    UnclosedQuote { line: usize, position: usize },

    /// 空字符串字面量
    #[error("第 {line} 行：位置 {position} 处的字符串字面量为空")]
    EmptyLiteral { line: usize, position: usize },

    /// 意外字符
    #[error("第 {line} 行：位置 {position} 出现意外字符 '{found}'")]
    UnexpectedChar {
        line: usize,
        position: usize,
        found: char,
    },

    /// 函子嵌套超过 [`crate::MAX_DEPTH`]
    #[error("第 {line} 行：函子嵌套深度超过 {depth} 层")]
    TooDeep { line: usize, depth: usize },

    /// 表达式之后仍有内容（通常是多余的右括号）
    #[error("第 {line} 行：表达式末尾存在无法解析的内容: '{rest}'")]
    TrailingInput { line: usize, rest: String },
}

impl ParseError {
    /// 出错的行号（从 1 开始）
    pub fn line(&self) -> usize {
        match self {
            Self::EmptyInput { line }
            | Self::UnexpectedEnd { line, .. }
            | Self::UnclosedParen { line, .. }
            | Self::EmptyFunctor { line, .. }
            | Self::EmptyArgument { line, .. }
            | Self::UnclosedQuote { line, .. }
            | Self::EmptyLiteral { line, .. }
            | Self::UnexpectedChar { line, .. }
            | Self::TooDeep { line, .. }
            | Self::TrailingInput { line, .. } => *line,
        }
    }
}

/// 线性 token 序列与其声明的元数不一致
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedSequenceError {
    /// 空序列
    #[error("第 {line} 行：token 序列为空")]
    Empty { line: usize },

    /// token 缺少 `@` 或元数既不是 `s` 也不是非负整数
    #[error("第 {line} 行：第 {index} 个 token '{token}' 不是合法的 name@arity 形式")]
    InvalidToken {
        line: usize,
        index: usize,
        token: String,
    },

    /// 序列耗尽时仍有未满足的子树
    #[error("第 {line} 行：序列提前结束，'{functor}' 等仍缺少 {missing} 个子树")]
    Underflow {
        line: usize,
        functor: String,
        missing: usize,
    },

    /// 函子嵌套超过 [`crate::MAX_DEPTH`]
    #[error("第 {line} 行：第 {index} 个 token 处函子嵌套深度超过 {depth} 层")]
    TooDeep {
        line: usize,
        index: usize,
        depth: usize,
    },

    /// 根节点完成后仍有剩余 token
    #[error("第 {line} 行：根节点已完整，第 {index} 个 token '{token}' 多余")]
    TrailingTokens {
        line: usize,
        index: usize,
        token: String,
    },
}

impl MalformedSequenceError {
    /// 出错的行号（从 1 开始）
    pub fn line(&self) -> usize {
        match self {
            Self::Empty { line }
            | Self::InvalidToken { line, .. }
            | Self::Underflow { line, .. }
            | Self::TooDeep { line, .. }
            | Self::TrailingTokens { line, .. } => *line,
        }
    }
}

/// 文件读写失败
#[derive(Error, Debug, Clone, PartialEq)]
#[error("文件 {path:?} {action}失败: {message}")]
pub struct FileError {
    pub path: PathBuf,
    pub action: FileAction,
    pub message: String,
}

impl FileError {
    pub fn read(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            action: FileAction::Read,
            message: err.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            action: FileAction::Write,
            message: err.to_string(),
        }
    }
}

/// 文件操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Read,
    Write,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "读取"),
            Self::Write => write!(f, "写入"),
        }
    }
}

/// 评测时预测文件与 gold 文件行数不一致
#[derive(Error, Debug, Clone, PartialEq)]
#[error("行数不一致：预测 {suggested} 行，gold {gold} 行")]
pub struct AlignmentError {
    pub suggested: usize,
    pub gold: usize,
}

impl AlignmentError {
    /// 两侧行数相同时返回 `Ok`
    pub fn check(suggested: usize, gold: usize) -> Result<(), Self> {
        if suggested == gold {
            Ok(())
        } else {
            Err(Self { suggested, gold })
        }
    }
}

/// nlmaps-mrl 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MrlError {
    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),

    /// 序列错误
    #[error("序列错误: {0}")]
    Sequence(#[from] MalformedSequenceError),

    /// 文件错误
    #[error("{0}")]
    File(#[from] FileError),

    /// 对齐错误
    #[error("对齐错误: {0}")]
    Alignment(#[from] AlignmentError),
}

/// Result 类型别名
pub type MrlResult<T> = Result<T, MrlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_check() {
        assert!(AlignmentError::check(3, 3).is_ok());
        let err = AlignmentError::check(2, 3).unwrap_err();
        assert_eq!(
            err,
            AlignmentError {
                suggested: 2,
                gold: 3
            }
        );
    }

    #[test]
    fn test_unified_error_wraps_sources() {
        let parse: MrlError = ParseError::EmptyInput { line: 4 }.into();
        assert!(matches!(parse, MrlError::Parse(_)));

        let alignment: MrlError = AlignmentError {
            suggested: 1,
            gold: 2,
        }
        .into();
        assert!(alignment.to_string().contains("预测 1 行"));
    }

    #[test]
    fn test_error_line_accessors() {
        let err = ParseError::UnclosedParen {
            line: 7,
            functor: "area".to_string(),
        };
        assert_eq!(err.line(), 7);
        assert!(err.to_string().contains("area"));

        let err = MalformedSequenceError::Underflow {
            line: 2,
            functor: "query".to_string(),
            missing: 2,
        };
        assert_eq!(err.line(), 2);
    }
}
