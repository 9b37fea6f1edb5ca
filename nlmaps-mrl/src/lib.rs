//! # NLmaps MRL
//!
//! NLmaps 语义解析语料的 MRL（meaning representation language）工具核心库。
//!
//! ## 架构概述
//!
//! `nlmaps-mrl` 是纯逻辑核心，除 [`corpus`] 的逐行读写外不做 IO。
//!
//! ```text
//! 括号形式 ──parse_mrl──► MrlNode ──linearise──► Vec<LinearToken> ──► "area@1 keyval@2 ..."
//!     ▲                                                                       │
//!     └──────────── Display ◄── MrlNode ◄──────── functionalise ◄─────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```ignore
//! use nlmaps_mrl::{Dialect, FunctionaliseOptions, functionalise_line, linearise_line};
//!
//! let tokens = linearise_line("area(keyval('name','Paris'))", 1, Dialect::NlMaps)?;
//! assert_eq!(tokens, "area@1 keyval@2 name@0 Paris@s");
//!
//! let mrl = functionalise_line(&tokens, 1, &FunctionaliseOptions::default(), None)?;
//! assert_eq!(mrl, "area(keyval('name','Paris'))");
//! ```
//!
//! ## 模块结构
//!
//! - [`mrl`]：表达式树与括号解析器
//! - [`linear`]：线性化与还原
//! - [`eval`]：序列评测与答案评测
//! - [`diagnostic`]：批处理逐行诊断
//! - [`corpus`]：语料文件读写
//! - [`error`]：错误类型定义

pub mod corpus;
pub mod diagnostic;
pub mod error;
pub mod eval;
pub mod linear;
pub mod mrl;

// 重导出核心类型
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticResult};
pub use error::{
    AlignmentError, FileError, MalformedSequenceError, MrlError, MrlResult, ParseError,
};
pub use eval::{
    Answer, AnswerOutcome, AnswerScore, SequenceScore, evaluate_answers, evaluate_sequences,
};
pub use linear::{
    Arity, BatchOutput, Dialect, FunctionaliseOptions, LinearToken, OnLineError, PassThrough,
    functionalise, functionalise_batch, functionalise_line, linearise, linearise_batch,
    linearise_line,
};
pub use mrl::{LeafKind, MAX_DEPTH, MrlNode, parse_mrl};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        let node = parse_mrl("qtype(count)", 1).unwrap();
        let tokens = linearise(&node, Dialect::default());
        assert_eq!(tokens.len(), 2);

        let _options = FunctionaliseOptions::default();
        let _on_error = OnLineError::default();
        let _result = DiagnosticResult::new();
    }
}
