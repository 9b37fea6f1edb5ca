//! # MRL 模块
//!
//! 括号形式的 NLmaps 查询语言（MRL）：表达式树定义和递归下降解析器。
//!
//! ## 模块结构
//!
//! - [`ast`]：表达式树定义
//! - [`parser`]：括号表达式解析器

pub mod ast;
pub mod parser;

pub use ast::{LeafKind, MrlNode};

/// 函子嵌套深度上限
///
/// 解析和还原都在超过此深度时报行级错误，因此库内构造的树可以安全地递归遍历。
pub const MAX_DEPTH: usize = 512;
pub use parser::parse_mrl;
