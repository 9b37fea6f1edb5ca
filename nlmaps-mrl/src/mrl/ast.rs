//! # AST 模块
//!
//! MRL 表达式树。节点只有两种：带有序子节点的函子，和不再展开的叶子。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 叶子字面量的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    /// 单引号字符串，如 `'Paris'`
    Quoted,
    /// 裸标识符或数字，如 `count`、`1`、`DIST_INTOWN`
    Bare,
}

/// MRL 表达式树节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MrlNode {
    /// `name(child, child, ...)`，子节点至少一个
    Functor { name: String, children: Vec<MrlNode> },

    /// 字面量
    Leaf { value: String, kind: LeafKind },
}

impl MrlNode {
    /// 创建函子节点
    pub fn functor(name: impl Into<String>, children: Vec<MrlNode>) -> Self {
        Self::Functor {
            name: name.into(),
            children,
        }
    }

    /// 创建单引号字符串叶子
    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Leaf {
            value: value.into(),
            kind: LeafKind::Quoted,
        }
    }

    /// 创建裸标识符叶子
    pub fn bare(value: impl Into<String>) -> Self {
        Self::Leaf {
            value: value.into(),
            kind: LeafKind::Bare,
        }
    }

    /// 函子名或字面量值
    pub fn symbol(&self) -> &str {
        match self {
            Self::Functor { name, .. } => name,
            Self::Leaf { value, .. } => value,
        }
    }

    /// 直接子节点个数
    pub fn arity(&self) -> usize {
        match self {
            Self::Functor { children, .. } => children.len(),
            Self::Leaf { .. } => 0,
        }
    }

    /// 子节点（叶子为空切片）
    pub fn children(&self) -> &[MrlNode] {
        match self {
            Self::Functor { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// 以本节点为根的子树节点总数
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(MrlNode::node_count).sum::<usize>()
    }
}

/// 规范括号形式：无空格，字符串叶子加单引号
impl fmt::Display for MrlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Functor { name, children } => {
                write!(f, "{}(", name)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Self::Leaf {
                value,
                kind: LeafKind::Quoted,
            } => write!(f, "'{}'", value),
            Self::Leaf {
                value,
                kind: LeafKind::Bare,
            } => write!(f, "{}", value),
        }
    }
}
