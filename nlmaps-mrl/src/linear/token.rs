//! # 线性 token
//!
//! `name@k`：有 k 个直接子节点的函子（k 可以为 0）；`value@s`：标量叶子。

use std::fmt;

use serde::{Deserialize, Serialize};

/// token 后缀中的元数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// `@s`
    Scalar,
    /// `@k`
    Functor(usize),
}

impl Arity {
    /// 该 token 需要消费的子树个数
    pub fn children(self) -> usize {
        match self {
            Self::Scalar => 0,
            Self::Functor(k) => k,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "s"),
            Self::Functor(k) => write!(f, "{}", k),
        }
    }
}

/// 一个线性 token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearToken {
    /// 函子名或（已转义的）字面量
    pub symbol: String,
    pub arity: Arity,
}

impl LinearToken {
    pub fn functor(symbol: impl Into<String>, arity: usize) -> Self {
        Self {
            symbol: symbol.into(),
            arity: Arity::Functor(arity),
        }
    }

    pub fn scalar(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            arity: Arity::Scalar,
        }
    }

    /// 解析单个 token
    ///
    /// 按最后一个 `@` 切分，因此字面量内部的 `@` 不影响解析。
    /// 没有 `@`、元数既不是 `s` 也不是非负整数时返回 `None`。
    pub fn parse(raw: &str) -> Option<Self> {
        let (symbol, arity) = raw.rsplit_once('@')?;
        let arity = match arity {
            "s" => Arity::Scalar,
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Arity::Functor(digits.parse().ok()?)
            }
            _ => return None,
        };
        Some(Self {
            symbol: symbol.to_string(),
            arity,
        })
    }

    pub fn is_scalar(&self) -> bool {
        self.arity == Arity::Scalar
    }
}

impl fmt::Display for LinearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.arity)
    }
}

/// 以单个空格连接 token
pub fn join_tokens(tokens: &[LinearToken]) -> String {
    tokens
        .iter()
        .map(LinearToken::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            LinearToken::parse("keyval@2"),
            Some(LinearToken::functor("keyval", 2))
        );
        assert_eq!(
            LinearToken::parse("Paris@s"),
            Some(LinearToken::scalar("Paris"))
        );
        assert_eq!(LinearToken::parse("count@0"), Some(LinearToken::functor("count", 0)));
    }

    #[test]
    fn test_parse_splits_on_last_at() {
        let token = LinearToken::parse("info@example.org@s").unwrap();
        assert_eq!(token.symbol, "info@example.org");
        assert!(token.is_scalar());
    }

    #[test]
    fn test_parse_rejects_invalid_arity() {
        assert_eq!(LinearToken::parse("pari"), None);
        assert_eq!(LinearToken::parse("area@"), None);
        assert_eq!(LinearToken::parse("area@x"), None);
        assert_eq!(LinearToken::parse("area@-1"), None);
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            LinearToken::functor("qtype", 1),
            LinearToken::functor("latlong", 0),
        ];
        assert_eq!(join_tokens(&tokens), "qtype@1 latlong@0");
    }
}
