//! # MRL 解析器
//!
//! 手写递归下降解析器，把一行括号表达式解析为 [`MrlNode`] 树。
//!
//! ## 语法
//!
//! ```text
//! node      := quoted | ident [ '(' arguments ')' ]
//! arguments := node ( ',' node )*
//! ident     := 除空白、'('、')'、','、'\'' 以外的字符序列
//! quoted    := '\'' 任意字符 '\''
//! ```
//!
//! - 标识符、括号、逗号周围的空白不影响结果
//! - 括号按深度匹配，嵌套调用内的逗号不会拆分外层参数
//! - 函子嵌套超过 [`MAX_DEPTH`] 层时报错，递归深度因此有界
//! - 字符串内的 `'` 只有在其后（跳过空白）紧跟 `,`、`)` 或输入结束时才视为闭合引号，
//!   因此 `'McDonald's'`、`'M(c)Donalds'`、`'japanese,italian'` 都是合法字面量

#[cfg(test)]
mod tests;

use crate::error::ParseError;
use crate::mrl::{MAX_DEPTH, MrlNode};

/// 解析一行括号表达式
///
/// `line_number` 只用于错误信息（从 1 开始）。
pub fn parse_mrl(input: &str, line_number: usize) -> Result<MrlNode, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput { line: line_number });
    }

    let mut parser = MrlParser::new(input, line_number);
    let node = parser.parse_node()?;
    parser.skip_whitespace();
    if !parser.remaining().is_empty() {
        return Err(ParseError::TrailingInput {
            line: line_number,
            rest: parser.remaining().to_string(),
        });
    }
    Ok(node)
}

/// 标识符中不允许出现的字符
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',' | '\'')
}

struct MrlParser<'a> {
    input: &'a str,
    pos: usize,
    line_number: usize,
    /// 当前所在的函子嵌套层数
    depth: usize,
}

impl<'a> MrlParser<'a> {
    fn new(input: &'a str, line_number: usize) -> Self {
        Self {
            input,
            pos: 0,
            line_number,
            depth: 0,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// 解析一个节点（函子或叶子）
    fn parse_node(&mut self) -> Result<MrlNode, ParseError> {
        self.skip_whitespace();

        let c = self.peek_char().ok_or(ParseError::UnexpectedEnd {
            line: self.line_number,
            position: self.pos,
        })?;

        match c {
            '\'' => self.parse_quoted(),
            '(' => Err(ParseError::EmptyFunctor {
                line: self.line_number,
                position: self.pos,
            }),
            ',' | ')' => Err(ParseError::UnexpectedChar {
                line: self.line_number,
                position: self.pos,
                found: c,
            }),
            _ => {
                let name = self.parse_identifier();
                self.skip_whitespace();
                if self.peek_char() == Some('(') {
                    self.consume_char();
                    if self.depth == MAX_DEPTH {
                        return Err(ParseError::TooDeep {
                            line: self.line_number,
                            depth: MAX_DEPTH,
                        });
                    }
                    self.depth += 1;
                    let children = self.parse_arguments(name)?;
                    self.depth -= 1;
                    Ok(MrlNode::functor(name, children))
                } else {
                    Ok(MrlNode::bare(name))
                }
            }
        }
    }

    /// 解析 `(` 之后的参数列表，消费匹配的 `)`
    fn parse_arguments(&mut self, functor: &str) -> Result<Vec<MrlNode>, ParseError> {
        let mut children = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => {
                    return Err(ParseError::UnclosedParen {
                        line: self.line_number,
                        functor: functor.to_string(),
                    });
                }
                Some(',') | Some(')') => {
                    return Err(ParseError::EmptyArgument {
                        line: self.line_number,
                        position: self.pos,
                    });
                }
                Some(_) => {}
            }

            children.push(self.parse_node()?);

            self.skip_whitespace();
            let position = self.pos;
            match self.consume_char() {
                Some(',') => continue,
                Some(')') => return Ok(children),
                None => {
                    return Err(ParseError::UnclosedParen {
                        line: self.line_number,
                        functor: functor.to_string(),
                    });
                }
                Some(found) => {
                    return Err(ParseError::UnexpectedChar {
                        line: self.line_number,
                        position,
                        found,
                    });
                }
            }
        }
    }

    /// 解析标识符（调用方保证当前字符不是分隔符）
    fn parse_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if is_delimiter(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    /// 解析单引号字符串字面量，首尾空白被去掉
    fn parse_quoted(&mut self) -> Result<MrlNode, ParseError> {
        let open = self.pos;
        self.consume_char(); // 消费开始引号
        let content_start = self.pos;

        while let Some(c) = self.peek_char() {
            if c == '\'' && self.closes_quote(self.pos + c.len_utf8()) {
                let value = self.input[content_start..self.pos].trim();
                self.consume_char(); // 消费结束引号
                if value.is_empty() {
                    return Err(ParseError::EmptyLiteral {
                        line: self.line_number,
                        position: open,
                    });
                }
                return Ok(MrlNode::quoted(value));
            }
            self.pos += c.len_utf8();
        }

        Err(ParseError::UnclosedQuote {
            line: self.line_number,
            position: open,
        })
    }

    /// 位于 `after` 之前的引号是否是闭合引号
    fn closes_quote(&self, after: usize) -> bool {
        let rest = self.input[after..].trim_start();
        rest.is_empty() || rest.starts_with(',') || rest.starts_with(')')
    }
}
