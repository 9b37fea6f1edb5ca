//! # 还原（functionalise）
//!
//! 从左到右扫描 token，用显式的帧栈记录每个尚未收齐子节点的函子：
//!
//! - `name@k`（k > 0）压入一帧，等待 k 个子树
//! - `value@s` 或 `name@0` 是一棵完整子树，交给栈顶帧
//! - 帧收齐子树后弹出，自身作为完整子树交给下一层
//!
//! 栈空时得到的子树就是根。序列耗尽时栈非空即为下溢，根完成后仍有 token 即为多余。
//! 栈深超过 [`MAX_DEPTH`] 时报错。

use serde::{Deserialize, Serialize};

use crate::error::{MalformedSequenceError, MrlResult};
use crate::linear::escape::decode_value;
use crate::linear::{Arity, BatchOutput, Dialect, LinearToken, OnLineError, run_batch};
use crate::mrl::{MAX_DEPTH, MrlNode};

/// 还原选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionaliseOptions {
    /// 叶子标注约定
    #[serde(default)]
    pub dialect: Dialect,

    /// 不是 `symbol@arity` 形式的 token 视为标量，补上 `@s`
    #[serde(default)]
    pub insert_missing_at: bool,
}

/// 源句的词形还原对照，用于恢复模型直接拷贝到输出中的词
///
/// 输出中不带 `@` 的 token 如果等于某个词干化后的源词，
/// 替换为对应的原始源词并标为 `@s`。两侧词数不同时不做替换。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassThrough {
    non_stemmed: Vec<String>,
    stemmed: Vec<String>,
}

impl PassThrough {
    pub fn new(non_stemmed: &str, stemmed: &str) -> Self {
        Self {
            non_stemmed: non_stemmed.split(' ').map(str::to_string).collect(),
            stemmed: stemmed.split(' ').map(str::to_string).collect(),
        }
    }

    /// 还原单个 token；不适用时返回 `None`
    fn restore(&self, token: &str) -> Option<String> {
        if token.contains('@') || self.non_stemmed.len() != self.stemmed.len() {
            return None;
        }
        // 同一词干出现多次时取最后一个
        let position = self.stemmed.iter().rposition(|word| word == token)?;
        Some(format!("{}@s", self.non_stemmed[position]))
    }
}

/// 等待子节点的函子
struct Frame {
    name: String,
    expected: usize,
    children: Vec<MrlNode>,
}

impl Frame {
    fn missing(&self) -> usize {
        self.expected - self.children.len()
    }
}

/// 把一行线性 token 还原为表达式树
pub fn functionalise(
    line: &str,
    line_number: usize,
    options: &FunctionaliseOptions,
    pass_through: Option<&PassThrough>,
) -> Result<MrlNode, MalformedSequenceError> {
    let tokens = prepare_tokens(line, options, pass_through);
    if tokens.is_empty() {
        return Err(MalformedSequenceError::Empty { line: line_number });
    }

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<MrlNode> = None;

    for (index, raw) in tokens.iter().enumerate() {
        if root.is_some() {
            return Err(MalformedSequenceError::TrailingTokens {
                line: line_number,
                index: index + 1,
                token: raw.clone(),
            });
        }

        let token =
            LinearToken::parse(raw).ok_or_else(|| MalformedSequenceError::InvalidToken {
                line: line_number,
                index: index + 1,
                token: raw.clone(),
            })?;

        let node = match token.arity {
            Arity::Functor(expected) if expected > 0 => {
                if stack.len() == MAX_DEPTH {
                    return Err(MalformedSequenceError::TooDeep {
                        line: line_number,
                        index: index + 1,
                        depth: MAX_DEPTH,
                    });
                }
                // 元数来自输入，不能据此预分配
                stack.push(Frame {
                    name: token.symbol,
                    expected,
                    children: Vec::new(),
                });
                continue;
            }
            Arity::Functor(_) => {
                let is_key = stack.last().is_some_and(|frame| {
                    options
                        .dialect
                        .quotes_key(&frame.name, frame.children.len())
                });
                if is_key {
                    MrlNode::quoted(decode_value(&token.symbol))
                } else {
                    MrlNode::bare(token.symbol)
                }
            }
            Arity::Scalar => MrlNode::quoted(decode_value(&token.symbol)),
        };

        root = attach(&mut stack, node);
    }

    if let Some(frame) = stack.last() {
        return Err(MalformedSequenceError::Underflow {
            line: line_number,
            functor: frame.name.clone(),
            missing: stack
                .iter()
                .map(Frame::missing)
                .fold(0, usize::saturating_add),
        });
    }

    root.ok_or(MalformedSequenceError::Empty { line: line_number })
}

/// 把一棵完整子树交给栈顶帧，逐层归并；栈清空时返回根
fn attach(stack: &mut Vec<Frame>, mut node: MrlNode) -> Option<MrlNode> {
    while let Some(mut frame) = stack.pop() {
        frame.children.push(node);
        if frame.children.len() < frame.expected {
            stack.push(frame);
            return None;
        }
        node = MrlNode::functor(frame.name, frame.children);
    }
    Some(node)
}

/// 预处理：`<topx>` 标记、源词还原、补 `@s`
fn prepare_tokens(
    line: &str,
    options: &FunctionaliseOptions,
    pass_through: Option<&PassThrough>,
) -> Vec<String> {
    let line = line.replace("<topx>", "").replace("</topx>", "@0");

    line.split_whitespace()
        .map(|token| {
            let token = pass_through
                .and_then(|p| p.restore(token))
                .unwrap_or_else(|| token.to_string());
            if options.insert_missing_at && LinearToken::parse(&token).is_none() {
                format!("{}@s", token)
            } else {
                token
            }
        })
        .collect()
}

/// 还原一行并渲染为括号形式
pub fn functionalise_line(
    line: &str,
    line_number: usize,
    options: &FunctionaliseOptions,
    pass_through: Option<&PassThrough>,
) -> MrlResult<String> {
    let node = functionalise(line, line_number, options, pass_through)?;
    Ok(node.to_string())
}

/// 逐行还原，失败行记录诊断后继续
///
/// `sources` 与 `lines` 逐行对应，缺失的行不做源词还原。
pub fn functionalise_batch<S: AsRef<str>>(
    source: &str,
    lines: &[S],
    options: &FunctionaliseOptions,
    sources: Option<&[PassThrough]>,
    on_error: OnLineError,
) -> BatchOutput {
    run_batch(source, lines, on_error, |line, line_number| {
        let pass_through = sources.and_then(|s| s.get(line_number - 1));
        functionalise_line(line, line_number, options, pass_through)
    })
}
