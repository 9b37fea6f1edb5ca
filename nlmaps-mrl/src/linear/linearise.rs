//! # 线性化
//!
//! 先序遍历表达式树：函子 token 先于其子节点输出，元数即子节点个数。

use crate::error::MrlResult;
use crate::linear::escape::encode_value;
use crate::linear::{BatchOutput, Dialect, LinearToken, OnLineError, join_tokens, run_batch};
use crate::mrl::{LeafKind, MrlNode, parse_mrl};

/// 把表达式树展开为先序 token 序列
pub fn linearise(node: &MrlNode, dialect: Dialect) -> Vec<LinearToken> {
    let mut tokens = Vec::with_capacity(node.node_count());
    emit(node, None, dialect, &mut tokens);
    tokens
}

/// `position`：父函子名和本节点在父节点中的下标
fn emit(
    node: &MrlNode,
    position: Option<(&str, usize)>,
    dialect: Dialect,
    out: &mut Vec<LinearToken>,
) {
    match node {
        MrlNode::Functor { name, children } => {
            out.push(LinearToken::functor(name.as_str(), children.len()));
            for (index, child) in children.iter().enumerate() {
                emit(child, Some((name.as_str(), index)), dialect, out);
            }
        }
        MrlNode::Leaf {
            value,
            kind: LeafKind::Bare,
        } => out.push(LinearToken::functor(value.as_str(), 0)),
        MrlNode::Leaf {
            value,
            kind: LeafKind::Quoted,
        } => {
            let symbol = encode_value(value);
            let is_key =
                position.is_some_and(|(parent, index)| dialect.emits_key(parent, index));
            if is_key {
                out.push(LinearToken::functor(symbol, 0));
            } else {
                out.push(LinearToken::scalar(symbol));
            }
        }
    }
}

/// 解析一行括号表达式并输出以空格分隔的 token 行
pub fn linearise_line(input: &str, line_number: usize, dialect: Dialect) -> MrlResult<String> {
    let node = parse_mrl(input, line_number)?;
    Ok(join_tokens(&linearise(&node, dialect)))
}

/// 逐行线性化，失败行记录诊断后继续
pub fn linearise_batch<S: AsRef<str>>(
    source: &str,
    lines: &[S],
    dialect: Dialect,
    on_error: OnLineError,
) -> BatchOutput {
    run_batch(source, lines, on_error, |line, line_number| {
        linearise_line(line, line_number, dialect)
    })
}
