//! # 序列评测
//!
//! 逐行比较预测序列与 gold 序列：
//!
//! - 精确匹配：空白归一化后字符串相等，准确率 = 匹配行数 / 总行数
//! - token 重叠：所有行合并计算的词袋精确率 / 召回率 / F1，作为部分得分参考
//!
//! 显著性检验向量 `sigf`（匹配 1，否则 0）与 `sigf_neg`（匹配 1，否则 -1）
//! 逐行对应输入。

use std::collections::HashMap;

use crate::error::AlignmentError;
use crate::eval::{f1, format_score, ratio};

/// 序列评测结果
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceScore {
    /// 总行数
    pub total: usize,
    /// 精确匹配行数
    pub exact: usize,
    /// 精确匹配准确率
    pub accuracy: f64,
    /// token 重叠精确率
    pub token_precision: f64,
    /// token 重叠召回率
    pub token_recall: f64,
    /// token 重叠 F1
    pub token_f1: f64,
    /// 逐行 1 / 0
    pub sigf: Vec<i8>,
    /// 逐行 1 / -1
    pub sigf_neg: Vec<i8>,
}

impl SequenceScore {
    /// 不匹配的行号（从 1 开始）
    pub fn mismatches(&self) -> Vec<usize> {
        self.sigf
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit == 0)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// `.eval` 文件内容
    pub fn eval_report(&self) -> Vec<String> {
        vec![format_score(self.accuracy)]
    }

    /// `.sigf` 文件内容
    pub fn sigf_report(&self) -> Vec<String> {
        self.sigf.iter().map(i8::to_string).collect()
    }

    /// `.sigf_neg` 文件内容
    pub fn sigf_neg_report(&self) -> Vec<String> {
        self.sigf_neg.iter().map(i8::to_string).collect()
    }
}

/// 空白归一化：去掉首尾空白，内部连续空白折叠为一个空格
pub fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 两行之间的 token 词袋交集大小
fn token_overlap(suggested: &str, gold: &str) -> usize {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for token in gold.split_whitespace() {
        *remaining.entry(token).or_default() += 1;
    }

    let mut overlap = 0;
    for token in suggested.split_whitespace() {
        if let Some(count) = remaining.get_mut(token)
            && *count > 0
        {
            *count -= 1;
            overlap += 1;
        }
    }
    overlap
}

/// 逐行评测；两侧行数不同时返回 [`AlignmentError`]
pub fn evaluate_sequences<S, G>(suggested: &[S], gold: &[G]) -> Result<SequenceScore, AlignmentError>
where
    S: AsRef<str>,
    G: AsRef<str>,
{
    AlignmentError::check(suggested.len(), gold.len())?;

    let mut exact = 0;
    let mut overlap = 0;
    let mut suggested_tokens = 0;
    let mut gold_tokens = 0;
    let mut sigf = Vec::with_capacity(gold.len());
    let mut sigf_neg = Vec::with_capacity(gold.len());

    for (hyp, reference) in suggested.iter().zip(gold) {
        let hyp = normalize(hyp.as_ref());
        let reference = normalize(reference.as_ref());

        if hyp == reference {
            exact += 1;
            sigf.push(1);
            sigf_neg.push(1);
        } else {
            sigf.push(0);
            sigf_neg.push(-1);
        }

        overlap += token_overlap(&hyp, &reference);
        suggested_tokens += hyp.split_whitespace().count();
        gold_tokens += reference.split_whitespace().count();
    }

    let token_precision = ratio(overlap, suggested_tokens);
    let token_recall = ratio(overlap, gold_tokens);

    Ok(SequenceScore {
        total: gold.len(),
        exact,
        accuracy: ratio(exact, gold.len()),
        token_precision,
        token_recall,
        token_f1: f1(token_precision, token_recall),
        sigf,
        sigf_neg,
    })
}
