//! # 答案评测
//!
//! 两个输入文件逐行对应，每行是一个查询在外部地理数据服务上执行后的结果。
//! 本模块不执行查询，只解析并比较结果。
//!
//! ## 答案格式
//!
//! | 行内容 | 解析为 | 比较方式 |
//! |---|---|---|
//! | 空行、`empty`、含 `Warning::Issue in line` | [`Answer::NoAnswer`] | 与 NoAnswer 相等 |
//! | 整行是数字 | [`Answer::Number`] | 相对误差 1e-9 |
//! | JSON 数组 | [`Answer::Set`] | 元素集合相等 |
//! | JSON 对象 | [`Answer::Record`] | 值相等 |
//!
//! JSON 中的数值统一为浮点表示后再比较，`[1]` 与 `[1.0]` 相等。
//! | 其他 | [`Answer::Text`] | 空白归一化后相等 |
//!
//! ## 指标
//!
//! 预测行与 gold 相等计为 tp；不等且预测没有答案计为"无答案"；其余计为 fp。
//! recall = tp / 总行数，precision = tp / (tp + fp)。

use std::collections::BTreeSet;

use serde_json::{Number, Value};

use crate::error::AlignmentError;
use crate::eval::sequence::normalize;
use crate::eval::{f1, format_score, ratio, round_to};

/// 上游服务执行失败时写入的标记
pub const ISSUE_MARKER: &str = "Warning::Issue in line";

/// 数值比较的相对误差
const NUMBER_TOLERANCE: f64 = 1e-9;

/// 一行答案
#[derive(Debug, Clone)]
pub enum Answer {
    /// 没有答案
    NoAnswer,
    /// 单个数值（计数、距离、坐标分量）
    Number(f64),
    /// 结果集合，元素为紧凑 JSON 文本
    Set(BTreeSet<String>),
    /// 结构化记录
    Record(Value),
    /// 其他文本
    Text(String),
}

impl Answer {
    /// 解析一行答案
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == "empty" || trimmed.contains(ISSUE_MARKER) {
            return Self::NoAnswer;
        }

        if let Ok(number) = trimmed.parse::<f64>()
            && number.is_finite()
        {
            return Self::Number(number);
        }

        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            match serde_json::from_str::<Value>(trimmed) {
                Ok(Value::Array(items)) => {
                    return Self::Set(
                        items
                            .into_iter()
                            .map(|item| canonical(item).to_string())
                            .collect(),
                    );
                }
                Ok(record @ Value::Object(_)) => return Self::Record(canonical(record)),
                _ => {}
            }
        }

        Self::Text(normalize(trimmed))
    }

    pub fn is_no_answer(&self) -> bool {
        matches!(self, Self::NoAnswer)
    }

    /// 两个答案是否一致
    pub fn matches(&self, other: &Answer) -> bool {
        match (self, other) {
            (Self::NoAnswer, Self::NoAnswer) => true,
            (Self::Number(a), Self::Number(b)) => {
                (a - b).abs() <= NUMBER_TOLERANCE * a.abs().max(b.abs()).max(1.0)
            }
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// 数值统一为浮点表示，递归处理数组和对象
fn canonical(value: Value) -> Value {
    match value {
        Value::Number(n) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Number(n), Value::Number),
        Value::Array(items) => Value::Array(items.into_iter().map(canonical).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, field)| (key, canonical(field)))
                .collect(),
        ),
        other => other,
    }
}

/// 单行评测结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// 与 gold 一致
    Correct,
    /// 预测没有答案
    NoAnswer,
    /// 有答案但不一致
    Wrong,
}

impl AnswerOutcome {
    /// `.sigf` 文件中的一行
    pub fn sigf(self) -> &'static str {
        match self {
            Self::Correct => "1 1 1",
            Self::NoAnswer => "0 0 1",
            Self::Wrong => "0 1 1",
        }
    }
}

/// 答案评测结果
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerScore {
    pub total: usize,
    pub correct: usize,
    pub no_answer: usize,
    pub wrong: usize,
    pub recall: f64,
    pub precision: f64,
    pub f1: f64,
    /// 逐行结果
    pub outcomes: Vec<AnswerOutcome>,
}

impl AnswerScore {
    /// 标准输出上的主指标：F1 × 100，保留 8 位小数
    pub fn headline(&self) -> String {
        format_score(round_to(self.f1 * 100.0, 8))
    }

    /// `.eval` 文件内容
    pub fn eval_report(&self) -> Vec<String> {
        vec![format!(
            "r: {} p: {} f: {}",
            format_score(round_to(self.recall * 100.0, 2)),
            format_score(round_to(self.precision * 100.0, 2)),
            format_score(round_to(self.f1 * 100.0, 2)),
        )]
    }

    /// `.sigf` 文件内容
    pub fn sigf_report(&self) -> Vec<String> {
        self.outcomes.iter().map(|o| o.sigf().to_string()).collect()
    }

    /// 结果为 [`AnswerOutcome::Wrong`] 的行号（从 1 开始）
    pub fn mismatches(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| **outcome == AnswerOutcome::Wrong)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// 逐行评测；两侧行数不同时返回 [`AlignmentError`]
pub fn evaluate_answers<S, G>(suggested: &[S], gold: &[G]) -> Result<AnswerScore, AlignmentError>
where
    S: AsRef<str>,
    G: AsRef<str>,
{
    AlignmentError::check(suggested.len(), gold.len())?;

    let outcomes: Vec<AnswerOutcome> = suggested
        .iter()
        .zip(gold)
        .map(|(hyp, reference)| {
            let hyp = Answer::parse(hyp.as_ref());
            let reference = Answer::parse(reference.as_ref());
            if hyp.matches(&reference) {
                AnswerOutcome::Correct
            } else if hyp.is_no_answer() {
                AnswerOutcome::NoAnswer
            } else {
                AnswerOutcome::Wrong
            }
        })
        .collect();

    let count = |kind: AnswerOutcome| outcomes.iter().filter(|o| **o == kind).count();
    let correct = count(AnswerOutcome::Correct);
    let no_answer = count(AnswerOutcome::NoAnswer);
    let wrong = count(AnswerOutcome::Wrong);

    let recall = ratio(correct, gold.len());
    let precision = ratio(correct, correct + wrong);

    Ok(AnswerScore {
        total: gold.len(),
        correct,
        no_answer,
        wrong,
        recall,
        precision,
        f1: f1(precision, recall),
        outcomes,
    })
}
