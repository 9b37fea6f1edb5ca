//! # Eval 模块
//!
//! 预测结果与 gold 逐行对齐比较。
//!
//! - [`sequence`]：线性 token 序列的精确匹配与 token 重叠
//! - [`answer`]：外部地理数据服务执行查询后得到的答案

pub mod answer;
pub mod sequence;

pub use answer::{Answer, AnswerOutcome, AnswerScore, evaluate_answers};
pub use sequence::{SequenceScore, evaluate_sequences};

/// `numerator / denominator`，分母为 0 时返回 0
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// 精确率与召回率的调和平均
pub fn f1(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

/// 四舍五入到 `places` 位小数
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// 分数的文本形式，整数值保留一位小数（`1.0`、`0.5`、`66.67`）
pub fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_f1() {
        assert_eq!(ratio(1, 4), 0.25);
        assert_eq!(ratio(3, 0), 0.0);
        assert_eq!(f1(0.0, 0.0), 0.0);
        assert!((f1(1.0, 0.5) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(round_to(200.0 / 3.0, 2)), "66.67");
    }
}
