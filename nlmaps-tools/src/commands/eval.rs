//! `eval`：查询执行结果文件与 gold 答案文件逐行比较

use std::path::Path;

use nlmaps_mrl::{AnswerScore, evaluate_answers};
use tracing::{debug, info};

use crate::commands::{read_corpus, sidecar_path, write_corpus};
use crate::config::ToolConfig;

/// 评测答案文件；开启报告时在预测文件旁写出 `.eval` / `.sigf`
pub fn run(input: &Path, gold: &Path, config: &ToolConfig) -> anyhow::Result<AnswerScore> {
    let suggested = read_corpus(input)?;
    let gold_lines = read_corpus(gold)?;

    let score = evaluate_answers(&suggested, &gold_lines)?;

    info!(
        total = score.total,
        correct = score.correct,
        no_answer = score.no_answer,
        wrong = score.wrong,
        "答案评测完成"
    );
    debug!(mismatches = ?score.mismatches(), "答案不一致的行");

    if config.write_reports {
        write_corpus(&sidecar_path(input, "eval"), &score.eval_report())?;
        write_corpus(&sidecar_path(input, "sigf"), &score.sigf_report())?;
    }

    Ok(score)
}
