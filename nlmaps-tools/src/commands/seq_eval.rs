//! `seq_eval`：预测序列文件与 gold 序列文件逐行比较

use std::path::Path;

use nlmaps_mrl::{SequenceScore, evaluate_sequences};
use nlmaps_mrl::eval::format_score;
use tracing::{debug, info};

use crate::commands::{read_corpus, sidecar_path, write_corpus};
use crate::config::ToolConfig;

/// 评测序列文件；开启报告时在预测文件旁写出 `.eval` / `.sigf` / `.sigf_neg`
pub fn run(input: &Path, gold: &Path, config: &ToolConfig) -> anyhow::Result<SequenceScore> {
    let suggested = read_corpus(input)?;
    let gold_lines = read_corpus(gold)?;

    let score = evaluate_sequences(&suggested, &gold_lines)?;

    info!(
        total = score.total,
        exact = score.exact,
        accuracy = %format_score(score.accuracy),
        token_f1 = %format_score(score.token_f1),
        "序列评测完成"
    );
    debug!(mismatches = ?score.mismatches(), "不匹配的行");

    if config.write_reports {
        write_corpus(&sidecar_path(input, "eval"), &score.eval_report())?;
        write_corpus(&sidecar_path(input, "sigf"), &score.sigf_report())?;
        write_corpus(&sidecar_path(input, "sigf_neg"), &score.sigf_neg_report())?;
    }

    Ok(score)
}
