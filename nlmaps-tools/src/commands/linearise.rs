//! `linearise`：括号形式文件 → 线性 token 文件

use std::path::Path;

use nlmaps_mrl::linearise_batch;
use tracing::info;

use crate::commands::{BatchSummary, log_diagnostics, read_corpus, write_corpus};
use crate::config::ToolConfig;

/// 线性化整个文件
pub fn run(input: &Path, output: &Path, config: &ToolConfig) -> anyhow::Result<BatchSummary> {
    let lines = read_corpus(input)?;

    let source = input.display().to_string();
    let batch = linearise_batch(&source, &lines, config.dialect, config.on_line_error);
    log_diagnostics(&batch.diagnostics);

    write_corpus(output, &batch.lines)?;

    let summary = BatchSummary {
        total: lines.len(),
        succeeded: batch.succeeded,
        failed: batch.failed,
    };
    info!(
        dialect = %config.dialect,
        total = summary.total,
        failed = summary.failed,
        "线性化完成"
    );
    Ok(summary)
}
