//! `functionalise`：线性 token 文件 → 括号形式文件

use std::path::Path;

use nlmaps_mrl::{AlignmentError, PassThrough, functionalise_batch};
use tracing::info;

use crate::commands::{BatchSummary, log_diagnostics, read_corpus, write_corpus};
use crate::config::ToolConfig;

/// 源句文件对（原始，词干化）
#[derive(Debug, Clone, Copy)]
pub struct SourceFiles<'a> {
    pub non_stemmed: &'a Path,
    pub stemmed: &'a Path,
}

/// 读取源句文件，两者必须与输入逐行对应
fn load_pass_through(files: SourceFiles<'_>, expected: usize) -> anyhow::Result<Vec<PassThrough>> {
    let non_stemmed = read_corpus(files.non_stemmed)?;
    let stemmed = read_corpus(files.stemmed)?;
    AlignmentError::check(non_stemmed.len(), expected)?;
    AlignmentError::check(stemmed.len(), expected)?;

    Ok(non_stemmed
        .iter()
        .zip(&stemmed)
        .map(|(original, stem)| PassThrough::new(original, stem))
        .collect())
}

/// 还原整个文件
pub fn run(
    input: &Path,
    output: &Path,
    sources: Option<SourceFiles<'_>>,
    config: &ToolConfig,
) -> anyhow::Result<BatchSummary> {
    let lines = read_corpus(input)?;

    let pass_through = match sources {
        Some(files) => Some(load_pass_through(files, lines.len())?),
        None => None,
    };

    let source = input.display().to_string();
    let batch = functionalise_batch(
        &source,
        &lines,
        &config.functionalise_options(),
        pass_through.as_deref(),
        config.on_line_error,
    );
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
        "还原完成"
    );
    Ok(summary)
}
