//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与语料检查命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-mrl`: 运行 nlmaps-mrl 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `corpus-check`: 检查 `.mrl` 语料能否无损线性化并还原

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use nlmaps_mrl::{
    Diagnostic, DiagnosticResult, Dialect, FunctionaliseOptions, corpus, functionalise, linearise,
    linear::join_tokens, parse_mrl,
};
use walkdir::WalkDir;

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    match cmd.status() {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        "cov-mrl" => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "nlmaps-mrl", "--html"]);
            run("cargo llvm-cov -p nlmaps-mrl --html", &mut cov)?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "cov-workspace" => {
            ensure_cargo_llvm_cov_available()?;

            // 排除 xtask，只统计库和命令行工具
            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "--workspace", "--exclude", "xtask", "--html"]);
            run(
                "cargo llvm-cov --workspace --exclude xtask --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "corpus-check" => {
            let path = args.next();
            corpus_check(path.as_deref())?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  cov-mrl         运行 nlmaps-mrl 覆盖率报告
  cov-workspace   运行 workspace 覆盖率报告
  corpus-check    检查 MRL 语料

CORPUS-CHECK:
  cargo xtask corpus-check [path]

  不带参数：检查 data/ 下所有 .mrl 文件
  带路径参数：检查指定文件或目录

  检查内容：
    - 每行能否解析为括号表达式
    - 线性化后能否还原为同一棵树
"#
    );
}

//=============================================================================
// corpus-check 命令实现
//=============================================================================

/// 默认语料目录（相对于 workspace root）
const DEFAULT_CORPUS_DIR: &str = "data";

/// 语料检查结果
struct CorpusCheckResult {
    /// 检查的文件数量
    files_checked: usize,
    /// 检查的行数
    lines_checked: usize,
    /// 诊断结果
    diagnostics: DiagnosticResult,
}

/// 执行语料检查
fn corpus_check(path: Option<&str>) -> anyhow::Result<()> {
    let files = match path {
        Some(p) => {
            let path = PathBuf::from(p);
            if path.is_file() {
                vec![path]
            } else if path.is_dir() {
                collect_corpus_files(&path)
            } else {
                anyhow::bail!("路径不存在: {}", p);
            }
        }
        None => {
            let dir = Path::new(DEFAULT_CORPUS_DIR);
            if !dir.exists() {
                anyhow::bail!(
                    "默认语料目录不存在: {}\n请在 workspace 根目录运行，或指定语料路径",
                    dir.display()
                );
            }
            collect_corpus_files(dir)
        }
    };

    if files.is_empty() {
        eprintln!("未找到语料文件（.mrl）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个语料文件...\n", files.len());

    let mut result = CorpusCheckResult {
        files_checked: 0,
        lines_checked: 0,
        diagnostics: DiagnosticResult::new(),
    };

    for file in &files {
        let diagnostics = check_corpus_file(file, &mut result);
        result.diagnostics.merge(diagnostics);
    }

    print_check_result(&result);

    if result.diagnostics.has_errors() {
        anyhow::bail!("语料检查发现错误");
    }

    Ok(())
}

/// 收集目录下的所有 `.mrl` 文件
fn collect_corpus_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "mrl"))
        .collect();
    files.sort();
    files
}

/// 检查单个语料文件，返回该文件的诊断
fn check_corpus_file(file: &Path, result: &mut CorpusCheckResult) -> DiagnosticResult {
    let source = file.display().to_string();
    let mut diagnostics = DiagnosticResult::new();
    result.files_checked += 1;

    let lines = match corpus::read_lines(file) {
        Ok(lines) => lines,
        Err(e) => {
            diagnostics.push(Diagnostic::error(&source, e.to_string()));
            return diagnostics;
        }
    };

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        result.lines_checked += 1;
        if let Some(diag) = check_line(&source, line, index + 1) {
            diagnostics.push(diag);
        }
    }
    diagnostics
}

/// 解析 → 线性化 → 还原，结果与原树不同时给出诊断
fn check_line(source: &str, line: &str, line_number: usize) -> Option<Diagnostic> {
    let dialect = Dialect::NlMaps;
    let options = FunctionaliseOptions {
        dialect,
        ..FunctionaliseOptions::default()
    };

    let tree = match parse_mrl(line, line_number) {
        Ok(tree) => tree,
        Err(e) => {
            return Some(
                Diagnostic::error(source, e.to_string())
                    .with_line(line_number)
                    .with_detail(line),
            );
        }
    };

    let tokens = join_tokens(&linearise(&tree, dialect));
    match functionalise(&tokens, line_number, &options, None) {
        Ok(restored) if restored == tree => None,
        Ok(restored) => Some(
            Diagnostic::warn(source, format!("还原结果与原表达式不同: {restored}"))
                .with_line(line_number)
                .with_detail(line),
        ),
        Err(e) => Some(
            Diagnostic::error(source, e.to_string())
                .with_line(line_number)
                .with_detail(tokens),
        ),
    }
}

/// 输出检查结果
fn print_check_result(result: &CorpusCheckResult) {
    eprintln!("─────────────────────────────────────────────────────");
    eprintln!(
        "检查完成: {} 个文件, {} 行",
        result.files_checked, result.lines_checked
    );
    eprintln!();

    if !result.diagnostics.is_empty() {
        for diag in &result.diagnostics.diagnostics {
            eprintln!("{}", diag);
        }
        eprintln!();
    }

    let error_count = result.diagnostics.error_count();
    let warn_count = result.diagnostics.warn_count();

    if error_count > 0 {
        eprintln!("❌ {} 个错误, {} 个警告", error_count, warn_count);
    } else if warn_count > 0 {
        eprintln!("⚠️  0 个错误, {} 个警告", warn_count);
    } else {
        eprintln!("✅ 检查通过，无错误");
    }
}
