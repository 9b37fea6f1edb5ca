//! # CLI 模块
//!
//! 四个入口的命令行参数定义。每个入口都接受输入文件参数和输出 / gold 文件参数，
//! 以及共用的 `--config` 与 `-v`。

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, CommandFactory, FromArgMatches, Parser};
use nlmaps_mrl::{Dialect, OnLineError};

use crate::config::ToolConfig;

/// 共用参数
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// JSON 配置文件
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 日志详细程度（-v info，-vv debug）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// 读取配置文件（未指定时为默认配置）
    pub fn load_config(&self) -> anyhow::Result<ToolConfig> {
        ToolConfig::load(self.config.as_deref()).context("加载配置失败")
    }
}

/// 括号形式 → 线性 token
#[derive(Debug, Clone, Parser)]
#[command(name = "linearise")]
#[command(about = "把括号形式的 MRL 逐行线性化为 name@arity token 序列")]
#[command(version)]
pub struct LineariseCli {
    /// 输入文件（每行一个括号表达式）
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出文件（每行一个 token 序列）
    #[arg(short, long)]
    pub output: PathBuf,

    /// 叶子标注约定：plain / nlmaps
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// 跳过无法解析的行（默认输出空行以保持对齐）
    #[arg(long)]
    pub skip_invalid: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl LineariseCli {
    /// 命令行参数覆盖配置
    pub fn apply(&self, config: &mut ToolConfig) {
        apply_dialect(config, self.dialect);
        apply_skip_invalid(config, self.skip_invalid);
    }
}

/// 线性 token → 括号形式
#[derive(Debug, Clone, Parser)]
#[command(name = "functionalise")]
#[command(about = "把 name@arity token 序列逐行还原为括号形式的 MRL")]
#[command(version)]
pub struct FunctionaliseCli {
    /// 输入文件（每行一个 token 序列）
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出文件（每行一个括号表达式，无法还原的行为空）
    #[arg(short, long)]
    pub output: PathBuf,

    /// 叶子标注约定：plain / nlmaps
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// 给缺少 `@` 的 token 补 `@s`
    #[arg(long)]
    pub insert_missing_at: bool,

    /// 原始源句文件，与输入逐行对应（需同时指定 --stemmed）
    #[arg(long, requires = "stemmed")]
    pub non_stemmed: Option<PathBuf>,

    /// 词干化源句文件，与输入逐行对应（需同时指定 --non-stemmed）
    #[arg(long, requires = "non_stemmed")]
    pub stemmed: Option<PathBuf>,

    /// 跳过无法还原的行（默认输出空行以保持对齐）
    #[arg(long)]
    pub skip_invalid: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl FunctionaliseCli {
    /// 命令行参数覆盖配置
    pub fn apply(&self, config: &mut ToolConfig) {
        apply_dialect(config, self.dialect);
        apply_skip_invalid(config, self.skip_invalid);
        if self.insert_missing_at {
            config.insert_missing_at = true;
        }
    }
}

/// 评测入口共用的参数
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct EvalCli {
    /// 预测文件
    #[arg(short, long)]
    pub input: PathBuf,

    /// gold 文件
    #[arg(short, long)]
    pub gold: PathBuf,

    /// 不写出 .eval / .sigf 报告文件
    #[arg(long)]
    pub no_reports: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl EvalCli {
    /// 以指定的程序名和说明解析命令行，出错时打印用法并退出
    pub fn parse_named(name: &'static str, about: &'static str) -> Self {
        let matches = Self::command().name(name).about(about).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// 命令行参数覆盖配置
    pub fn apply(&self, config: &mut ToolConfig) {
        if self.no_reports {
            config.write_reports = false;
        }
    }
}

fn apply_dialect(config: &mut ToolConfig, dialect: Option<Dialect>) {
    if let Some(dialect) = dialect {
        config.dialect = dialect;
    }
}

fn apply_skip_invalid(config: &mut ToolConfig, skip_invalid: bool) {
    if skip_invalid {
        config.on_line_error = OnLineError::Skip;
    }
}
