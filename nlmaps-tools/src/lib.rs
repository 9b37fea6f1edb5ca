//! # NLmaps Tools
//!
//! NLmaps MRL 命令行工具 - 线性化、还原、序列评测、答案评测。
//!
//! ## 用法
//!
//! ```bash
//! # 在项目根目录使用 cargo 运行
//! cargo run --bin linearise -- -i dev.mrl -o dev.lin
//! cargo run --bin functionalise -- -i dev.hyp.lin -o dev.hyp.mrl --insert-missing-at
//! cargo run --bin functionalise -- -i dev.hyp.lin -o dev.hyp.mrl \
//!     --non-stemmed dev.en --stemmed dev.stem.en
//! cargo run --bin seq_eval -- -i dev.hyp.lin -g dev.lin
//! cargo run --bin eval -- -i dev.hyp.answer -g dev.gold.answer
//!
//! # 共用参数
//! linearise -i dev.mrl -o dev.lin --config nlmaps.json -vv
//! ```
//!
//! 结果写入输出文件（评测入口在标准输出打印主指标），日志写到标准错误。
//! 成功退出码为 0（个别行失败只记录警告），文件读写失败、行数不对齐或配置错误时为 1，
//! 命令行用法错误由 clap 处理。

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use config::{ConfigError, ToolConfig};
