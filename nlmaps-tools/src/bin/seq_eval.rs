//! 序列评测：标准输出打印精确匹配准确率

use std::process::ExitCode;

use nlmaps_mrl::eval::format_score;
use nlmaps_tools::cli::EvalCli;
use nlmaps_tools::{commands, logging};

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("❌ seq_eval: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = EvalCli::parse_named("seq_eval", "逐行比较预测序列与 gold 序列，输出精确匹配准确率");
    let mut config = cli.common.load_config()?;
    cli.apply(&mut config);
    logging::init(&config, cli.common.verbose);

    let score = commands::seq_eval::run(&cli.input, &cli.gold, &config)?;
    println!("{}", format_score(score.accuracy));
    Ok(())
}
