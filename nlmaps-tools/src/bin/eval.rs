//! 答案评测：标准输出打印 F1 × 100

use std::process::ExitCode;

use nlmaps_tools::cli::EvalCli;
use nlmaps_tools::{commands, logging};

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("❌ eval: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = EvalCli::parse_named("eval", "逐行比较查询执行结果与 gold 答案，输出 F1");
    let mut config = cli.common.load_config()?;
    cli.apply(&mut config);
    logging::init(&config, cli.common.verbose);

    let score = commands::eval::run(&cli.input, &cli.gold, &config)?;
    println!("{}", score.headline());
    Ok(())
}
