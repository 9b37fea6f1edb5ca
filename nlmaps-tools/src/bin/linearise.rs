//! 括号形式 MRL → 线性 token 序列

use std::process::ExitCode;

use clap::Parser;
use nlmaps_tools::cli::LineariseCli;
use nlmaps_tools::{commands, logging};

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("❌ linearise: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = LineariseCli::parse();
    let mut config = cli.common.load_config()?;
    cli.apply(&mut config);
    logging::init(&config, cli.common.verbose);

    commands::linearise::run(&cli.input, &cli.output, &config)?;
    Ok(())
}
