//! 线性 token 序列 → 括号形式 MRL

use std::process::ExitCode;

use clap::Parser;
use nlmaps_tools::cli::FunctionaliseCli;
use nlmaps_tools::commands::functionalise::SourceFiles;
use nlmaps_tools::{commands, logging};

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("❌ functionalise: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = FunctionaliseCli::parse();
    let mut config = cli.common.load_config()?;
    cli.apply(&mut config);
    logging::init(&config, cli.common.verbose);

    // clap 保证两者同时出现
    let sources = match (cli.non_stemmed.as_deref(), cli.stemmed.as_deref()) {
        (Some(non_stemmed), Some(stemmed)) => Some(SourceFiles {
            non_stemmed,
            stemmed,
        }),
        _ => None,
    };

    commands::functionalise::run(&cli.input, &cli.output, sources, &config)?;
    Ok(())
}
