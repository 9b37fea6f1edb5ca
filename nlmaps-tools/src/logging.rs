//! 日志初始化：tracing-subscriber fmt 输出到 stderr，stdout 只留给结果。

use tracing::Level;

use crate::config::ToolConfig;

/// 按配置和 `-v` 次数确定日志级别
pub fn level_for(config: &ToolConfig, verbose: u8) -> Level {
    match verbose {
        0 => config.level(),
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// 初始化全局 subscriber，重复调用时忽略
pub fn init(config: &ToolConfig, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(config, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        let config = ToolConfig::default();
        assert_eq!(level_for(&config, 0), Level::WARN);
        assert_eq!(level_for(&config, 1), Level::INFO);
        assert_eq!(level_for(&config, 3), Level::DEBUG);
    }
}
