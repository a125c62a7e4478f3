//! 日志初始化
//!
//! 基于 `tracing-subscriber` 的 fmt 输出，`RUST_LOG` 优先于配置中的级别。

use crate::config::{LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

impl LogLevel {
    /// 转换为 `EnvFilter` 指令
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 初始化日志系统
///
/// 重复调用是安全的：已有全局订阅者时直接返回 `false`。
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(target: "particles", "Logging initialized at level {:?}", config.level);
    }
    installed
}
