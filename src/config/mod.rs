//! 统一配置系统
//!
//! 提供TOML/JSON配置文件、环境变量和验证

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod emitter;

pub use emitter::{EmitterConfig, StrategyKind};

use crate::impl_default;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 引擎主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 发射器配置
    #[serde(default)]
    pub emitter: EmitterConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    ///
    /// 无法解析的值被忽略。
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("PARTICLE_EMITTER_CAPACITY") {
            if let Ok(capacity) = val.parse() {
                self.emitter.capacity = capacity;
            }
        }
        if let Ok(val) = env::var("PARTICLE_EMITTER_TERM") {
            if let Ok(term) = val.parse() {
                self.emitter.term_seconds = term;
            }
        }
        if let Ok(val) = env::var("PARTICLE_RECLAIM_INTERVAL") {
            if let Ok(interval) = val.parse() {
                self.emitter.reclaim_interval = interval;
            }
        }
        if let Ok(val) = env::var("PARTICLE_WORKER_THREADS") {
            if let Ok(workers) = val.parse() {
                self.emitter.worker_threads = workers;
            }
        }
        if let Ok(val) = env::var("PARTICLE_SEED") {
            if let Ok(seed) = val.parse() {
                self.emitter.seed = seed;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.emitter.validate()
    }

    /// 加载配置文件，失败时使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let loaded = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        };

        match loaded {
            Ok(config) => {
                tracing::info!(target: "config", "Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::info!(target: "config", "Using default configuration ({})", e);
                Self::default()
            }
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 优先）
    pub level: LogLevel,

    /// 是否输出ANSI颜色
    pub ansi: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    ansi: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = EngineConfig::default();
        config.emitter.capacity = 512;
        config.emitter.strategy = StrategyKind::Sequential;
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = EngineConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_json_serialization() {
        let config = EngineConfig::default();
        let json_str = serde_json::to_string(&config).unwrap();
        let parsed = EngineConfig::from_json_str(&json_str).unwrap();
        assert_eq!(config.emitter.capacity, parsed.emitter.capacity);
        assert_eq!(config.logging.level, parsed.logging.level);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [emitter]
            capacity = 256
            term_seconds = 1.5
            strategy = "Sequential"

            [emitter.parameters.quantity]
            start = 5
            end = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.emitter.capacity, 256);
        assert_eq!(config.emitter.term_seconds, 1.5);
        assert_eq!(config.emitter.strategy, StrategyKind::Sequential);
        assert_eq!(config.emitter.parameters.quantity, 5..=8);
        assert_eq!(config.emitter.seed, 1);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            EngineConfig::from_toml_str("emitter = 3"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("particles.toml");
        let json_path = dir.path().join("particles.json");

        let mut config = EngineConfig::default();
        config.emitter.reclaim_interval = 0.25;
        config.save_toml(&toml_path).unwrap();
        config.save_json(&json_path).unwrap();

        assert_eq!(EngineConfig::from_toml_file(&toml_path).unwrap(), config);
        assert_eq!(EngineConfig::load_or_default(&json_path), config);

        let missing = EngineConfig::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(missing, EngineConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("PARTICLE_EMITTER_CAPACITY", "2048");
        env::set_var("PARTICLE_WORKER_THREADS", "not-a-number");

        let mut config = EngineConfig::default();
        config.apply_env_overrides();

        env::remove_var("PARTICLE_EMITTER_CAPACITY");
        env::remove_var("PARTICLE_WORKER_THREADS");

        assert_eq!(config.emitter.capacity, 2048);
        assert_eq!(config.emitter.worker_threads, 0);
    }
}
