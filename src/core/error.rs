//! 统一错误处理模块
//!
//! 粒子引擎只有少量可恢复错误：
//!
//! - **配置错误**: 容量、寿命、随机种子等在构造时立即失败，不做静默修正
//! - **输出缓冲区错误**: 渲染拷贝的目标内存不足
//!
//! 容量耗尽不是错误，`release` 会截断到剩余容量。

use crate::config::ConfigError;
use thiserror::Error;

/// 粒子引擎错误类型
#[derive(Error, Debug)]
pub enum ParticleError {
    #[error("Invalid capacity: particle buffer capacity must be greater than zero")]
    InvalidCapacity,

    #[error("Invalid seed: {0} (seed must be greater than zero)")]
    InvalidSeed(i32),

    #[error("Invalid term: {0}s (particle lifetime must be positive)")]
    InvalidTerm(f32),

    #[error("Invalid reclaim interval: {0}s (must be zero or positive)")]
    InvalidReclaimInterval(f32),

    #[error("Destination too small: required {required} elements, got {actual}")]
    DestinationTooSmall { required: usize, actual: usize },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 粒子引擎结果类型别名
pub type ParticleResult<T> = Result<T, ParticleError>;
