use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::particles::{BlendMode, ReleaseParameters};
use serde::{Deserialize, Serialize};

/// 修改器执行策略选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// 顺序执行
    Sequential,
    /// 分区并行执行
    Parallel,
}

/// 发射器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// 缓冲区容量（最大粒子数）
    pub capacity: usize,

    /// 粒子寿命（秒）
    pub term_seconds: f32,

    /// 回收检查间隔（秒），0 表示每帧检查
    pub reclaim_interval: f32,

    /// 随机种子，必须大于零
    pub seed: i32,

    /// 混合模式
    pub blend_mode: BlendMode,

    /// 执行策略
    pub strategy: StrategyKind,

    /// 并行工作线程数（0表示自动检测）
    pub worker_threads: usize,

    /// 释放参数
    pub parameters: ReleaseParameters,
}

impl_default!(EmitterConfig {
    capacity: 10000,
    term_seconds: 2.0,
    reclaim_interval: 0.0,
    seed: 1,
    blend_mode: BlendMode::Alpha,
    strategy: StrategyKind::Parallel,
    worker_threads: 0,
    parameters: ReleaseParameters::default(),
});

impl EmitterConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "Emitter capacity must be greater than zero".to_string(),
            ));
        }
        if !(self.term_seconds > 0.0) || !self.term_seconds.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "Invalid particle term: {}",
                self.term_seconds
            )));
        }
        if !(self.reclaim_interval >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid reclaim interval: {}",
                self.reclaim_interval
            )));
        }
        if self.seed < 1 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid seed: {}",
                self.seed
            )));
        }
        if let Some(name) = self.parameters.invalid_range() {
            return Err(ConfigError::ValidationError(format!(
                "Invalid release range: {}",
                name
            )));
        }
        Ok(())
    }
}
