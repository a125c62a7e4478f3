//! 粒子发射器
//!
//! 发射器独占一个粒子缓冲区，借用一个发射形状，并持有修改器管线。
//! 每帧调用零到多次 [`Emitter::trigger`] 和一次 [`Emitter::update`]：
//!
//! ```text
//! trigger(pos) ──► release ──► 初始化新槽位（位置/速度/颜色/...）
//!
//! update(dt)   ──► 推进时钟
//!              ──► 回收过期前缀（按 reclaim_interval 节流）
//!              ──► 刷新归一化年龄
//!              ──► 按执行策略运行修改器
//! ```

use super::buffer::{ParticleBuffer, ParticleField};
use super::modifier::ModifierCollection;
use super::parameters::{BlendMode, ReleaseParameters};
use super::profile::Profile;
use super::strategy::ModifierExecutionStrategy;
use crate::config::{EmitterConfig, StrategyKind};
use crate::core::error::{ParticleError, ParticleResult};
use crate::math::FastRand;
use glam::Vec2;
use std::time::Duration;

/// 发射器统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitterStats {
    /// 当前活跃粒子数
    pub active: usize,
    /// 缓冲区容量
    pub capacity: usize,
    /// 累计释放数
    pub total_released: u64,
    /// 累计回收数
    pub total_reclaimed: u64,
}

/// 粒子发射器
pub struct Emitter<'p> {
    /// 修改器管线，帧与帧之间可以修改
    pub modifiers: ModifierCollection,
    /// 修改器执行策略
    pub strategy: ModifierExecutionStrategy,
    /// 释放参数
    pub parameters: ReleaseParameters,
    /// 混合模式（原样交给渲染端）
    pub blend_mode: BlendMode,

    reclaim_interval: f32,
    term: f32,
    total_seconds: f32,
    seconds_since_last_reclaim: f32,
    buffer: ParticleBuffer,
    profile: &'p dyn Profile,
    rng: FastRand,
    total_released: u64,
    total_reclaimed: u64,
}

impl<'p> Emitter<'p> {
    /// 创建发射器
    ///
    /// # 错误
    ///
    /// 容量为零或寿命为零时返回错误。
    pub fn new(capacity: usize, term: Duration, profile: &'p dyn Profile) -> ParticleResult<Self> {
        let term_seconds = term.as_secs_f32();
        if term_seconds <= 0.0 {
            return Err(ParticleError::InvalidTerm(term_seconds));
        }

        let buffer = ParticleBuffer::new(capacity)?;

        tracing::debug!(
            target: "emitter",
            "Emitter created: capacity {}, term {}s",
            capacity,
            term_seconds
        );

        Ok(Self {
            modifiers: ModifierCollection::new(),
            strategy: ModifierExecutionStrategy::default(),
            parameters: ReleaseParameters::default(),
            blend_mode: BlendMode::default(),
            reclaim_interval: 0.0,
            term: term_seconds,
            total_seconds: 0.0,
            seconds_since_last_reclaim: 0.0,
            buffer,
            profile,
            rng: FastRand::default(),
            total_released: 0,
            total_reclaimed: 0,
        })
    }

    /// 按配置创建发射器
    pub fn from_config(config: &EmitterConfig, profile: &'p dyn Profile) -> ParticleResult<Self> {
        config.validate()?;

        let term = Duration::try_from_secs_f32(config.term_seconds)
            .map_err(|_| ParticleError::InvalidTerm(config.term_seconds))?;
        let strategy = match config.strategy {
            StrategyKind::Sequential => ModifierExecutionStrategy::Sequential,
            StrategyKind::Parallel => ModifierExecutionStrategy::Parallel {
                workers: config.worker_threads,
            },
        };

        Ok(Self::new(config.capacity, term, profile)?
            .with_rng(FastRand::new(config.seed)?)
            .with_strategy(strategy)
            .with_parameters(config.parameters.clone())
            .with_blend_mode(config.blend_mode)
            .with_reclaim_interval(config.reclaim_interval)?)
    }

    pub fn with_rng(mut self, rng: FastRand) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifierCollection) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_strategy(mut self, strategy: ModifierExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parameters(mut self, parameters: ReleaseParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_reclaim_interval(mut self, seconds: f32) -> ParticleResult<Self> {
        self.set_reclaim_interval(seconds)?;
        Ok(self)
    }

    /// 设置回收检查间隔（秒），0 表示每帧检查
    ///
    /// # 错误
    ///
    /// 负数或 NaN 返回 [`ParticleError::InvalidReclaimInterval`]，原值保持不变。
    pub fn set_reclaim_interval(&mut self, seconds: f32) -> ParticleResult<()> {
        if !(seconds >= 0.0) {
            return Err(ParticleError::InvalidReclaimInterval(seconds));
        }
        self.reclaim_interval = seconds;
        Ok(())
    }

    pub fn reclaim_interval(&self) -> f32 {
        self.reclaim_interval
    }

    /// 当前活跃粒子数
    pub fn active_particles(&self) -> usize {
        self.buffer.active_count()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// 粒子寿命（秒）
    pub fn term(&self) -> f32 {
        self.term
    }

    /// 模拟时钟（秒）
    pub fn total_seconds(&self) -> f32 {
        self.total_seconds
    }

    /// 只读访问粒子缓冲区，供渲染端使用
    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    /// 随机数生成器，可用于重新播种
    pub fn rng_mut(&mut self) -> &mut FastRand {
        &mut self.rng
    }

    pub fn stats(&self) -> EmitterStats {
        EmitterStats {
            active: self.buffer.active_count(),
            capacity: self.buffer.capacity(),
            total_released: self.total_released,
            total_reclaimed: self.total_reclaimed,
        }
    }

    /// 在 `position` 处释放一批粒子
    ///
    /// 数量从 `parameters.quantity` 抽样，缓冲区不足时只释放剩余容量。
    pub fn trigger(&mut self, position: Vec2) {
        let requested = self.rng.next_int_in(&self.parameters.quantity);
        if requested <= 0 {
            return;
        }

        let (start, count) = self.buffer.release(requested as usize);
        if count == 0 {
            return;
        }

        let (_, fresh) = self.buffer.slice_mut().split_at(start);
        let rng = &mut self.rng;
        let parameters = &self.parameters;

        for i in 0..count {
            let (offset, heading) = self.profile.get_offset_and_heading(rng);

            fresh.age[i] = 0.0;
            fresh.inception[i] = self.total_seconds;

            fresh.x[i] = offset.x + position.x;
            fresh.y[i] = offset.y + position.y;

            let speed = rng.next_float_in(&parameters.speed);
            fresh.vx[i] = heading.x * speed;
            fresh.vy[i] = heading.y * speed;

            let color = rng.next_color(&parameters.color);
            fresh.r[i] = color.x;
            fresh.g[i] = color.y;
            fresh.b[i] = color.z;

            fresh.opacity[i] = rng.next_float_in(&parameters.opacity);
            fresh.scale[i] = rng.next_float_in(&parameters.scale);
            fresh.rotation[i] = rng.next_float_in(&parameters.rotation);
            fresh.mass[i] = rng.next_float_in(&parameters.mass);
        }

        self.total_released += count as u64;
    }

    /// 推进一帧
    pub fn update(&mut self, elapsed_seconds: f32) {
        self.total_seconds += elapsed_seconds;
        self.seconds_since_last_reclaim += elapsed_seconds;

        if self.buffer.is_empty() {
            return;
        }

        if self.seconds_since_last_reclaim > self.reclaim_interval {
            self.reclaim_expired_particles();
            self.seconds_since_last_reclaim = 0.0;
        }

        if self.buffer.is_empty() {
            return;
        }

        self.refresh_ages();
        self.strategy
            .execute(&self.modifiers, elapsed_seconds, self.buffer.slice_mut());
    }

    /// 回收过期前缀
    ///
    /// 粒子按诞生时间非递减的顺序追加，过期粒子总是构成前缀，
    /// 所以遇到第一个未过期的粒子就停止扫描。
    fn reclaim_expired_particles(&mut self) {
        let now = self.total_seconds;
        let term = self.term;
        let expired = self
            .buffer
            .column(ParticleField::Inception)
            .iter()
            .take_while(|&&inception| now - inception >= term)
            .count();

        if expired == 0 {
            return;
        }

        self.buffer.reclaim(expired);
        self.total_reclaimed += expired as u64;
        tracing::debug!(
            target: "emitter",
            "Reclaimed {} expired particles, {} remain",
            expired,
            self.buffer.active_count()
        );
    }

    /// 归一化年龄 = 已存活时间 / 寿命
    fn refresh_ages(&mut self) {
        let now = self.total_seconds;
        let term = self.term;
        let particles = self.buffer.slice_mut();
        for (age, inception) in particles.age.iter_mut().zip(particles.inception.iter()) {
            *age = (now - *inception) / term;
        }
    }

    /// 清空所有粒子，发射器可以重新使用
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.seconds_since_last_reclaim = 0.0;
    }

    /// 释放缓冲区内存，可重复调用
    pub fn dispose(&mut self) {
        self.buffer.dispose();
    }
}
