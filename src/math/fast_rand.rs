//! 快速伪随机数生成器
//!
//! 线性同余生成器，追求速度而非统计质量，**不是**密码学安全的。
//! 递推式、移位掩码和除数必须保持不变，否则同一种子下的视觉效果无法复现。

use crate::core::error::{ParticleError, ParticleResult};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use std::ops::RangeInclusive;

const MULTIPLIER: i32 = 214_013;
const INCREMENT: i32 = 2_531_011;
const MAX_OUTPUT: f32 = 32_767.0;

/// 快速随机数生成器
///
/// 每个发射器持有自己的实例，保证确定性并避免发射器之间互相干扰。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastRand {
    state: i32,
}

impl Default for FastRand {
    fn default() -> Self {
        Self { state: 1 }
    }
}

impl FastRand {
    /// 使用种子创建生成器，种子必须大于零
    pub fn new(seed: i32) -> ParticleResult<Self> {
        let mut rng = Self::default();
        rng.seed(seed)?;
        Ok(rng)
    }

    /// 重新设置种子
    pub fn seed(&mut self, seed: i32) -> ParticleResult<()> {
        if seed < 1 {
            return Err(ParticleError::InvalidSeed(seed));
        }
        self.state = seed;
        Ok(())
    }

    /// 下一个 15 位非负整数
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        (self.state >> 16) & 0x7FFF
    }

    /// `[0, max]` 之间的整数
    #[inline]
    pub fn next_int_max(&mut self, max: i32) -> i32 {
        self.next_int_between(0, max)
    }

    /// `[min, max]` 之间的整数
    ///
    /// 跨度按 `i64` 计算，`i32` 两端的极值区间不会溢出。
    #[inline]
    pub fn next_int_between(&mut self, min: i32, max: i32) -> i32 {
        let span = (max as i64 - min as i64) as f32;
        let offset = (span * self.next_float()).floor() as i64;
        let (low, high) = (min.min(max) as i64, min.max(max) as i64);
        // f32 舍入可能越过端点一点
        (min as i64 + offset).clamp(low, high) as i32
    }

    /// 按闭区间取整数
    #[inline]
    pub fn next_int_in(&mut self, range: &RangeInclusive<i32>) -> i32 {
        self.next_int_between(*range.start(), *range.end())
    }

    /// `[0, 1]` 之间的浮点数
    ///
    /// 除数是 32767，所以 1.0 本身也可能出现。
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        self.next_int() as f32 / MAX_OUTPUT
    }

    #[inline]
    pub fn next_float_max(&mut self, max: f32) -> f32 {
        max * self.next_float()
    }

    #[inline]
    pub fn next_float_between(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_float()
    }

    #[inline]
    pub fn next_float_in(&mut self, range: &RangeInclusive<f32>) -> f32 {
        self.next_float_between(*range.start(), *range.end())
    }

    /// `[-π, π]` 之间的角度
    #[inline]
    pub fn next_angle(&mut self) -> f32 {
        self.next_float_between(-PI, PI)
    }

    /// 随机方向的单位向量
    pub fn next_unit_vector(&mut self) -> Vec2 {
        let angle = self.next_angle();
        Vec2::new(angle.cos(), angle.sin())
    }

    /// 三个通道各自独立取值
    pub fn next_color(&mut self, range: &RangeInclusive<Vec3>) -> Vec3 {
        let (min, max) = (*range.start(), *range.end());
        let r = self.next_float_between(min.x, max.x);
        let g = self.next_float_between(min.y, max.y);
        let b = self.next_float_between(min.z, max.z);
        Vec3::new(r, g, b)
    }
}
