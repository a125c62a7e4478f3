//! 释放参数
//!
//! 每个参数是一个闭区间，触发时为每个新粒子独立抽样。

use crate::impl_default;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::ops::RangeInclusive;

/// 混合模式
///
/// 引擎本身不解释这个值，原样交给渲染端。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendMode {
    /// 透明混合
    #[default]
    Alpha,
    /// 加法混合
    Add,
    /// 减法混合
    Subtract,
}

/// 释放参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseParameters {
    /// 每次触发释放的数量
    pub quantity: RangeInclusive<i32>,
    /// 初速度大小
    pub speed: RangeInclusive<f32>,
    /// 颜色，逐通道抽样
    pub color: RangeInclusive<Vec3>,
    /// 不透明度
    pub opacity: RangeInclusive<f32>,
    /// 缩放
    pub scale: RangeInclusive<f32>,
    /// 初始旋转（弧度）
    pub rotation: RangeInclusive<f32>,
    /// 质量
    pub mass: RangeInclusive<f32>,
}

impl_default!(ReleaseParameters {
    quantity: 1..=1,
    speed: -1.0..=1.0,
    color: Vec3::ONE..=Vec3::ONE,
    opacity: 0.0..=1.0,
    scale: 1.0..=10.0,
    rotation: -PI..=PI,
    mass: 1.0..=1.0,
});

impl ReleaseParameters {
    /// 设置固定释放数量
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity..=quantity;
        self
    }

    pub fn with_quantity_range(mut self, min: i32, max: i32) -> Self {
        self.quantity = min..=max;
        self
    }

    pub fn with_speed(mut self, min: f32, max: f32) -> Self {
        self.speed = min..=max;
        self
    }

    pub fn with_color(mut self, min: Vec3, max: Vec3) -> Self {
        self.color = min..=max;
        self
    }

    pub fn with_opacity(mut self, min: f32, max: f32) -> Self {
        self.opacity = min..=max;
        self
    }

    pub fn with_scale(mut self, min: f32, max: f32) -> Self {
        self.scale = min..=max;
        self
    }

    pub fn with_rotation(mut self, min: f32, max: f32) -> Self {
        self.rotation = min..=max;
        self
    }

    pub fn with_mass(mut self, min: f32, max: f32) -> Self {
        self.mass = min..=max;
        self
    }

    /// 找出第一个下界大于上界的参数名
    pub fn invalid_range(&self) -> Option<&'static str> {
        let float_ranges = [
            ("speed", &self.speed),
            ("opacity", &self.opacity),
            ("scale", &self.scale),
            ("rotation", &self.rotation),
            ("mass", &self.mass),
        ];

        if self.quantity.start() > self.quantity.end() {
            return Some("quantity");
        }
        if let Some((name, _)) = float_ranges
            .iter()
            .find(|(_, range)| !(range.start() <= range.end()))
        {
            return Some(*name);
        }

        let (min, max) = (*self.color.start(), *self.color.end());
        if !min.cmple(max).all() {
            return Some("color");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let parameters = ReleaseParameters::default();
        assert_eq!(parameters.quantity, 1..=1);
        assert!(parameters.invalid_range().is_none());
    }

    #[test]
    fn test_invalid_ranges_detected() {
        let parameters = ReleaseParameters::default().with_quantity_range(5, 2);
        assert_eq!(parameters.invalid_range(), Some("quantity"));

        let parameters = ReleaseParameters::default().with_scale(3.0, 1.0);
        assert_eq!(parameters.invalid_range(), Some("scale"));

        let parameters = ReleaseParameters::default().with_speed(f32::NAN, 1.0);
        assert_eq!(parameters.invalid_range(), Some("speed"));

        let parameters = ReleaseParameters::default()
            .with_color(Vec3::new(0.0, 0.9, 0.0), Vec3::new(1.0, 0.1, 1.0));
        assert_eq!(parameters.invalid_range(), Some("color"));
    }

    #[test]
    fn test_blend_mode_default() {
        assert_eq!(BlendMode::default(), BlendMode::Alpha);
    }
}
