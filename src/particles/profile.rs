//! 发射形状
//!
//! 为新释放的粒子提供初始位置偏移和朝向。

use crate::math::FastRand;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 发射形状接口
///
/// 每释放一个粒子调用一次。随机数来自发射器自己的生成器，
/// 实现不应修改任何其他状态。
pub trait Profile {
    /// 返回 `(偏移, 单位朝向)`
    fn get_offset_and_heading(&self, rng: &mut FastRand) -> (Vec2, Vec2);
}

/// 点发射：无偏移，随机朝向
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointProfile;

impl Profile for PointProfile {
    fn get_offset_and_heading(&self, rng: &mut FastRand) -> (Vec2, Vec2) {
        (Vec2::ZERO, rng.next_unit_vector())
    }
}

/// 圆周发射
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleProfile {
    /// 半径
    pub radius: f32,
    /// 朝向是否沿半径向外；否则随机
    pub radiate: bool,
}

impl CircleProfile {
    pub fn new(radius: f32, radiate: bool) -> Self {
        Self { radius, radiate }
    }
}

impl Profile for CircleProfile {
    fn get_offset_and_heading(&self, rng: &mut FastRand) -> (Vec2, Vec2) {
        let direction = rng.next_unit_vector();
        let offset = direction * self.radius;
        let heading = if self.radiate {
            direction
        } else {
            rng.next_unit_vector()
        };
        (offset, heading)
    }
}

/// 固定偏移和朝向，主要用于测试
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedProfile {
    pub offset: Vec2,
    pub heading: Vec2,
}

impl Profile for FixedProfile {
    fn get_offset_and_heading(&self, _rng: &mut FastRand) -> (Vec2, Vec2) {
        (self.offset, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_profile() {
        let mut rng = FastRand::new(11).unwrap();
        for _ in 0..50 {
            let (offset, heading) = PointProfile.get_offset_and_heading(&mut rng);
            assert_eq!(offset, Vec2::ZERO);
            assert!((heading.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_circle_profile_radiates() {
        let profile = CircleProfile::new(5.0, true);
        let mut rng = FastRand::new(4).unwrap();
        for _ in 0..50 {
            let (offset, heading) = profile.get_offset_and_heading(&mut rng);
            assert!((offset.length() - 5.0).abs() < 1e-3);
            assert!((offset.normalize() - heading).length() < 1e-4);
        }
    }

    #[test]
    fn test_circle_profile_random_heading() {
        let profile = CircleProfile::new(2.0, false);
        let mut rng = FastRand::new(4).unwrap();
        let (offset, heading) = profile.get_offset_and_heading(&mut rng);
        assert!((offset.length() - 2.0).abs() < 1e-3);
        assert!((heading.length() - 1.0).abs() < 1e-4);
    }
}
