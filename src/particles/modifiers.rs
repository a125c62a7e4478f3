//! 内置修改器
//!
//! 都是简单的逐粒子公式，依赖发射器每帧刷新的归一化年龄。

use super::buffer::ParticleSlice;
use super::modifier::Modifier;
use crate::math::fast_math;
use serde::{Deserialize, Serialize};

/// 不透明度随年龄线性衰减：`opacity = 1 - age`
#[derive(Debug, Clone, Copy, Default)]
pub struct OpacityFastFadeModifier;

impl Modifier for OpacityFastFadeModifier {
    fn name(&self) -> &str {
        "opacity_fast_fade"
    }

    fn update(&self, _elapsed_seconds: f32, particles: &mut ParticleSlice<'_>) {
        for (opacity, age) in particles.opacity.iter_mut().zip(particles.age.iter()) {
            *opacity = 1.0 - *age;
        }
    }
}

/// 旋转朝向速度方向
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateToFaceDirectionModifier;

impl Modifier for RotateToFaceDirectionModifier {
    fn name(&self) -> &str {
        "rotate_to_face_direction"
    }

    fn update(&self, _elapsed_seconds: f32, particles: &mut ParticleSlice<'_>) {
        let velocities = particles.vx.iter().zip(particles.vy.iter());
        for (rotation, (vx, vy)) in particles.rotation.iter_mut().zip(velocities) {
            *rotation = fast_math::atan2(*vy, *vx);
        }
    }
}

/// 红色通道（色相）随年龄插值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueInterpolatorModifier {
    pub initial_hue: f32,
    pub final_hue: f32,
}

impl Modifier for HueInterpolatorModifier {
    fn name(&self) -> &str {
        "hue_interpolator"
    }

    fn update(&self, _elapsed_seconds: f32, particles: &mut ParticleSlice<'_>) {
        let delta = self.final_hue - self.initial_hue;
        for (r, age) in particles.r.iter_mut().zip(particles.age.iter()) {
            *r = delta * *age + self.initial_hue;
        }
    }
}

/// 按速度推进位置
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityModifier;

impl Modifier for VelocityModifier {
    fn name(&self) -> &str {
        "velocity"
    }

    fn update(&self, elapsed_seconds: f32, particles: &mut ParticleSlice<'_>) {
        for (x, vx) in particles.x.iter_mut().zip(particles.vx.iter()) {
            *x += *vx * elapsed_seconds;
        }
        for (y, vy) in particles.y.iter_mut().zip(particles.vy.iter()) {
            *y += *vy * elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::buffer::{ParticleBuffer, ParticleField};
    use std::f32::consts::FRAC_PI_2;

    fn buffer_with(count: usize) -> ParticleBuffer {
        let mut buffer = ParticleBuffer::new(count).unwrap();
        buffer.release(count);
        buffer
    }

    #[test]
    fn test_opacity_fast_fade() {
        let mut buffer = buffer_with(3);
        buffer
            .column_mut(ParticleField::Age)
            .copy_from_slice(&[0.0, 0.25, 1.0]);

        OpacityFastFadeModifier.update(0.1, &mut buffer.slice_mut());
        assert_eq!(buffer.column(ParticleField::Opacity), &[1.0, 0.75, 0.0]);
    }

    #[test]
    fn test_rotate_to_face_direction() {
        let mut buffer = buffer_with(2);
        buffer.column_mut(ParticleField::VX).copy_from_slice(&[1.0, 0.0]);
        buffer.column_mut(ParticleField::VY).copy_from_slice(&[0.0, 3.0]);

        RotateToFaceDirectionModifier.update(0.1, &mut buffer.slice_mut());
        let rotation = buffer.column(ParticleField::Rotation);
        assert!(rotation[0].abs() < 1e-6);
        assert!((rotation[1] - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_hue_interpolator() {
        let mut buffer = buffer_with(2);
        buffer.column_mut(ParticleField::Age).copy_from_slice(&[0.0, 0.5]);

        let modifier = HueInterpolatorModifier {
            initial_hue: 0.2,
            final_hue: 0.6,
        };
        modifier.update(0.1, &mut buffer.slice_mut());
        let r = buffer.column(ParticleField::R);
        assert!((r[0] - 0.2).abs() < 1e-6);
        assert!((r[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_modifier() {
        let mut buffer = buffer_with(1);
        buffer.column_mut(ParticleField::VX)[0] = 2.0;
        buffer.column_mut(ParticleField::VY)[0] = -4.0;

        VelocityModifier.update(0.5, &mut buffer.slice_mut());
        assert_eq!(buffer.column(ParticleField::X), &[1.0]);
        assert_eq!(buffer.column(ParticleField::Y), &[-2.0]);
    }
}
