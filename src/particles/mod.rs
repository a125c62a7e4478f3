//! CPU 粒子系统模块
//!
//! 面向大量短寿命视觉粒子（火花、烟雾、拖尾），每帧创建、老化、回收数千个粒子，
//! 且不产生内存分配抖动。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        Emitter                           │
//! ├─────────────────────────────────────────────────────────┤
//! │  Profile (借用)      → 初始偏移 + 朝向                    │
//! │  ReleaseParameters   → 速度/颜色/不透明度/缩放/...         │
//! │  ParticleBuffer      → SoA 列存储，活跃粒子为连续前缀       │
//! │  ModifierCollection  → 有序的逐粒子变换                   │
//! │  ExecutionStrategy   → 顺序执行 / 分区并行执行             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```rust
//! use particle_engine::particles::{
//!     Emitter, ModifierExecutionStrategy, OpacityFastFadeModifier, PointProfile,
//!     ReleaseParameters,
//! };
//! use glam::Vec2;
//! use std::time::Duration;
//!
//! let profile = PointProfile;
//! let mut emitter = Emitter::new(1000, Duration::from_secs(2), &profile)
//!     .unwrap()
//!     .with_parameters(ReleaseParameters::default().with_quantity(10))
//!     .with_strategy(ModifierExecutionStrategy::Sequential);
//! emitter.modifiers.push(OpacityFastFadeModifier);
//!
//! emitter.trigger(Vec2::new(100.0, 100.0));
//! emitter.update(1.0 / 60.0);
//! assert_eq!(emitter.active_particles(), 10);
//! ```

pub mod buffer;
pub mod emitter;
pub mod modifier;
pub mod modifiers;
pub mod parameters;
pub mod profile;
pub mod strategy;

pub use buffer::{Particle, ParticleBuffer, ParticleField, ParticleSlice, FIELD_COUNT};
pub use emitter::{Emitter, EmitterStats};
pub use modifier::{Modifier, ModifierCollection};
pub use modifiers::{
    HueInterpolatorModifier, OpacityFastFadeModifier, RotateToFaceDirectionModifier,
    VelocityModifier,
};
pub use parameters::{BlendMode, ReleaseParameters};
pub use profile::{CircleProfile, FixedProfile, PointProfile, Profile};
pub use strategy::ModifierExecutionStrategy;
