//! # Particle Engine
//!
//! A CPU particle engine for short-lived visual effects (sparks, smoke, trails).
//!
//! ## Features
//!
//! - **SoA Storage**: one contiguous `f32` column per particle attribute, active particles form a prefix
//! - **Modifier Pipeline**: ordered, stateless per-particle transformations
//! - **Parallel Execution**: modifiers run over disjoint partitions on scoped worker threads
//! - **Deterministic Randomness**: a seedable per-emitter LCG
//! - **Configuration**: TOML/JSON files with environment overrides
//!
//! ## Architecture Design
//!
//! 发射器（Emitter）拥有粒子缓冲区（ParticleBuffer），借用发射形状（Profile），
//! 每帧按执行策略（ModifierExecutionStrategy）运行修改器管线。
//!
//! ### Example
//!
//! ```rust
//! use particle_engine::particles::{CircleProfile, Emitter, VelocityModifier};
//! use glam::Vec2;
//! use std::time::Duration;
//!
//! let profile = CircleProfile::new(8.0, true);
//! let mut emitter = Emitter::new(256, Duration::from_millis(1500), &profile).unwrap();
//! emitter.modifiers.push(VelocityModifier);
//!
//! emitter.trigger(Vec2::ZERO);
//! emitter.update(1.0 / 60.0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: errors, logging and helper macros
//! - [`config`]: configuration system
//! - [`math`]: fast random numbers and approximate trigonometry
//! - [`particles`]: buffer, emitter, modifiers and execution strategies

/// Errors, logging initialization and helper macros
pub mod core;
/// Configuration system
pub mod config;
/// Fast math helpers
pub mod math;
/// Particle storage, emission and modification
pub mod particles;

pub use crate::config::{EmitterConfig, EngineConfig};
pub use crate::core::{init_logging, ParticleError, ParticleResult};
pub use crate::particles::{Emitter, ModifierExecutionStrategy, ParticleBuffer};
