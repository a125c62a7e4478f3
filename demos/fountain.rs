//! 粒子喷泉示例
//!
//! 用法: cargo run --example fountain -- [config.toml]

use anyhow::Result;
use glam::Vec2;
use particle_engine::config::EngineConfig;
use particle_engine::init_logging;
use particle_engine::particles::{
    CircleProfile, Emitter, HueInterpolatorModifier, OpacityFastFadeModifier,
    RotateToFaceDirectionModifier, VelocityModifier,
};

const FRAME_SECONDS: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_or_default(path),
        None => EngineConfig::default(),
    };
    config.apply_env_overrides();
    config.validate()?;

    init_logging(&config.logging);

    let profile = CircleProfile::new(12.0, true);
    let mut emitter = Emitter::from_config(&config.emitter, &profile)?;
    emitter.modifiers.push(VelocityModifier);
    emitter.modifiers.push(OpacityFastFadeModifier);
    emitter.modifiers.push(RotateToFaceDirectionModifier);
    emitter.modifiers.push(HueInterpolatorModifier {
        initial_hue: 1.0,
        final_hue: 0.3,
    });

    let mut render_target = vec![0.0f32; emitter.buffer().capacity() * 11];

    for frame in 0..600u32 {
        let angle = frame as f32 * 0.05;
        emitter.trigger(Vec2::new(400.0 + 100.0 * angle.cos(), 300.0));
        emitter.update(FRAME_SECONDS);

        let written = emitter.buffer().copy_to(&mut render_target)?;

        if frame % 60 == 0 {
            let stats = emitter.stats();
            tracing::info!(
                "frame {}: {} active / {} capacity, {} released, {} reclaimed, {} floats uploaded",
                frame,
                stats.active,
                stats.capacity,
                stats.total_released,
                stats.total_reclaimed,
                written
            );
        }
    }

    emitter.dispose();
    Ok(())
}
