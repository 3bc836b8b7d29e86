//! The animated demo scene.
//!
//! A glowing white sphere and a mirror-blue sphere sit on a tinted ground
//! plane, with a soft green sphere and a distant orange "sun". The camera
//! orbits the group twice over the animation.

use std::f32::consts::PI;

use lustre_math::Vec3;

use crate::{Color, Material, RenderSettings, SceneError, Shape, Viewport, World, WorldBuilder};

const DEMO_SEED: u64 = 0x0dd5_eed5;

/// Build the demo world at `frame` of an animation of `duration` seconds at
/// `fps` frames per second.
///
/// `frame` is a frame index, not a time in seconds; fractional values fall
/// between frames. The camera completes two orbits over `duration * fps`
/// frames.
pub fn orbit_world(frame: f32, duration: f32, fps: f32, width: u32) -> Result<World, SceneError> {
    let angle = 2.0 * 2.0 * PI / (duration * fps);
    let camera = Vec3::new(
        10.0 - 20.0 * (angle * frame).cos(),
        20.0 * (angle * frame).sin(),
        10.0,
    );
    let viewport = Viewport::look_at(camera, Vec3::new(10.0, 0.0, 5.0), Vec3::Z, PI / 2.0, width);

    WorldBuilder::new(viewport)
        .with_seed(DEMO_SEED ^ frame.to_bits() as u64)
        .with_sky(Color::new(0x40, 0x10, 0x80))
        .with_object(
            Shape::sphere(Vec3::new(10.0, 1.0, 6.0), 3.0),
            Material::emissive(Color::WHITE),
        )
        .with_object(
            Shape::plane(Vec3::ZERO, Vec3::Z),
            Material::reflective(Color::new(0x90, 0x70, 0x70), 0.3),
        )
        .with_object(
            Shape::sphere(Vec3::new(9.0, -7.0, 2.0), 2.0),
            Material::reflective(Color::new(0x50, 0x50, 0xff), 0.0),
        )
        .with_object(
            Shape::sphere(Vec3::new(8.0, 7.0, 3.0), 2.0),
            Material::reflective(Color::GREEN, 0.15),
        )
        .with_object(
            Shape::sphere(Vec3::new(70.0, 40.0, 15.0), 8.0),
            Material::emissive(Color::ORANGE),
        )
        .build()
}

/// Demo world for frame `frame` of the animation `settings` describes.
pub fn orbit_frame(frame: u32, settings: &RenderSettings) -> Result<World, SceneError> {
    orbit_world(
        frame as f32,
        settings.duration,
        settings.fps as f32,
        settings.width,
    )
}
