//! Bounded-depth path tracing.
//!
//! A path is walked front to back, recording the material of every surface
//! it bounces off, then composed back to front: each bounce tints what
//! arrived from further down the path by its albedo and adds its own glow.

use lustre_core::{Color, Material};
use lustre_math::Line;

use crate::intersect::find_nearest;
use crate::reflect::{disperse, reflect};
use crate::RenderContext;

/// Trace one ray to a color.
///
/// `stream` decorrelates the dispersion noise of different samples. A path
/// that is still bouncing after `max_depth` hits is absorbed (black).
pub fn trace_one(ctx: &RenderContext<'_>, primary: Line, stream: u64) -> Color {
    let world = ctx.world;
    let mut collisions: Vec<Material> = Vec::with_capacity(ctx.max_depth as usize);
    let mut current = primary;
    let mut excluded = None;

    for _ in 0..ctx.max_depth {
        let Some(hit) = find_nearest(&current, world, excluded) else {
            collisions.push(world.sky_material());
            return compose(&collisions);
        };

        let object = hit.object(world);
        collisions.push(object.material);

        let outward = Line::new(current.at(hit.t), -current.b);
        let reflected = reflect(&outward, &object.shape);
        current = Line::new(
            reflected.p,
            disperse(
                reflected.b,
                object.material.dispersion,
                object.seed ^ stream,
                ctx.entropy,
            ),
        );
        excluded = Some(hit.id);
    }

    Color::BLACK
}

/// Combine recorded materials, deepest first.
///
/// Emission adds, albedo multiplies.
pub fn compose(materials: &[Material]) -> Color {
    materials
        .iter()
        .rev()
        .fold(Color::BLACK, |acc, m| m.light.add(m.color.mix(acc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntropyPool;
    use lustre_core::{RenderSettings, Shape, Viewport, World, WorldBuilder};
    use lustre_math::{Grid, Vec3};

    fn viewport() -> Viewport {
        Viewport::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Grid::new(Vec3::ZERO, Vec3::Y, -Vec3::Z),
        )
    }

    fn trace(world: &World, line: Line) -> Color {
        let entropy = EntropyPool::default();
        let settings = RenderSettings {
            max_depth: 10,
            ..Default::default()
        };
        let ctx = RenderContext::new(world, &entropy, &settings);
        trace_one(&ctx, line, 0)
    }

    #[test]
    fn test_compose() {
        let sky = Material::sky(Color::new(0x80, 0x80, 0x80));
        let tint = Material::reflective(Color::new(0xff, 0x00, 0x80), 0.0);
        let glow = Material::new(Color::WHITE, Color::new(0x10, 0x10, 0x10), 0.0);

        assert_eq!(compose(&[]), Color::BLACK);
        assert_eq!(compose(&[sky]), Color::new(0x80, 0x80, 0x80));
        assert_eq!(compose(&[tint, sky]), Color::new(0x80, 0x00, 0x40));
        assert_eq!(compose(&[glow, tint, sky]), Color::new(0x90, 0x10, 0x50));
    }

    #[test]
    fn test_miss_is_sky() {
        let world = WorldBuilder::new(viewport())
            .with_sky(Color::VIOLET)
            .build()
            .unwrap();
        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
        assert_eq!(trace(&world, line), Color::VIOLET);
    }

    #[test]
    fn test_mirror_sphere_tints_sky() {
        let world = WorldBuilder::new(viewport())
            .with_sky(Color::WHITE)
            .with_object(
                Shape::sphere(Vec3::new(10.0, 0.0, 0.0), 5.0),
                Material::reflective(Color::GREEN, 0.0),
            )
            .build()
            .unwrap();

        let hit = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
        assert_eq!(trace(&world, hit), Color::GREEN);

        let miss = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::Y);
        assert_eq!(trace(&world, miss), Color::WHITE);
    }

    #[test]
    fn test_light_adds() {
        let world = WorldBuilder::new(viewport())
            .with_sky(Color::new(0x20, 0x20, 0x20))
            .with_object(
                Shape::sphere(Vec3::new(10.0, 0.0, 0.0), 5.0),
                Material::new(Color::WHITE, Color::new(0x10, 0x00, 0x00), 0.0),
            )
            .build()
            .unwrap();

        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
        assert_eq!(trace(&world, line), Color::new(0x30, 0x20, 0x20));
    }

    #[test]
    fn test_trapped_path_is_black() {
        // Two facing mirrors: the path never escapes
        let world = WorldBuilder::new(viewport())
            .with_sky(Color::WHITE)
            .with_object(
                Shape::plane(Vec3::new(0.0, 0.0, -5.0), Vec3::Z),
                Material::new(Color::WHITE, Color::WHITE, 0.0),
            )
            .with_object(
                Shape::plane(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z),
                Material::new(Color::WHITE, Color::WHITE, 0.0),
            )
            .build()
            .unwrap();

        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(trace(&world, line), Color::BLACK);
    }

    #[test]
    fn test_floor_bounce() {
        let world = WorldBuilder::new(viewport())
            .with_sky(Color::WHITE)
            .with_object(
                Shape::plane(Vec3::new(0.0, 0.0, -5.0), Vec3::Z),
                Material::reflective(Color::new(0x80, 0x80, 0x80), 0.0),
            )
            .build()
            .unwrap();

        // Down onto the floor, then up and away
        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(trace(&world, line), Color::new(0x80, 0x80, 0x80));
    }
}
