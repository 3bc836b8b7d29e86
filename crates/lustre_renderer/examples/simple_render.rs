//! Simple render example.
//!
//! Renders one frame of the orbit demo scene plus a small hand-built scene
//! and saves both as PPM.

use lustre_core::demo::orbit_frame;
use lustre_core::{Color, Material, RenderSettings, Shape, Viewport, World, WorldBuilder};
use lustre_renderer::{Rayon, Renderer, Vec3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Lustre - Simple Example");
    println!("=======================");

    let settings = RenderSettings {
        width: 480,
        height: 270,
        samples: 17,
        ..Default::default()
    };
    let renderer = Renderer::new(settings.clone(), Rayon)?;

    // Demo scene, halfway round the first orbit
    let start = std::time::Instant::now();
    let world = orbit_frame(settings.frame_count() / 4, &settings)?;
    println!("Scene built in {:?}", start.elapsed());

    let start = std::time::Instant::now();
    let image = renderer.render(&world);
    println!("Rendered in {:?}", start.elapsed());
    image.save_ppm("orbit.ppm")?;
    println!("Saved to orbit.ppm");

    let image = renderer.render(&build_scene(settings.width)?);
    image.save_ppm("mirrors.ppm")?;
    println!("Saved to mirrors.ppm");

    Ok(())
}

fn build_scene(width: u32) -> Result<World, lustre_core::SceneError> {
    let viewport = Viewport::look_at(
        Vec3::new(-12.0, -4.0, 4.0),
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::Z,
        std::f32::consts::FRAC_PI_3,
        width,
    );

    WorldBuilder::new(viewport)
        .with_sky(Color::new(0x20, 0x30, 0x60))
        .with_object(
            Shape::plane(Vec3::ZERO, Vec3::Z),
            Material::reflective(Color::new(0xa0, 0xa0, 0xa0), 0.25),
        )
        .with_object(
            Shape::sphere(Vec3::new(0.0, -3.0, 2.0), 2.0),
            Material::reflective(Color::RED, 0.0),
        )
        .with_object(
            Shape::sphere(Vec3::new(0.0, 3.0, 2.0), 2.0),
            Material::reflective(Color::new(0xe0, 0xe0, 0xff), 0.08),
        )
        .with_object(
            Shape::sphere(Vec3::new(6.0, 0.0, 8.0), 1.5),
            Material::emissive(Color::WHITE),
        )
        .build()
}
