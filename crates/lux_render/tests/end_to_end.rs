//! Whole-pipeline tests: scene -> parallel render -> PPM bytes.

use lux_render::{
    ppm, ray_color, render, Camera, Color, Dielectric, Hittable, HittableList, Lambertian, Metal,
    Progress, RenderConfig, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn ground_and_three_spheres() -> Arc<dyn Hittable> {
    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Arc::new(Lambertian::from_color(Color::new(0.8, 0.8, 0.0))),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 0.0, -1.2),
        0.5,
        Arc::new(Lambertian::from_color(Color::new(0.1, 0.2, 0.5))),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3)),
    )));
    Arc::new(world)
}

#[test]
fn render_produces_a_well_formed_ppm() {
    // The reference scene at a reduced resolution so the test stays fast
    let world = ground_and_three_spheres();
    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 80)
        .with_position(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(20.0, 0.0, 3.4);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 10,
        max_depth: 20,
        use_sky_gradient: true,
        seed: Some(1),
        ..Default::default()
    };
    let progress = Arc::new(Progress::silent(camera.image_height() as usize));
    let image = render(&camera, world, &config, &progress).unwrap();

    let mut out = Vec::new();
    ppm::write(&image, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("P3\n80 45\n255\n"));

    let body: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(body.len(), 80 * 45);
    for line in &body {
        let channels: Vec<i32> = line
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| (0..=255).contains(&c)));
    }
}

#[test]
fn escaping_rays_reproduce_the_sky_gradient() {
    // No geometry: every pixel is the averaged sky gradient
    let world: Arc<dyn Hittable> = Arc::new(HittableList::new());
    let mut camera = Camera::new()
        .with_image(2.0, 40)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(90.0, 0.0, 1.0);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 64,
        max_depth: 10,
        use_sky_gradient: true,
        seed: Some(2),
        ..Default::default()
    };
    let progress = Arc::new(Progress::silent(camera.image_height() as usize));
    let image = render(&camera, world.clone(), &config, &progress).unwrap();

    // Compare a handful of pixels against a single-ray evaluation of
    // the gradient through the pixel center; jitter averages out
    let mut rng = StdRng::seed_from_u64(3);
    for (i, j) in [(20, 2), (20, 10), (20, 18), (5, 10), (35, 10)] {
        let mut expected = Color::ZERO;
        for _ in 0..64 {
            let ray = camera.get_ray(i, j, &mut rng);
            expected += ray_color(&ray, world.as_ref(), 10, &config, &mut rng);
        }
        expected /= 64.0;

        let got = image.get(i, j);
        assert!(
            (got - expected).length() < 0.02,
            "pixel ({i}, {j}): got {got:?}, expected about {expected:?}"
        );
    }

    // The gradient must run blue at the top toward white at the bottom
    let top = image.get(20, 0);
    let bottom = image.get(20, image.height - 1);
    assert!(top.x < bottom.x);
    assert!((top.z - 1.0).abs() < 0.05);
}

#[test]
fn emissive_only_scene_ignores_depth_budget() {
    use lux_render::DiffuseLight;

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 0.0, -2.0),
        1.0,
        Arc::new(DiffuseLight::from_color(Color::new(2.0, 2.0, 2.0))),
    )));
    let world: Arc<dyn Hittable> = Arc::new(world);

    let config = RenderConfig {
        background: Color::ZERO,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(4);
    let ray = lux_render::Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

    for depth in [1, 2, 50] {
        let c = ray_color(&ray, world.as_ref(), depth, &config, &mut rng);
        assert_eq!(c, Color::new(2.0, 2.0, 2.0));
    }
}
