//! Built-in demo scenes, one per stage of the renderer's feature set.

use lux_render::{
    boxed, BvhNode, Camera, CheckerTexture, Color, Dielectric, DiffuseLight, Hittable,
    HittableList, ImageTexture, Lambertian, Metal, NoiseTexture, Perlin, Quad, RenderConfig,
    Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub struct Scene {
    pub world: Arc<dyn Hittable>,
    pub camera: Camera,
    pub config: RenderConfig,
}

/// Ground sphere plus diffuse, glass and metal spheres under the sky
/// gradient.
pub fn three_spheres() -> Scene {
    let mut world = HittableList::new();

    let ground = Arc::new(Lambertian::from_color(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::from_color(Color::new(0.1, 0.2, 0.5)));
    let glass = Arc::new(Dielectric::new(1.5));
    let metal = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1));

    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 0.0, -1.2),
        0.5,
        center,
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        glass,
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        metal,
    )));

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_position(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(20.0, 0.0, 3.4);
    camera.initialize();

    Scene {
        world: Arc::new(world),
        camera,
        config: RenderConfig {
            samples_per_pixel: 100,
            max_depth: 50,
            use_sky_gradient: true,
            ..Default::default()
        },
    }
}

/// The book cover: hundreds of small spheres, some moving, over a
/// checkered ground, with defocus blur.
pub fn bouncing_spheres() -> Scene {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut world = HittableList::new();

    let checker = Arc::new(CheckerTexture::from_colors(
        0.32,
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(checker)),
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f32 = rng.gen();
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                let albedo = Color::new(rng.gen(), rng.gen(), rng.gen())
                    * Color::new(rng.gen(), rng.gen(), rng.gen());
                let material = Arc::new(Lambertian::from_color(albedo));
                let center1 = center + Vec3::new(0.0, rng.gen_range(0.0..0.5), 0.0);
                world.add(Arc::new(Sphere::moving(center, center1, 0.2, material)));
            } else if choose_mat < 0.95 {
                let albedo = Color::new(
                    rng.gen_range(0.5..1.0),
                    rng.gen_range(0.5..1.0),
                    rng.gen_range(0.5..1.0),
                );
                let fuzz = rng.gen_range(0.0..0.5);
                world.add(Arc::new(Sphere::stationary(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                world.add(Arc::new(Sphere::stationary(
                    center,
                    0.2,
                    Arc::new(Dielectric::new(1.5)),
                )));
            }
        }
    }

    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::from_color(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    let bvh = BvhNode::new(world.into_objects());

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);
    camera.initialize();

    Scene {
        world: Arc::new(bvh),
        camera,
        config: RenderConfig {
            samples_per_pixel: 100,
            max_depth: 50,
            use_sky_gradient: true,
            ..Default::default()
        },
    }
}

/// A single earth-textured sphere.
pub fn earth() -> Scene {
    let earth_texture = Arc::new(ImageTexture::open("earthmap.jpg"));
    let earth_surface = Arc::new(Lambertian::new(earth_texture));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::stationary(Vec3::ZERO, 2.0, earth_surface)));

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_position(Vec3::new(0.0, 0.0, 12.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 12.0);
    camera.initialize();

    Scene {
        world: Arc::new(world),
        camera,
        config: RenderConfig {
            use_sky_gradient: true,
            ..Default::default()
        },
    }
}

/// Two marble-textured spheres.
pub fn perlin_spheres() -> Scene {
    let mut rng = StdRng::seed_from_u64(2024);
    let marble = Arc::new(NoiseTexture::new(Perlin::new(&mut rng), 4.0));
    let surface = Arc::new(Lambertian::new(marble));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        surface.clone(),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 2.0, 0.0),
        2.0,
        surface,
    )));

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.0, 10.0);
    camera.initialize();

    Scene {
        world: Arc::new(world),
        camera,
        config: RenderConfig {
            use_sky_gradient: true,
            ..Default::default()
        },
    }
}

/// Five colored quads facing the camera.
pub fn quads() -> Scene {
    let mut world = HittableList::new();

    let left_red = Arc::new(Lambertian::from_color(Color::new(1.0, 0.2, 0.2)));
    let back_green = Arc::new(Lambertian::from_color(Color::new(0.2, 1.0, 0.2)));
    let right_blue = Arc::new(Lambertian::from_color(Color::new(0.2, 0.2, 1.0)));
    let upper_orange = Arc::new(Lambertian::from_color(Color::new(1.0, 0.5, 0.0)));
    let lower_teal = Arc::new(Lambertian::from_color(Color::new(0.2, 0.8, 0.8)));

    world.add(Arc::new(Quad::new(
        Vec3::new(-3.0, -2.0, 5.0),
        Vec3::new(0.0, 0.0, -4.0),
        Vec3::new(0.0, 4.0, 0.0),
        left_red,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(-2.0, -2.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 0.0),
        back_green,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(3.0, -2.0, 1.0),
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(0.0, 4.0, 0.0),
        right_blue,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(-2.0, 3.0, 1.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 4.0),
        upper_orange,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(-2.0, -3.0, 5.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -4.0),
        lower_teal,
    )));

    let mut camera = Camera::new()
        .with_image(1.0, 400)
        .with_position(Vec3::new(0.0, 0.0, 9.0), Vec3::ZERO, Vec3::Y)
        .with_lens(80.0, 0.0, 9.0);
    camera.initialize();

    Scene {
        world: Arc::new(world),
        camera,
        config: RenderConfig {
            use_sky_gradient: true,
            ..Default::default()
        },
    }
}

/// Marble spheres lit only by an emissive quad and sphere.
pub fn simple_light() -> Scene {
    let mut rng = StdRng::seed_from_u64(2024);
    let marble = Arc::new(NoiseTexture::new(Perlin::new(&mut rng), 4.0));
    let surface = Arc::new(Lambertian::new(marble));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        surface.clone(),
    )));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 2.0, 0.0),
        2.0,
        surface,
    )));

    let light = Arc::new(DiffuseLight::from_color(Color::splat(4.0)));
    world.add(Arc::new(Sphere::stationary(
        Vec3::new(0.0, 7.0, 0.0),
        2.0,
        light.clone(),
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(3.0, 1.0, -2.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        light,
    )));

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, 400)
        .with_position(Vec3::new(26.0, 3.0, 6.0), Vec3::new(0.0, 2.0, 0.0), Vec3::Y)
        .with_lens(20.0, 0.0, 26.0);
    camera.initialize();

    Scene {
        world: Arc::new(world),
        camera,
        config: RenderConfig {
            background: Color::ZERO,
            ..Default::default()
        },
    }
}

/// The Cornell box with two inner boxes.
pub fn cornell_box() -> Scene {
    let mut world = HittableList::new();

    let red = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
    let white = Arc::new(Lambertian::from_color(Color::new(0.73, 0.73, 0.73)));
    let green = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));
    let light = Arc::new(DiffuseLight::from_color(Color::splat(15.0)));

    world.add(Arc::new(Quad::new(
        Vec3::new(555.0, 0.0, 0.0),
        Vec3::new(0.0, 555.0, 0.0),
        Vec3::new(0.0, 0.0, 555.0),
        green,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::ZERO,
        Vec3::new(0.0, 555.0, 0.0),
        Vec3::new(0.0, 0.0, 555.0),
        red,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(343.0, 554.0, 332.0),
        Vec3::new(-130.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -105.0),
        light,
    )));
    world.add(Arc::new(Quad::new(
        Vec3::ZERO,
        Vec3::new(555.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(555.0, 555.0, 555.0),
        Vec3::new(-555.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -555.0),
        white.clone(),
    )));
    world.add(Arc::new(Quad::new(
        Vec3::new(0.0, 0.0, 555.0),
        Vec3::new(555.0, 0.0, 0.0),
        Vec3::new(0.0, 555.0, 0.0),
        white.clone(),
    )));

    world.add(Arc::new(boxed(
        Vec3::new(130.0, 0.0, 65.0),
        Vec3::new(295.0, 165.0, 230.0),
        white.clone(),
    )));
    world.add(Arc::new(boxed(
        Vec3::new(265.0, 0.0, 295.0),
        Vec3::new(430.0, 330.0, 460.0),
        white,
    )));

    let mut camera = Camera::new()
        .with_image(1.0, 400)
        .with_position(
            Vec3::new(278.0, 278.0, -800.0),
            Vec3::new(278.0, 278.0, 0.0),
            Vec3::Y,
        )
        .with_lens(40.0, 0.0, 800.0);
    camera.initialize();

    Scene {
        world: Arc::new(world),
        camera,
        config: RenderConfig {
            samples_per_pixel: 200,
            max_depth: 50,
            background: Color::ZERO,
            ..Default::default()
        },
    }
}
