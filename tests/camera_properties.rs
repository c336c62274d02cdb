use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use thinlens::*;

fn random_placement(rng: &mut StdRng) -> Option<Camera> {
    let lookfrom = Point3::random_limit(rng, -20.0, 20.0);
    let lookat = Point3::random_limit(rng, -20.0, 20.0);
    let view_up = Vec3::random_limit(rng, -1.0, 1.0);
    let back = lookfrom - lookat;
    // keep clear of the degenerate configurations
    if back.length() < 0.1 || view_up.length() < 0.1 {
        return None;
    }
    if view_up.normalize().cross(back.normalize()).length() < 0.1 {
        return None;
    }
    Some(Camera::from_look_at(
        lookfrom,
        lookat,
        view_up,
        rng.gen_range(5.0..170.0),
        rng.gen_range(0.25..4.0),
        rng.gen_range(0.0..2.0),
        rng.gen_range(0.1..50.0),
    ))
}

#[test]
fn basis_is_orthonormal() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut checked = 0;
    while checked < 500 {
        let Some(cam) = random_placement(&mut rng) else {
            continue;
        };
        checked += 1;
        assert_abs_diff_eq!(cam.u().dot(cam.v()), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.v().dot(cam.w()), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.u().dot(cam.w()), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.u().length(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.v().length(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.w().length(), 1.0, epsilon = 1e-5);
        assert!(cam.lens_radius() >= 0.0);
    }
}

#[test]
fn viewport_centre_sits_on_focus_plane() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        let lookfrom = Point3::random_limit(&mut rng, -10.0, 10.0);
        let lookat = lookfrom + Vec3::new(rng.gen_range(-1.0..1.0), 0.0, -3.0);
        let focus = rng.gen_range(0.5..20.0);
        let cam = Camera::from_look_at(
            lookfrom,
            lookat,
            Vec3::yaxis(),
            rng.gen_range(10.0..120.0),
            rng.gen_range(0.5..3.0),
            0.2,
            focus,
        );
        let centre = cam.lower_left_corner() + 0.5 * cam.horizontal() + 0.5 * cam.vertical();
        let expected = cam.origin() - focus * cam.w();
        let tolerance = 1e-4 * (1.0 + focus + lookfrom.length());
        for (l, r) in centre.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(l, r, epsilon = tolerance);
        }
        // the spans lie in the u/v plane
        assert_abs_diff_eq!(
            cam.horizontal().dot(cam.w()),
            0.0,
            epsilon = tolerance
        );
        assert_abs_diff_eq!(cam.vertical().dot(cam.w()), 0.0, epsilon = tolerance);
    }
}

#[test]
fn reference_scenario() {
    let cam = Camera::from_look_at(
        Point3::zero(),
        Point3::new(0.0, 0.0, -1.0),
        Vec3::yaxis(),
        90.0,
        1.0,
        0.0,
        1.0,
    );
    let expectations = [
        (cam.w(), Vec3::new(0.0, 0.0, 1.0)),
        (cam.u(), Vec3::new(1.0, 0.0, 0.0)),
        (cam.v(), Vec3::new(0.0, 1.0, 0.0)),
        (cam.lower_left_corner(), Point3::new(-1.0, -1.0, -1.0)),
        (cam.horizontal(), Vec3::new(2.0, 0.0, 0.0)),
        (cam.vertical(), Vec3::new(0.0, 2.0, 0.0)),
    ];
    for (actual, expected) in expectations {
        for (l, r) in actual.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(l, r, epsilon = 1e-6);
        }
    }
    assert_eq!(cam.lens_radius(), 0.0);
}

#[test]
fn disk_samples_are_uniform() {
    const N: usize = 40_000;
    let mut sampler = LensSampler::seeded(2024);
    let samples: Vec<Vec3> = (0..N).map(|_| sampler.sample_unit_disk()).collect();

    assert!(samples
        .iter()
        .all(|p| p.x() * p.x() + p.y() * p.y() < 1.0 && p.z() == 0.0));

    let mean = samples.iter().fold(Vec3::zero(), |acc, p| acc + *p) / N as f32;
    assert_abs_diff_eq!(mean.x(), 0.0, epsilon = 0.02);
    assert_abs_diff_eq!(mean.y(), 0.0, epsilon = 0.02);

    // equal-area quadrants
    let mut quadrants = [0usize; 4];
    for p in &samples {
        let i = (p.x() >= 0.0) as usize + 2 * (p.y() >= 0.0) as usize;
        quadrants[i] += 1;
    }
    for count in quadrants {
        assert_abs_diff_eq!(count as f32 / N as f32, 0.25, epsilon = 0.02);
    }

    // inner disk of radius 1/sqrt(2) holds half the area
    let inner = samples.iter().filter(|p| p.length_squared() < 0.5).count();
    assert_abs_diff_eq!(inner as f32 / N as f32, 0.5, epsilon = 0.02);
}

#[test]
fn vector_reference_values() {
    assert_eq!(
        Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)),
        Vec3::new(0.0, 0.0, 1.0)
    );
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
    assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
}

#[test]
fn rig_exports_uniforms_after_reposition() {
    let mut rig = CameraRig::new(
        CameraSettings::default().with_focus(FocusMode::Fixed(4.0)),
    )
    .unwrap();
    rig.reposition(|s| s.aperture = 0.5).unwrap();
    let uniforms = rig.uniforms();
    assert_eq!(uniforms.camera_lens_radius, 0.25);
    assert_eq!(uniforms.camera_u, rig.camera().u().to_array());
    assert_eq!(uniforms.camera_v, rig.camera().v().to_array());
}
