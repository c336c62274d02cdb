use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use crate::*;

/// Mixes the row index into the base seed so every row owns its generator.
fn row_seed(seed: u64, row: u32) -> u64 {
    seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// One thin-lens ray per pixel, row-major starting at the top row.
///
/// Pixel `(x, y)` maps to `s = x / (width - 1)`, `t = (height - 1 - y) / (height - 1)`.
/// Rows are generated in parallel, each from its own generator seeded from
/// `seed`, so the output only depends on the arguments.
pub fn generate_rays(
    camera: &Camera,
    width: u32,
    height: u32,
    seed: u64,
) -> Result<Vec<Ray>, CameraError> {
    if width < 2 || height < 2 {
        return Err(CameraError::InvalidViewport { width, height });
    }
    debug!("generating {}x{} rays with seed {}", width, height, seed);

    let rows = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed, y));
            let t = (height - y - 1) as f32 / (height - 1) as f32;
            (0..width)
                .map(|x| {
                    let s = x as f32 / (width - 1) as f32;
                    camera.ray(s, t, &mut rng)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    Ok(rows.into_iter().flatten().collect())
}
