use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::*;

/// Seeded source for lens-disk samples. Keeps the seed so a run can be
/// replayed with [`LensSampler::seeded`].
#[derive(Debug, Clone)]
pub struct LensSampler {
    seed: u64,
    rng: StdRng,
}

impl LensSampler {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a seed from the thread generator and logs it.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        info!("lens sampler seed: {}", seed);
        Self::seeded(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn sample_unit_disk(&mut self) -> Vec3 {
        sample_unit_disk(&mut self.rng)
    }

    pub fn lens_offset(&mut self, camera: &Camera) -> Vec3 {
        camera.lens_offset(&mut self.rng)
    }
}
