use log::info;
use thinlens::*;

const GRID_WIDTH: u32 = 60;
const GRID_HEIGHT: u32 = 30;

fn log_uniforms(rig: &CameraRig) {
    for (name, value) in rig.uniforms().iter() {
        info!("{:<26} {:?}", name, value);
    }
}

fn main() -> Result<(), CameraError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rig = CameraRig::new(CameraSettings::default())?;
    info!(
        "focus distance {:.3} (lens radius {})",
        rig.settings().focus_distance(),
        rig.camera().lens_radius()
    );
    log_uniforms(&rig);

    rig.apply(CameraCommand::DollyOut)?;
    info!("dolly out -> origin {:?}", rig.camera().origin().to_array());
    rig.apply(CameraCommand::DollyIn)?;
    info!("dolly in -> origin {:?}", rig.camera().origin().to_array());

    let mut sampler = LensSampler::from_entropy();
    info!(
        "sample lens offset {:?}",
        sampler.lens_offset(rig.camera()).to_array()
    );
    let rays = generate_rays(rig.camera(), GRID_WIDTH, GRID_HEIGHT, sampler.seed())?;
    let spread = rays
        .iter()
        .map(|ray| (ray.origin - rig.camera().origin()).length())
        .fold(0.0f32, f32::max);
    info!(
        "generated {} rays, max lens offset {:.4}",
        rays.len(),
        spread
    );
    Ok(())
}
