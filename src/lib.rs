//! Thin-lens camera model: vector algebra, camera placement and the lens
//! sampling used to jitter ray origins for depth of field.

mod float3;
pub use self::float3::{Float3, Point3, Vec3};

mod error;
pub use self::error::CameraError;

mod ray;
pub use self::ray::Ray;

mod camera;
pub use self::camera::{sample_unit_disk, Camera};

mod settings;
pub use self::settings::*;

mod sampler;
pub use self::sampler::LensSampler;

mod uniforms;
pub use self::uniforms::{CameraUniforms, UniformValue};

mod rig;
pub use self::rig::{CameraCommand, CameraRig};

mod raygen;
pub use self::raygen::generate_rays;

pub const EPS: f32 = 1e-6;
