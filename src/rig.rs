use log::{debug, warn};

use crate::*;

/// Input-driven changes to the camera placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CameraCommand {
    /// Doubles `lookfrom.z`.
    DollyOut,
    /// Halves `lookfrom.z`.
    DollyIn,
    Resize { width: u32, height: u32 },
}

/// Owns the current placement and the camera derived from it. Both are
/// replaced together, never field by field.
#[derive(Debug, Clone)]
pub struct CameraRig {
    settings: CameraSettings,
    camera: Camera,
}

impl CameraRig {
    pub fn new(settings: CameraSettings) -> Result<Self, CameraError> {
        let camera = settings.try_camera()?;
        Ok(Self { settings, camera })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn uniforms(&self) -> CameraUniforms {
        CameraUniforms::from(&self.camera)
    }

    /// Edits a copy of the settings and recomputes the camera. On error the
    /// rig keeps its previous state.
    pub fn reposition(
        &mut self,
        edit: impl FnOnce(&mut CameraSettings),
    ) -> Result<&Camera, CameraError> {
        let mut settings = self.settings;
        edit(&mut settings);
        match settings.try_camera() {
            Ok(camera) => {
                self.settings = settings;
                self.camera = camera;
                Ok(&self.camera)
            }
            Err(err) => {
                warn!("camera reposition rejected: {}", err);
                Err(err)
            }
        }
    }

    pub fn apply(&mut self, command: CameraCommand) -> Result<&Camera, CameraError> {
        debug!("camera command {:?}", command);
        match command {
            CameraCommand::DollyOut => self.reposition(|s| {
                s.lookfrom = Point3::new(s.lookfrom.x(), s.lookfrom.y(), s.lookfrom.z() * 2.0)
            }),
            CameraCommand::DollyIn => self.reposition(|s| {
                s.lookfrom = Point3::new(s.lookfrom.x(), s.lookfrom.y(), s.lookfrom.z() / 2.0)
            }),
            CameraCommand::Resize { width, height } => {
                if width == 0 || height == 0 {
                    warn!("ignoring resize to {}x{}", width, height);
                    return Err(CameraError::InvalidViewport { width, height });
                }
                self.reposition(|s| s.aspect = aspect_from_viewport(width, height))
            }
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        let settings = CameraSettings::default();
        Self {
            settings,
            camera: settings.camera(),
        }
    }
}
