use crate::*;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_VIEW_FOV: f32 = 20.0;
pub const DEFAULT_APERTURE: f32 = 0.1;

/// Where the lens is focused.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum FocusMode {
    /// Track the look-at target: focus distance is `|lookfrom - lookat|`.
    #[default]
    LookAt,
    /// Fixed distance along the view direction, independent of the target.
    Fixed(f32),
}

/// Placement parameters a [`Camera`] is derived from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraSettings {
    pub lookfrom: Point3,
    pub lookat: Point3,
    pub view_up: Vec3,
    /// Vertical field of view in degrees.
    pub view_fov: f32,
    pub aspect: f32,
    pub aperture: f32,
    pub focus: FocusMode,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            lookfrom: Point3::new(5.0, 1.0, 5.0),
            lookat: Point3::new(0.0, 0.0, -1.0),
            view_up: Vec3::yaxis(),
            view_fov: DEFAULT_VIEW_FOV,
            aspect: aspect_from_viewport(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            aperture: DEFAULT_APERTURE,
            focus: FocusMode::LookAt,
        }
    }
}

pub fn aspect_from_viewport(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}

impl CameraSettings {
    pub fn with_lookfrom(self, lookfrom: Point3) -> Self {
        Self { lookfrom, ..self }
    }
    pub fn with_lookat(self, lookat: Point3) -> Self {
        Self { lookat, ..self }
    }
    pub fn with_view_up(self, view_up: Vec3) -> Self {
        Self { view_up, ..self }
    }
    pub fn with_view_fov(self, view_fov: f32) -> Self {
        Self { view_fov, ..self }
    }
    pub fn with_aspect(self, aspect: f32) -> Self {
        Self { aspect, ..self }
    }
    pub fn with_aperture(self, aperture: f32) -> Self {
        Self { aperture, ..self }
    }
    pub fn with_focus(self, focus: FocusMode) -> Self {
        Self { focus, ..self }
    }
}

impl CameraSettings {
    pub fn focus_distance(&self) -> f32 {
        match self.focus {
            FocusMode::LookAt => (self.lookfrom - self.lookat).length(),
            FocusMode::Fixed(distance) => distance,
        }
    }

    pub fn camera(&self) -> Camera {
        Camera::from_look_at(
            self.lookfrom,
            self.lookat,
            self.view_up,
            self.view_fov,
            self.aspect,
            self.aperture,
            self.focus_distance(),
        )
    }

    pub fn try_camera(&self) -> Result<Camera, CameraError> {
        Camera::try_from_look_at(
            self.lookfrom,
            self.lookat,
            self.view_up,
            self.view_fov,
            self.aspect,
            self.aperture,
            self.focus_distance(),
        )
    }
}
