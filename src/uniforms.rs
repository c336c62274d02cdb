use crate::*;

/// Value bound to a named shader parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Float3([f32; 3]),
}

/// Camera state flattened for upload to a per-pixel shading program.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraUniforms {
    pub camera_origin: [f32; 3],
    pub camera_lower_left_corner: [f32; 3],
    pub camera_horizontal: [f32; 3],
    pub camera_vertical: [f32; 3],
    pub camera_lens_radius: f32,
    pub camera_u: [f32; 3],
    pub camera_v: [f32; 3],
}

impl From<&Camera> for CameraUniforms {
    fn from(camera: &Camera) -> Self {
        Self {
            camera_origin: camera.origin().to_array(),
            camera_lower_left_corner: camera.lower_left_corner().to_array(),
            camera_horizontal: camera.horizontal().to_array(),
            camera_vertical: camera.vertical().to_array(),
            camera_lens_radius: camera.lens_radius(),
            camera_u: camera.u().to_array(),
            camera_v: camera.v().to_array(),
        }
    }
}

impl CameraUniforms {
    /// `(name, value)` pairs in upload order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, UniformValue)> {
        [
            ("camera_origin", UniformValue::Float3(self.camera_origin)),
            ("camera_lower_left_corner", UniformValue::Float3(self.camera_lower_left_corner)),
            ("camera_horizontal", UniformValue::Float3(self.camera_horizontal)),
            ("camera_vertical", UniformValue::Float3(self.camera_vertical)),
            ("camera_lens_radius", UniformValue::Float(self.camera_lens_radius)),
            ("camera_u", UniformValue::Float3(self.camera_u)),
            ("camera_v", UniformValue::Float3(self.camera_v)),
        ]
        .into_iter()
    }
}
