/// Rejected camera placement or ray grid.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("eye position and look-at target coincide")]
    CoincidentEyeAndTarget,

    #[error("placement is not finite or overflows f32")]
    NonFinitePlacement,

    #[error("up vector is parallel to the view direction")]
    UpParallelToView,

    #[error("vertical field of view {0} is outside (0, 180) degrees")]
    InvalidFieldOfView(f32),

    #[error("aspect ratio {0} must be positive")]
    InvalidAspectRatio(f32),

    #[error("aperture {0} must not be negative")]
    NegativeAperture(f32),

    #[error("focus distance {0} must be positive")]
    InvalidFocusDistance(f32),

    #[error("viewport {width}x{height} is smaller than 2x2")]
    InvalidViewport { width: u32, height: u32 },
}
