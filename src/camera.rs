use log::debug;
use rand::Rng;

use crate::*;

/// Thin-lens camera: an orthonormal basis plus the viewport spanned at the
/// focus distance. A viewport point at `(s, t)` is
/// `lower_left_corner + s * horizontal + t * vertical`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Builds the camera without checking the placement.
    ///
    /// `lookfrom == lookat`, or `view_up` parallel to the view direction,
    /// normalizes a zero vector and every derived field comes back NaN.
    /// Use [`Camera::try_from_look_at`] when the input is not trusted.
    pub fn from_look_at(
        lookfrom: Point3,
        lookat: Point3,
        view_up: Vec3,
        view_fov: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let half_h = (view_fov.to_radians() * 0.5).tan();
        let half_w = aspect * half_h;
        let w = (lookfrom - lookat).normalize();
        let u = view_up.cross(w).normalize();
        let v = w.cross(u);
        let uw = half_w * focus_dist * u;
        let vh = half_h * focus_dist * v;
        let camera = Self {
            origin: lookfrom,
            lower_left_corner: lookfrom - uw - vh - focus_dist * w,
            horizontal: 2.0 * uw,
            vertical: 2.0 * vh,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        };
        debug!(
            "camera at {:?} looking at {:?}, fov {} aspect {} aperture {} focus {}",
            lookfrom.to_array(),
            lookat.to_array(),
            view_fov,
            aspect,
            aperture,
            focus_dist
        );
        camera
    }

    /// Same computation as [`Camera::from_look_at`], rejecting placements
    /// that would produce a degenerate basis or viewport.
    pub fn try_from_look_at(
        lookfrom: Point3,
        lookat: Point3,
        view_up: Vec3,
        view_fov: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Result<Self, CameraError> {
        let back = lookfrom - lookat;
        if !(lookfrom.is_finite() && lookat.is_finite() && view_up.is_finite()) {
            return Err(CameraError::NonFinitePlacement);
        }
        if !(back.length_squared().is_finite() && view_up.length_squared().is_finite()) {
            return Err(CameraError::NonFinitePlacement);
        }
        if back.length_squared() == 0.0 {
            return Err(CameraError::CoincidentEyeAndTarget);
        }
        // compared on unit vectors so the length of `view_up` does not matter
        if view_up.length_squared() == 0.0
            || view_up.normalize().cross(back.normalize()).length() < EPS
        {
            return Err(CameraError::UpParallelToView);
        }
        if !(view_fov > 0.0 && view_fov < 180.0) {
            return Err(CameraError::InvalidFieldOfView(view_fov));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(CameraError::InvalidAspectRatio(aspect));
        }
        if !(aperture >= 0.0 && aperture.is_finite()) {
            return Err(CameraError::NegativeAperture(aperture));
        }
        if !(focus_dist > 0.0 && focus_dist.is_finite()) {
            return Err(CameraError::InvalidFocusDistance(focus_dist));
        }
        let camera = Self::from_look_at(
            lookfrom, lookat, view_up, view_fov, aspect, aperture, focus_dist,
        );
        // underflow in the basis or overflow in the viewport spans
        if !camera.is_finite() {
            return Err(CameraError::NonFinitePlacement);
        }
        Ok(camera)
    }

    pub fn is_finite(&self) -> bool {
        [
            self.origin,
            self.lower_left_corner,
            self.horizontal,
            self.vertical,
            self.u,
            self.v,
            self.w,
        ]
        .iter()
        .all(Float3::is_finite)
            && self.lens_radius.is_finite()
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }
    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }
    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }
    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
    /// Camera right.
    pub fn u(&self) -> Vec3 {
        self.u
    }
    /// Camera up.
    pub fn v(&self) -> Vec3 {
        self.v
    }
    /// Points from the target back toward the eye.
    pub fn w(&self) -> Vec3 {
        self.w
    }
    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    pub fn viewport_point(&self, s: f32, t: f32) -> Point3 {
        self.lower_left_corner + s * self.horizontal + t * self.vertical
    }

    /// Offset of a jittered ray origin from `origin`, in the `u`/`v` plane.
    pub fn lens_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let rd = self.lens_radius * sample_unit_disk(rng);
        rd.x() * self.u + rd.y() * self.v
    }

    /// Ray through `(s, t)` from the exact eye point, ignoring the aperture.
    pub fn pinhole_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(self.origin, self.viewport_point(s, t) - self.origin)
    }

    /// Ray through `(s, t)` from a point sampled on the lens disk.
    pub fn ray<R: Rng + ?Sized>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let origin = self.origin + self.lens_offset(rng);
        Ray::new(origin, self.viewport_point(s, t) - origin)
    }
}

/// Uniform point on the unit disk in the xy plane, by rejection from the
/// enclosing square. `z` is always zero.
pub fn sample_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let point = Vec3::random_limit(rng, -1.0, 1.0).with_z(0.0);
        if point.length_squared() < 1.0 {
            return point;
        }
    }
}
