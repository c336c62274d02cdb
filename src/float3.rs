use rand::Rng;

use crate::EPS;

/// Three `f32` components, the precision of the shader uniforms the camera feeds.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Float3([f32; 3]);

pub type Vec3 = Float3;
pub type Point3 = Float3;

impl Float3 {
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    pub fn z(&self) -> f32 {
        self.0[2]
    }
    pub const fn xaxis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
    pub const fn yaxis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }
    pub const fn zaxis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Float3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }
    pub const fn zero() -> Self {
        Self([0.0; 3])
    }
    pub const fn one() -> Self {
        Self([1.0; 3])
    }
    pub const fn fill(value: f32) -> Self {
        Self([value; 3])
    }
    pub const fn with_z(self, z: f32) -> Self {
        Self([self.0[0], self.0[1], z])
    }
}

impl Float3 {
    pub fn to_array(self) -> [f32; 3] {
        self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.0.iter()
    }
    pub fn near_zero(&self) -> bool {
        self.0.iter().all(|x| x.abs() < EPS)
    }
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl Float3 {
    pub fn dot(&self, rhs: Self) -> f32 {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(0.0, |acc, (l, r)| acc + l * r)
    }
    /// Right-handed: `xaxis().cross(yaxis()) == zaxis()`.
    pub fn cross(&self, rhs: Self) -> Self {
        Self([
            self.y() * rhs.z() - self.z() * rhs.y(),
            -(self.x() * rhs.z() - self.z() * rhs.x()),
            self.x() * rhs.y() - self.y() * rhs.x(),
        ])
    }
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }
    pub fn length_squared(&self) -> f32 {
        self.0.iter().fold(0.0, |acc, x| acc + x * x)
    }
    /// Undefined for a zero-length vector: the components come back NaN.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }
    pub fn lerp(&self, v: Self, t: f32) -> Self {
        *self + (v - *self) * t
    }
}

impl Float3 {
    /// Uniform in `[min, max)` on every axis.
    pub fn random_limit<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Self {
        Self::from_iter((0..3).map(|_| min + rng.gen::<f32>() * (max - min)))
    }
}

impl From<[f32; 3]> for Float3 {
    fn from(value: [f32; 3]) -> Self {
        Self(value)
    }
}

impl From<Float3> for [f32; 3] {
    fn from(value: Float3) -> Self {
        value.0
    }
}

impl FromIterator<f32> for Float3 {
    fn from_iter<T: IntoIterator<Item = f32>>(iter: T) -> Self {
        let mut out = [0.0; 3];
        for (slot, x) in out.iter_mut().zip(iter) {
            *slot = x;
        }
        Self(out)
    }
}

impl std::ops::Neg for Float3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0.map(|x| -x))
    }
}

impl std::ops::AddAssign<Float3> for Float3 {
    fn add_assign(&mut self, rhs: Float3) {
        for i in 0..3 {
            self.0[i] += rhs.0[i];
        }
    }
}

impl std::ops::Add<Float3> for Float3 {
    type Output = Self;
    fn add(self, rhs: Float3) -> Self {
        Self::from_iter(self.iter().zip(rhs.iter()).map(|(l, r)| l + r))
    }
}

impl std::ops::SubAssign<Float3> for Float3 {
    fn sub_assign(&mut self, rhs: Float3) {
        for i in 0..3 {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl std::ops::Sub<Float3> for Float3 {
    type Output = Self;
    fn sub(self, rhs: Float3) -> Self {
        Self::from_iter(self.iter().zip(rhs.iter()).map(|(l, r)| l - r))
    }
}

impl std::ops::Sub<f32> for Float3 {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self {
        Self::from_iter(self.iter().map(|x| x - rhs))
    }
}

impl std::ops::Mul<Float3> for Float3 {
    type Output = Self;
    fn mul(self, rhs: Float3) -> Self {
        Self::from_iter(self.iter().zip(rhs.iter()).map(|(l, r)| l * r))
    }
}

impl std::ops::MulAssign<f32> for Float3 {
    fn mul_assign(&mut self, rhs: f32) {
        for i in 0..3 {
            self.0[i] *= rhs;
        }
    }
}

impl std::ops::Mul<f32> for Float3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::from_iter(self.iter().map(|x| x * rhs))
    }
}

impl std::ops::Mul<i32> for Float3 {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        self * rhs as f32
    }
}

impl std::ops::Mul<Float3> for f32 {
    type Output = Float3;
    fn mul(self, rhs: Float3) -> Float3 {
        rhs * self
    }
}

impl std::ops::Mul<Float3> for i32 {
    type Output = Float3;
    fn mul(self, rhs: Float3) -> Float3 {
        rhs * self as f32
    }
}

impl std::ops::DivAssign<f32> for Float3 {
    fn div_assign(&mut self, rhs: f32) {
        for i in 0..3 {
            self.0[i] /= rhs;
        }
    }
}

// Division by zero follows IEEE 754 and yields inf/NaN components.
impl std::ops::Div<f32> for Float3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::from_iter(self.iter().map(|x| x / rhs))
    }
}

impl std::ops::Div<i32> for Float3 {
    type Output = Self;
    fn div(self, rhs: i32) -> Self {
        self / rhs as f32
    }
}
