use super::ScalarFunction;
use crate::utils::distance_squared;

/// Same value everywhere
#[derive(Clone, Copy, Debug)]
pub struct Constant {
    value: f64,
}
impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
    pub fn value(&self) -> f64 {
        self.value
    }
}
impl ScalarFunction for Constant {
    fn evaluate(&self, _position: &[f64; 3]) -> f64 {
        self.value
    }
}

/// Linear profile `base + gradient . (p - origin)`
#[derive(Clone, Copy, Debug)]
pub struct LinearGradient {
    base: f64,
    origin: [f64; 3],
    gradient: [f64; 3],
}
impl LinearGradient {
    pub fn new(base: f64, origin: [f64; 3], gradient: [f64; 3]) -> Self {
        Self {
            base,
            origin,
            gradient,
        }
    }
}
impl ScalarFunction for LinearGradient {
    fn evaluate(&self, position: &[f64; 3]) -> f64 {
        self.base
            + self.gradient[0] * (position[0] - self.origin[0])
            + self.gradient[1] * (position[1] - self.origin[1])
            + self.gradient[2] * (position[2] - self.origin[2])
    }
}

/// Spherical Gaussian bump `amplitude * exp(-r^2 / (2 width^2))`
#[derive(Clone, Copy, Debug)]
pub struct Gaussian {
    amplitude: f64,
    center: [f64; 3],
    width: f64,
}
impl Gaussian {
    pub fn new(amplitude: f64, center: [f64; 3], width: f64) -> Self {
        assert!(width > 0.0, "Gaussian width should be positive, found {}", width);
        Self {
            amplitude,
            center,
            width,
        }
    }
}
impl ScalarFunction for Gaussian {
    fn evaluate(&self, position: &[f64; 3]) -> f64 {
        let r2 = distance_squared(position, &self.center);
        self.amplitude * (-0.5 * r2 / (self.width * self.width)).exp()
    }
}

/// Cored power law `amplitude * (1 + r / scale)^(-index)`
#[derive(Clone, Copy, Debug)]
pub struct PowerLaw {
    amplitude: f64,
    center: [f64; 3],
    scale: f64,
    index: f64,
}
impl PowerLaw {
    pub fn new(amplitude: f64, center: [f64; 3], scale: f64, index: f64) -> Self {
        assert!(scale > 0.0, "Power law scale should be positive, found {}", scale);
        Self {
            amplitude,
            center,
            scale,
            index,
        }
    }
}
impl ScalarFunction for PowerLaw {
    fn evaluate(&self, position: &[f64; 3]) -> f64 {
        let r = distance_squared(position, &self.center).sqrt();
        self.amplitude * (1.0 + r / self.scale).powf(-self.index)
    }
}
