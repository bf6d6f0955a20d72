use super::{Rect, Region};
use crate::{
    utils::{generalized_norm, generalized_norm_sum, volume_factor},
    Error,
};

/// Super-ellipsoid shaped region.
///
/// With origin `o`, side lengths `l` and exponent `e`, a point `x` is inside if
///
/// `( |2(x_x-o_x)/l_x|^e + |2(x_y-o_y)/l_y|^e + |2(x_z-o_z)/l_z|^e )^(1/e) <= 1`
///
/// `e = 2` gives an ellipsoid, `e = 1` a diamond, and large exponents approach
/// a box.
///
/// ```rust
/// use icregion::region::SuperEllipsoid;
///
/// let sphere = SuperEllipsoid::new([0.0; 3], [2.0; 3], 2.0).unwrap();
/// assert!(sphere.inside(&[0.5, 0.5, 0.5]));
/// assert!(!sphere.inside(&[0.7, 0.7, 0.7]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuperEllipsoid {
    origin: [f64; 3],
    sides: [f64; 3],
    exponent: f64,
}
impl SuperEllipsoid {
    pub fn new(origin: [f64; 3], sides: [f64; 3], exponent: f64) -> Result<Self, Error> {
        if !origin.iter().all(|o| o.is_finite()) {
            return Err(Error::InvalidOrigin(origin));
        }
        if !sides.iter().all(|&l| l.is_finite() && l > 0.0) {
            return Err(Error::InvalidSides(sides));
        }
        if !(exponent.is_finite() && exponent > 0.0) {
            return Err(Error::InvalidExponent(exponent));
        }
        Ok(Self {
            origin,
            sides,
            exponent,
        })
    }
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Position relative to the origin, in units of half the side lengths
    fn scaled(&self, position: &[f64; 3]) -> [f64; 3] {
        [
            2.0 * (position[0] - self.origin[0]) / self.sides[0],
            2.0 * (position[1] - self.origin[1]) / self.sides[1],
            2.0 * (position[2] - self.origin[2]) / self.sides[2],
        ]
    }
    /// Generalized-norm distance from the origin; the boundary is at 1
    pub fn norm(&self, position: &[f64; 3]) -> f64 {
        generalized_norm(&self.scaled(position), self.exponent)
    }
    pub fn inside(&self, position: &[f64; 3]) -> bool {
        generalized_norm_sum(&self.scaled(position), self.exponent) <= 1.0
    }
    /// Closed-form volume of the shape
    pub fn volume(&self) -> f64 {
        self.sides[0] * self.sides[1] * self.sides[2] * volume_factor(self.exponent)
    }
}
impl Region for SuperEllipsoid {
    fn contains(&self, coord: &[f64; 3]) -> bool {
        self.inside(coord)
    }
    fn bounding_box(&self) -> Rect {
        Rect::from_center(&self.origin, &self.sides)
    }
}
