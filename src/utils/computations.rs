use num_traits::Float;

use super::special::ln_gamma;

pub fn distance_squared(coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
    let x = coord1[0] - coord2[0];
    let y = coord1[1] - coord2[1];
    let z = coord1[2] - coord2[2];
    x * x + y * y + z * z
}

/// Sum of the absolute values of the components raised to `exponent`.
///
/// This is the generalized norm before taking the final root. Comparing it
/// against 1 is equivalent to comparing the norm itself against 1.
pub fn generalized_norm_sum<F: Float>(coord: &[F; 3], exponent: F) -> F {
    coord[0].abs().powf(exponent) + coord[1].abs().powf(exponent) + coord[2].abs().powf(exponent)
}

/// Generalized (super-ellipsoid) norm of a vector.
///
/// ```rust
/// use icregion::utils::generalized_norm;
///
/// assert!((generalized_norm(&[3.0, 4.0, 0.0], 2.0_f64) - 5.0).abs() < 1e-12);
/// assert!((generalized_norm(&[1.0, -2.0, 3.0], 1.0_f64) - 6.0).abs() < 1e-12);
/// assert!((generalized_norm(&[0.5, -0.9, 0.2], 400.0_f64) - 0.9).abs() < 1e-3);
/// ```
pub fn generalized_norm<F: Float>(coord: &[F; 3], exponent: F) -> F {
    generalized_norm_sum(coord, exponent).powf(exponent.recip())
}

/// Volume of a super-ellipsoid with unit sides, as a fraction of its bounding box.
///
/// For side lengths `l` the volume is `lx * ly * lz * factor`, with
/// `factor = Γ(1 + 1/e)^3 / Γ(1 + 3/e)`.
///
/// ```rust
/// use icregion::utils::volume_factor;
///
/// let pi = std::f64::consts::PI;
/// assert!((volume_factor(2.0) - pi / 6.0).abs() < 1e-10);
/// assert!((volume_factor(1.0) - 1.0 / 6.0).abs() < 1e-10);
/// assert!((volume_factor(1e9) - 1.0).abs() < 1e-6);
/// ```
pub fn volume_factor(exponent: f64) -> f64 {
    let inv = exponent.recip();
    (3.0 * ln_gamma(1.0 + inv) - ln_gamma(1.0 + 3.0 * inv)).exp()
}
