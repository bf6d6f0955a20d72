//! Log-gamma approximation used by the closed-form volume.

/// Natural logarithm of the gamma function.
///
/// Lanczos approximation with `g = 7` and nine coefficients, using the
/// reflection formula below `0.5`. Relative error is around `1e-15` for
/// positive arguments.
///
/// ```rust
/// use icregion::utils::special::ln_gamma;
///
/// assert!(ln_gamma(1.0).abs() < 1e-12);
/// assert!((ln_gamma(5.0) - 24f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let sum = COEFFICIENTS[1..]
        .iter()
        .enumerate()
        .fold(COEFFICIENTS[0], |acc, (i, &c)| acc + c / (x + i as f64 + 1.0));

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ln_gamma_matches_log_factorials() {
        let mut ln_factorial = 0.0;
        for n in 1..20 {
            assert!((ln_gamma(n as f64) - ln_factorial).abs() < 1e-10);
            ln_factorial += (n as f64).ln();
        }
    }

    #[test]
    fn ln_gamma_half_integers() {
        let ln_sqrt_pi = 0.5 * std::f64::consts::PI.ln();
        assert!((ln_gamma(0.5) - ln_sqrt_pi).abs() < 1e-12);
        assert!((ln_gamma(1.5) - (0.5f64.ln() + ln_sqrt_pi)).abs() < 1e-12);
        assert!((ln_gamma(2.5) - (0.75f64.ln() + ln_sqrt_pi)).abs() < 1e-12);
    }
}
