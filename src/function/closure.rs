use super::ScalarFunction;

/// Adapter turning any thread-safe closure into a `ScalarFunction`.
///
/// ```rust
/// use icregion::function::{Closure, ScalarFunction};
///
/// let f = Closure::new(|p: &[f64; 3]| p[0] + 2.0 * p[2]);
/// assert_eq!(f.evaluate(&[1.0, 5.0, 2.0]), 5.0);
/// ```
pub struct Closure<F> {
    f: F,
}
impl<F> Closure<F>
where
    F: Fn(&[f64; 3]) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}
impl<F> ScalarFunction for Closure<F>
where
    F: Fn(&[f64; 3]) -> f64 + Send + Sync,
{
    fn evaluate(&self, position: &[f64; 3]) -> f64 {
        (self.f)(position)
    }
}
