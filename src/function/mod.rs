mod closure;
mod profiles;

pub use closure::Closure;
pub use profiles::{Constant, Gaussian, LinearGradient, PowerLaw};

use enum_dispatch::enum_dispatch;

/// Built-in analytic density profiles
#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum Profile {
    Constant,
    LinearGradient,
    Gaussian,
    PowerLaw,
}
#[enum_dispatch(Profile)]
/// Scalar function of position, e.g. a density or a velocity component.
///
/// Implementations must be deterministic and free of side effects. A failed
/// evaluation (domain error, division by zero) is signalled by returning NaN
/// or an infinite value, which the region reports as an error.
pub trait ScalarFunction: Send + Sync {
    fn evaluate(&self, position: &[f64; 3]) -> f64;
}
