use std::fmt;

use thiserror::Error;

/// Which family of density functions an operation refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Hydro,
    DarkMatter,
}
impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Hydro => write!(f, "hydro"),
            Component::DarkMatter => write!(f, "dark matter"),
        }
    }
}

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    /// Side lengths must be finite and strictly positive.
    #[error("Side lengths should be positive, found {0:?}")]
    InvalidSides([f64; 3]),

    /// The shape exponent must be finite and strictly positive.
    #[error("Exponent should be positive, found {0}")]
    InvalidExponent(f64),

    #[error("Origin should be finite, found {0:?}")]
    InvalidOrigin([f64; 3]),

    #[error("Invalid number of {component} functions: {count} given, expected {min} to {max}")]
    InvalidFunctionCount {
        component: Component,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid envelope settings: {0}")]
    InvalidSettings(String),

    /// A density function returned NaN or an infinite value.
    ///
    /// The value is reported as is, it is never clamped to zero.
    #[error("{component} function {index} evaluated to {value} at {position:?}")]
    Evaluation {
        component: Component,
        index: usize,
        position: [f64; 3],
        value: f64,
    },

    #[error("No {0} function defined for this region")]
    MissingFunction(Component),

    /// The envelope is zero, so every rejection draw would fail.
    #[error("Maximum {0} value is zero, cannot sample from this region")]
    DegenerateEnvelope(Component),
}
