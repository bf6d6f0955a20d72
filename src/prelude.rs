pub use super::density_region::{BoxedFunction, DensityRegion};
pub use super::envelope::EnvelopeSettings;
pub use super::error::{Component, Error};
pub use super::function::{
    Closure, Constant, Gaussian, LinearGradient, PowerLaw, Profile, ScalarFunction,
};
pub use super::region::{Rect, Region, SuperEllipsoid};
pub use super::state::StateVector;
