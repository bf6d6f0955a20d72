//! Region-based stochastic density sampling for initial conditions.
//!
//! A [`DensityRegion`] is a super-ellipsoid shaped volume with scalar
//! functions for the hydrodynamical state and the dark matter density. It
//! answers containment queries, keeps upper bounds on its densities, and
//! provides rejection tests so that an initial-condition generator can place
//! particles following the density field.

pub mod density_region;
pub mod envelope;
pub mod error;
pub mod function;
pub mod prelude;
pub mod region;
pub mod state;
pub mod utils;

pub use density_region::{BoxedFunction, DensityRegion};
pub use envelope::{Envelope, EnvelopeSettings};
pub use error::{Component, Error};
pub use function::{Profile, ScalarFunction};
pub use region::{Rect, Region, SuperEllipsoid};
pub use state::StateVector;
