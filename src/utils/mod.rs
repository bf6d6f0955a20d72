/// Group of useful computations
pub mod computations;
pub mod special;

pub use computations::*;
