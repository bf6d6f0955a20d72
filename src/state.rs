use std::ops::{Index, IndexMut};

/// Number of hydrodynamical quantities in a state
pub const NUM_COMPONENTS: usize = 5;

/// Hydrodynamical state at a point: density, velocity and pressure.
///
/// Components can also be addressed by index, in the order
/// density, vx, vy, vz, pressure.
///
/// ```rust
/// use icregion::StateVector;
///
/// let state = StateVector::new(1.0, [0.1, 0.2, 0.3], 2.0);
/// assert_eq!(state[0], 1.0);
/// assert_eq!(state[2], 0.2);
/// assert_eq!(state[4], 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StateVector {
    density: f64,
    velocity: [f64; 3],
    pressure: f64,
}
impl StateVector {
    pub fn new(density: f64, velocity: [f64; 3], pressure: f64) -> Self {
        Self {
            density,
            velocity,
            pressure,
        }
    }
    pub fn density(&self) -> f64 {
        self.density
    }
    pub fn velocity(&self) -> [f64; 3] {
        self.velocity
    }
    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

impl Index<usize> for StateVector {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.density,
            1..=3 => &self.velocity[index - 1],
            4 => &self.pressure,
            _ => panic!(
                "State index {} out of range, a state has {} components",
                index, NUM_COMPONENTS
            ),
        }
    }
}
impl IndexMut<usize> for StateVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.density,
            1..=3 => &mut self.velocity[index - 1],
            4 => &mut self.pressure,
            _ => panic!(
                "State index {} out of range, a state has {} components",
                index, NUM_COMPONENTS
            ),
        }
    }
}
