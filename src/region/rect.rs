use super::Region;

/// Axis-aligned rectangular box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    lo: [f64; 3],
    hi: [f64; 3],
}
impl Rect {
    pub fn new(lo: [f64; 3], hi: [f64; 3]) -> Self {
        assert!(
            (0..3).all(|i| lo[i] <= hi[i]),
            "Lower corner {:?} should not exceed upper corner {:?}",
            lo,
            hi
        );
        Self { lo, hi }
    }
    /// Box with the given center and full side lengths
    pub fn from_center(center: &[f64; 3], sides: &[f64; 3]) -> Self {
        Self::new(
            [
                center[0] - 0.5 * sides[0],
                center[1] - 0.5 * sides[1],
                center[2] - 0.5 * sides[2],
            ],
            [
                center[0] + 0.5 * sides[0],
                center[1] + 0.5 * sides[1],
                center[2] + 0.5 * sides[2],
            ],
        )
    }
    pub fn lo(&self) -> [f64; 3] {
        self.lo
    }
    pub fn hi(&self) -> [f64; 3] {
        self.hi
    }
    pub fn lengths(&self) -> [f64; 3] {
        [
            self.hi[0] - self.lo[0],
            self.hi[1] - self.lo[1],
            self.hi[2] - self.lo[2],
        ]
    }
    pub fn volume(&self) -> f64 {
        let [lx, ly, lz] = self.lengths();
        lx * ly * lz
    }
}
impl Region for Rect {
    fn contains(&self, coord: &[f64; 3]) -> bool {
        self.lo[0] <= coord[0]
            && coord[0] <= self.hi[0]
            && self.lo[1] <= coord[1]
            && coord[1] <= self.hi[1]
            && self.lo[2] <= coord[2]
            && coord[2] <= self.hi[2]
    }
    fn bounding_box(&self) -> Rect {
        *self
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn random_coords_stay_in_box() {
        let rect = Rect::from_center(&[1.0, -2.0, 3.0], &[2.0, 4.0, 0.5]);
        assert_eq!(rect.lo(), [0.0, -4.0, 2.75]);
        assert!((rect.volume() - 4.0).abs() < 1e-12);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rect.contains(&rect.random_coord(&mut rng)));
        }
    }
}
