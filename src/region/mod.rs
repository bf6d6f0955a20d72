pub mod rect;
pub mod super_ellipsoid;
pub use rect::Rect;
pub use super_ellipsoid::SuperEllipsoid;

use rand::Rng;
use rand_distr::{Distribution, Uniform};

pub trait Region {
    fn contains(&self, coord: &[f64; 3]) -> bool;
    /// Axis-aligned box enclosing the region
    fn bounding_box(&self) -> Rect;

    /// Uniform random coordinate within the bounding box of the region.
    ///
    /// The coordinate is not necessarily contained in the region itself.
    fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        let bounding_box = self.bounding_box();
        let lo = bounding_box.lo();
        let hi = bounding_box.hi();
        [
            Uniform::new_inclusive(lo[0], hi[0]).sample(rng),
            Uniform::new_inclusive(lo[1], hi[1]).sample(rng),
            Uniform::new_inclusive(lo[2], hi[2]).sample(rng),
        ]
    }

    /// Uniform random coordinate inside the region.
    ///
    /// Draws from the bounding box until a coordinate lies inside, giving up
    /// after `max_attempts` draws.
    fn random_inside<R: Rng + ?Sized>(&self, rng: &mut R, max_attempts: usize) -> Option<[f64; 3]> {
        (0..max_attempts)
            .map(|_| self.random_coord(&mut *rng))
            .find(|coord| self.contains(coord))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn random_inside_returns_contained_points() {
        let sphere = SuperEllipsoid::new([1.0, 0.0, -1.0], [1.0, 2.0, 3.0], 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..1000 {
            let coord = sphere.random_inside(&mut rng, 1000).unwrap();
            assert!(sphere.contains(&coord));
        }
    }

    #[test]
    fn random_inside_gives_up_after_budget() {
        let sphere = SuperEllipsoid::new([0.0; 3], [1.0; 3], 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(22);
        assert!(sphere.random_inside(&mut rng, 0).is_none());

        // a thin diamond fills a small share of its bounding box
        let diamond = SuperEllipsoid::new([0.0; 3], [1.0; 3], 0.2).unwrap();
        let misses = (0..100)
            .filter(|_| diamond.random_inside(&mut rng, 1).is_none())
            .count();
        assert!(misses > 50, "{}", misses);
    }
}
