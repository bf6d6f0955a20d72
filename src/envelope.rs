//! Upper bounds on density functions over a region.
//!
//! Rejection sampling needs a value `M` with `f(p) <= M` everywhere in the
//! sampled volume. An underestimate silently undersamples the densest parts
//! of a region, while an overestimate only costs rejected draws, so the bound
//! is computed conservatively:
//!
//! 1. a regular lattice sweep over the bounding box (faces included) and the
//!    origin, keeping only nodes inside the region and outside the cut-out,
//! 2. a compass search with step halving started from the best nodes, which
//!    climbs towards peaks that fall between lattice nodes,
//! 3. a multiplicative safety margin on the best value found.

use crate::{
    region::{Region, SuperEllipsoid},
    Error,
};

/// Parameters of the bounding routine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopeSettings {
    resolution: usize,
    refine_candidates: usize,
    refine_iterations: usize,
    safety_margin: f64,
}
impl Default for EnvelopeSettings {
    fn default() -> Self {
        Self {
            resolution: 24,
            refine_candidates: 8,
            refine_iterations: 24,
            safety_margin: 0.05,
        }
    }
}
impl EnvelopeSettings {
    /// Number of lattice cells along each axis of the bounding box
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }
    /// Number of best lattice nodes used as starting points for refinement
    pub fn with_refine_candidates(mut self, refine_candidates: usize) -> Self {
        self.refine_candidates = refine_candidates;
        self
    }
    pub fn with_refine_iterations(mut self, refine_iterations: usize) -> Self {
        self.refine_iterations = refine_iterations;
        self
    }
    /// Relative margin added on top of the best value found
    pub fn with_safety_margin(mut self, safety_margin: f64) -> Self {
        self.safety_margin = safety_margin;
        self
    }
    pub fn resolution(&self) -> usize {
        self.resolution
    }
    pub fn refine_candidates(&self) -> usize {
        self.refine_candidates
    }
    pub fn refine_iterations(&self) -> usize {
        self.refine_iterations
    }
    pub fn safety_margin(&self) -> f64 {
        self.safety_margin
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.resolution < 2 {
            return Err(Error::InvalidSettings(format!(
                "resolution should be at least 2, found {}",
                self.resolution
            )));
        }
        if !(self.safety_margin.is_finite() && self.safety_margin >= 0.0) {
            return Err(Error::InvalidSettings(format!(
                "safety margin should be finite and non-negative, found {}",
                self.safety_margin
            )));
        }
        Ok(())
    }
}

/// Result of the bounding routine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    max_value: f64,
    sampled_max: Option<(f64, [f64; 3])>,
    num_evaluations: usize,
}
impl Envelope {
    /// Bound `evaluate` over `shape`, skipping points inside `cut_out`.
    ///
    /// `evaluate` should fail for values that cannot be used, the first
    /// failure aborts the computation.
    ///
    /// ```rust
    /// use icregion::envelope::{Envelope, EnvelopeSettings};
    /// use icregion::region::SuperEllipsoid;
    ///
    /// let shape = SuperEllipsoid::new([0.0; 3], [2.0; 3], 2.0).unwrap();
    /// let settings = EnvelopeSettings::default().with_safety_margin(0.0);
    /// let envelope = Envelope::compute(&shape, None, &settings, |p| Ok(1.0 - p[0])).unwrap();
    /// assert!((envelope.max_value() - 2.0).abs() < 1e-6);
    /// ```
    pub fn compute<F>(
        shape: &SuperEllipsoid,
        cut_out: Option<&SuperEllipsoid>,
        settings: &EnvelopeSettings,
        evaluate: F,
    ) -> Result<Self, Error>
    where
        F: Fn(&[f64; 3]) -> Result<f64, Error>,
    {
        let admissible =
            |p: &[f64; 3]| shape.inside(p) && !cut_out.map_or(false, |c| c.inside(p));

        let n = settings.resolution;
        let bounding_box = shape.bounding_box();
        let lo = bounding_box.lo();
        let lengths = bounding_box.lengths();
        let step = [
            lengths[0] / n as f64,
            lengths[1] / n as f64,
            lengths[2] / n as f64,
        ];
        let mut num_evaluations = 0;

        let mut samples: Vec<(f64, [f64; 3])> = Vec::new();
        let origin = shape.origin();
        if admissible(&origin) {
            samples.push((evaluate(&origin)?, origin));
            num_evaluations += 1;
        }
        for i in 0..=n {
            for j in 0..=n {
                for k in 0..=n {
                    let p = [
                        lo[0] + step[0] * i as f64,
                        lo[1] + step[1] * j as f64,
                        lo[2] + step[2] * k as f64,
                    ];
                    if !admissible(&p) {
                        continue;
                    }
                    samples.push((evaluate(&p)?, p));
                    num_evaluations += 1;
                }
            }
        }

        samples.sort_by(|a, b| b.0.total_cmp(&a.0));
        let mut best = samples.first().copied();

        for &(value, start) in samples.iter().take(settings.refine_candidates) {
            let (refined, evaluations) = compass_search(
                start,
                value,
                step,
                settings.refine_iterations,
                &admissible,
                &evaluate,
            )?;
            num_evaluations += evaluations;
            if best.map_or(true, |(b, _)| refined.0 > b) {
                best = Some(refined);
            }
        }

        let max_value = match best {
            Some((value, _)) if value > 0.0 => value * (1.0 + settings.safety_margin),
            _ => 0.0,
        };
        Ok(Self {
            max_value,
            sampled_max: best,
            num_evaluations,
        })
    }

    /// Upper bound, including the safety margin. Zero if the function is
    /// nowhere positive or no admissible point was found.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
    /// Largest value actually evaluated, and where
    pub fn sampled_max(&self) -> Option<(f64, [f64; 3])> {
        self.sampled_max
    }
    pub fn num_evaluations(&self) -> usize {
        self.num_evaluations
    }
}

/// Hill climb along the coordinate axes, halving the step when stuck.
///
/// Returns the best point found and the number of evaluations used.
fn compass_search<A, F>(
    start: [f64; 3],
    start_value: f64,
    initial_step: [f64; 3],
    iterations: usize,
    admissible: &A,
    evaluate: &F,
) -> Result<((f64, [f64; 3]), usize), Error>
where
    A: Fn(&[f64; 3]) -> bool,
    F: Fn(&[f64; 3]) -> Result<f64, Error>,
{
    let mut current = start;
    let mut current_value = start_value;
    let mut step = initial_step;
    let mut num_evaluations = 0;

    for _ in 0..iterations {
        let mut best_move: Option<(f64, [f64; 3])> = None;
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let mut p = current;
                p[axis] += sign * step[axis];
                if !admissible(&p) {
                    continue;
                }
                let value = evaluate(&p)?;
                num_evaluations += 1;
                if value > best_move.map_or(current_value, |(v, _)| v) {
                    best_move = Some((value, p));
                }
            }
        }
        match best_move {
            Some((value, p)) => {
                current = p;
                current_value = value;
            }
            None => {
                step = [0.5 * step[0], 0.5 * step[1], 0.5 * step[2]];
            }
        }
    }
    Ok(((current_value, current), num_evaluations))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> SuperEllipsoid {
        SuperEllipsoid::new([0.0; 3], [2.0; 3], 2.0).unwrap()
    }

    #[test]
    fn settings_validation() {
        assert!(EnvelopeSettings::default().validate().is_ok());
        assert!(matches!(
            EnvelopeSettings::default().with_resolution(1).validate(),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            EnvelopeSettings::default()
                .with_safety_margin(-0.1)
                .validate(),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn constant_function_gets_margin() {
        let settings = EnvelopeSettings::default().with_safety_margin(0.1);
        let envelope = Envelope::compute(&unit_sphere(), None, &settings, |_| Ok(2.0)).unwrap();
        assert!((envelope.max_value() - 2.2).abs() < 1e-12);
        assert!(envelope.num_evaluations() > 0);
    }

    /// Narrow peak away from every node of a 60-cell lattice
    fn narrow_peak(p: &[f64; 3]) -> Result<f64, Error> {
        let center = [0.123, -0.217, 0.311];
        let width: f64 = 0.01;
        let r2 = (p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2) + (p[2] - center[2]).powi(2);
        Ok(1.0 + 10.0 * (-0.5 * r2 / (width * width)).exp())
    }

    #[test]
    fn sharp_peak_between_nodes_is_found() {
        let settings = EnvelopeSettings::default()
            .with_resolution(60)
            .with_safety_margin(0.0);
        let envelope = Envelope::compute(&unit_sphere(), None, &settings, narrow_peak).unwrap();
        let (value, location) = envelope.sampled_max().unwrap();
        assert!(value > 10.0, "peak underestimated: {}", value);
        assert!((location[0] - 0.123).abs() < 0.02);
    }

    #[test]
    fn lattice_alone_misses_sharp_peak() {
        let lattice_only = EnvelopeSettings::default()
            .with_resolution(60)
            .with_safety_margin(0.0)
            .with_refine_iterations(0);
        let no_candidates = EnvelopeSettings::default()
            .with_resolution(60)
            .with_safety_margin(0.0)
            .with_refine_candidates(0);
        let refined = EnvelopeSettings::default()
            .with_resolution(60)
            .with_safety_margin(0.0);

        let shape = unit_sphere();
        let coarse = Envelope::compute(&shape, None, &lattice_only, narrow_peak).unwrap();
        let skipped = Envelope::compute(&shape, None, &no_candidates, narrow_peak).unwrap();
        let fine = Envelope::compute(&shape, None, &refined, narrow_peak).unwrap();

        // the closest node is about 1.6 widths from the peak
        assert!(coarse.max_value() < 3.0, "{}", coarse.max_value());
        assert_eq!(coarse.max_value(), skipped.max_value());
        assert!(fine.max_value() > 10.0, "{}", fine.max_value());
        assert!(fine.num_evaluations() > coarse.num_evaluations());
    }

    #[test]
    fn cut_out_points_are_skipped() {
        let inner = SuperEllipsoid::new([0.0; 3], [1.0; 3], 2.0).unwrap();
        let settings = EnvelopeSettings::default().with_safety_margin(0.0);
        let evaluate = |p: &[f64; 3]| {
            assert!(!inner.inside(p), "evaluated inside the cut-out at {:?}", p);
            Ok::<f64, Error>(1.0 / (0.1 + p[0] * p[0] + p[1] * p[1] + p[2] * p[2]))
        };
        let envelope = Envelope::compute(&unit_sphere(), Some(&inner), &settings, evaluate).unwrap();
        // the function peaks at the origin, which is cut out
        assert!(envelope.max_value() < 1.0 / (0.1 + 0.25) + 1e-9);
        assert!(envelope.max_value() > 2.5);
    }

    #[test]
    fn fully_cut_out_region_has_zero_envelope() {
        let settings = EnvelopeSettings::default();
        let outer = unit_sphere();
        let envelope = Envelope::compute(&unit_sphere(), Some(&outer), &settings, |_| Ok(1.0)).unwrap();
        assert_eq!(envelope.max_value(), 0.0);
        assert!(envelope.sampled_max().is_none());
    }

    #[test]
    fn evaluation_errors_abort() {
        let settings = EnvelopeSettings::default();
        let result = Envelope::compute(&unit_sphere(), None, &settings, |p| {
            Err(Error::Evaluation {
                component: crate::Component::Hydro,
                index: 0,
                position: *p,
                value: f64::NAN,
            })
        });
        assert!(matches!(result, Err(Error::Evaluation { .. })));
    }
}
