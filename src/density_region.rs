use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    envelope::{Envelope, EnvelopeSettings},
    function::ScalarFunction,
    region::{Rect, Region, SuperEllipsoid},
    state::{StateVector, NUM_COMPONENTS},
    Component, Error,
};

/// Owned density function
pub type BoxedFunction = Box<dyn ScalarFunction>;

/// Maximum number of dark matter functions; only a density is tracked
pub const MAX_DM_FUNCTIONS: usize = 1;

/// Region with density functions, the building block of initial conditions.
///
/// The hydro functions give, in order, the density, the three velocity
/// components and the pressure; trailing ones may be omitted. The first hydro
/// function and the dark matter function are sampled with rejection sampling,
/// using upper bounds that are computed once at construction.
///
/// ```rust
/// use icregion::function::Constant;
/// use icregion::DensityRegion;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let region = DensityRegion::new(
///     [0.0; 3],
///     [1.0; 3],
///     2.0,
///     vec![Box::new(Constant::new(1.0))],
///     vec![],
/// )
/// .unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// assert!(region.inside(&[0.1, 0.1, 0.1]));
/// assert!(region.accept_hydro(&[0.1, 0.1, 0.1], &mut rng).is_ok());
/// ```
pub struct DensityRegion {
    geometry: SuperEllipsoid,
    hydro_functions: Vec<BoxedFunction>,
    dm_functions: Vec<BoxedFunction>,
    max_value_hydro: f64,
    max_value_dm: f64,
    volume: f64,
    settings: EnvelopeSettings,
}
impl DensityRegion {
    // Creation

    /// Create a region using the default envelope settings
    pub fn new(
        origin: [f64; 3],
        sides: [f64; 3],
        exponent: f64,
        hydro_functions: Vec<BoxedFunction>,
        dm_functions: Vec<BoxedFunction>,
    ) -> Result<Self, Error> {
        Self::with_settings(
            origin,
            sides,
            exponent,
            hydro_functions,
            dm_functions,
            EnvelopeSettings::default(),
        )
    }
    /// Create a region whose envelopes are computed with `settings`
    pub fn with_settings(
        origin: [f64; 3],
        sides: [f64; 3],
        exponent: f64,
        hydro_functions: Vec<BoxedFunction>,
        dm_functions: Vec<BoxedFunction>,
        settings: EnvelopeSettings,
    ) -> Result<Self, Error> {
        settings.validate()?;
        let geometry = SuperEllipsoid::new(origin, sides, exponent)?;
        check_count(Component::Hydro, hydro_functions.len(), 1, NUM_COMPONENTS)?;
        check_count(Component::DarkMatter, dm_functions.len(), 0, MAX_DM_FUNCTIONS)?;

        let hydro = envelope(&geometry, None, &settings, Component::Hydro, &hydro_functions)?;
        let dm = envelope(&geometry, None, &settings, Component::DarkMatter, &dm_functions)?;
        let max_value_hydro = hydro.map_or(0.0, |e| e.max_value());
        let max_value_dm = dm.map_or(0.0, |e| e.max_value());
        let volume = geometry.volume();

        debug!(
            ?origin,
            ?sides,
            exponent,
            volume,
            max_value_hydro,
            max_value_dm,
            evaluations = hydro.map_or(0, |e| e.num_evaluations())
                + dm.map_or(0, |e| e.num_evaluations()),
            "Created density region"
        );
        if max_value_hydro == 0.0 {
            warn!(?origin, "Hydro density is nowhere positive in region");
        }
        if dm.is_some() && max_value_dm == 0.0 {
            warn!(?origin, "Dark matter density is nowhere positive in region");
        }

        Ok(Self {
            geometry,
            hydro_functions,
            dm_functions,
            max_value_hydro,
            max_value_dm,
            volume,
            settings,
        })
    }

    // Getters

    pub fn geometry(&self) -> &SuperEllipsoid {
        &self.geometry
    }
    pub fn origin(&self) -> [f64; 3] {
        self.geometry.origin()
    }
    pub fn sides(&self) -> [f64; 3] {
        self.geometry.sides()
    }
    pub fn exponent(&self) -> f64 {
        self.geometry.exponent()
    }
    pub fn volume(&self) -> f64 {
        self.volume
    }
    pub fn settings(&self) -> &EnvelopeSettings {
        &self.settings
    }
    pub fn num_hydro_functions(&self) -> usize {
        self.hydro_functions.len()
    }
    pub fn has_dm(&self) -> bool {
        !self.dm_functions.is_empty()
    }

    // Geometry

    /// Check whether a position lies inside the region
    pub fn inside(&self, position: &[f64; 3]) -> bool {
        self.geometry.inside(position)
    }

    // Envelopes

    /// Upper bound on the hydro density inside this region.
    ///
    /// Without a cut-out this is the value computed at construction. With a
    /// cut-out, the bound is recomputed over the points of this region that
    /// are not inside `cut_out`, since those are sampled by the cut-out.
    pub fn get_max_value_hydro(&self, cut_out: Option<&DensityRegion>) -> Result<f64, Error> {
        match cut_out {
            None => Ok(self.max_value_hydro),
            Some(cut_out) => self.max_value_without(Component::Hydro, cut_out),
        }
    }
    /// Upper bound on the dark matter density, see `get_max_value_hydro`.
    ///
    /// Zero if the region has no dark matter.
    pub fn get_max_value_dm(&self, cut_out: Option<&DensityRegion>) -> Result<f64, Error> {
        match cut_out {
            None => Ok(self.max_value_dm),
            Some(cut_out) => self.max_value_without(Component::DarkMatter, cut_out),
        }
    }
    fn max_value_without(&self, component: Component, cut_out: &DensityRegion) -> Result<f64, Error> {
        let result = envelope(
            &self.geometry,
            Some(&cut_out.geometry),
            &self.settings,
            component,
            self.functions(component),
        )?;
        let max_value = result.map_or(0.0, |e| e.max_value());
        debug!(
            %component,
            origin = ?self.origin(),
            cut_out_origin = ?cut_out.origin(),
            max_value,
            "Computed maximum outside cut-out region"
        );
        Ok(max_value)
    }

    // Sampling

    /// Rejection test for the hydro density at a position inside the region.
    ///
    /// Draws one uniform number `u` in [0, 1) from `rng` and accepts if
    /// `u * max <= density(position)`.
    pub fn accept_hydro<R: Rng + ?Sized>(&self, position: &[f64; 3], rng: &mut R) -> Result<bool, Error> {
        self.accept(Component::Hydro, self.max_value_hydro, position, rng)
    }
    /// Rejection test for the dark matter density, see `accept_hydro`
    pub fn accept_dm<R: Rng + ?Sized>(&self, position: &[f64; 3], rng: &mut R) -> Result<bool, Error> {
        self.accept(Component::DarkMatter, self.max_value_dm, position, rng)
    }
    fn accept<R: Rng + ?Sized>(
        &self,
        component: Component,
        max_value: f64,
        position: &[f64; 3],
        rng: &mut R,
    ) -> Result<bool, Error> {
        let function = self
            .functions(component)
            .first()
            .ok_or(Error::MissingFunction(component))?;
        if max_value <= 0.0 {
            return Err(Error::DegenerateEnvelope(component));
        }
        let value = evaluate(component, 0, function.as_ref(), position)?;
        if value > max_value {
            warn!(
                %component,
                ?position,
                value,
                max_value,
                "Density exceeds the sampling envelope"
            );
        }
        let u: f64 = rng.gen();
        Ok(u * max_value <= value)
    }

    // Evaluation

    /// Evaluate all hydro functions at a position.
    ///
    /// Values are stored in declared order (density, velocity, pressure);
    /// components without a function are zero.
    pub fn get_hydro(&self, position: &[f64; 3]) -> Result<StateVector, Error> {
        let mut state = StateVector::default();
        for (i, function) in self.hydro_functions.iter().enumerate() {
            state[i] = evaluate(Component::Hydro, i, function.as_ref(), position)?;
        }
        Ok(state)
    }
    /// Evaluate the dark matter density at a position
    pub fn get_dm(&self, position: &[f64; 3]) -> Result<f64, Error> {
        let function = self
            .dm_functions
            .first()
            .ok_or(Error::MissingFunction(Component::DarkMatter))?;
        evaluate(Component::DarkMatter, 0, function.as_ref(), position)
    }

    fn functions(&self, component: Component) -> &[BoxedFunction] {
        match component {
            Component::Hydro => &self.hydro_functions,
            Component::DarkMatter => &self.dm_functions,
        }
    }
}

impl Region for DensityRegion {
    fn contains(&self, coord: &[f64; 3]) -> bool {
        self.inside(coord)
    }
    fn bounding_box(&self) -> Rect {
        self.geometry.bounding_box()
    }
}

impl fmt::Debug for DensityRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DensityRegion")
            .field("geometry", &self.geometry)
            .field("num_hydro_functions", &self.hydro_functions.len())
            .field("num_dm_functions", &self.dm_functions.len())
            .field("max_value_hydro", &self.max_value_hydro)
            .field("max_value_dm", &self.max_value_dm)
            .field("volume", &self.volume)
            .finish()
    }
}

fn check_count(component: Component, count: usize, min: usize, max: usize) -> Result<(), Error> {
    if count < min || count > max {
        return Err(Error::InvalidFunctionCount {
            component,
            count,
            min,
            max,
        });
    }
    Ok(())
}

/// Evaluate a function, turning NaN and infinite values into an error
fn evaluate(
    component: Component,
    index: usize,
    function: &dyn ScalarFunction,
    position: &[f64; 3],
) -> Result<f64, Error> {
    let value = function.evaluate(position);
    if !value.is_finite() {
        return Err(Error::Evaluation {
            component,
            index,
            position: *position,
            value,
        });
    }
    Ok(value)
}

/// Envelope of the first function in `functions`, if there is one
fn envelope(
    geometry: &SuperEllipsoid,
    cut_out: Option<&SuperEllipsoid>,
    settings: &EnvelopeSettings,
    component: Component,
    functions: &[BoxedFunction],
) -> Result<Option<Envelope>, Error> {
    match functions.first() {
        None => Ok(None),
        Some(function) => {
            let envelope = Envelope::compute(geometry, cut_out, settings, |p| {
                evaluate(component, 0, function.as_ref(), p)
            })?;
            Ok(Some(envelope))
        }
    }
}
