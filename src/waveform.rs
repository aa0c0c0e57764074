use core::fmt;

use log::debug;

use super::*;

/// Parameters of a [`Waveform`].
/// The default describes the square: a flat segment over the whole lattice.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveformConfig {
    /// End of the flat segment at y = 250
    pub x: i64,
    /// The arc is centred at (x0, x0)
    pub x0: i64,
    /// Largest distance between the ideal arc and a kept lattice point
    pub max_delta: NativeFloat,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        WaveformConfig {
            x: GRID_MAX,
            x0: GRID_MAX,
            max_delta: 0.5,
        }
    }
}

impl WaveformConfig {
    pub fn new(x: i64, x0: i64, max_delta: NativeFloat) -> Self {
        WaveformConfig { x, x0, max_delta }
    }

    pub fn with_x(mut self, x: i64) -> Self {
        self.x = x;
        self
    }

    pub fn with_x0(mut self, x0: i64) -> Self {
        self.x0 = x0;
        self
    }

    pub fn with_max_delta(mut self, max_delta: NativeFloat) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Checks 0 <= x0 <= x <= 250 and that max_delta is a non-negative number.
    pub fn validate(&self) -> Result<(), WaveformError> {
        if !(0..=GRID_MAX).contains(&self.x) {
            return Err(WaveformError::invalid(
                "x",
                self.x,
                format!("between 0 and {}", GRID_MAX),
            ));
        }
        if !(0..=self.x).contains(&self.x0) {
            return Err(WaveformError::invalid(
                "x0",
                self.x0,
                format!("between 0 and {} and not larger than x = {}", GRID_MAX, self.x),
            ));
        }
        // also rejects NaN
        if !(self.max_delta >= 0.0 && self.max_delta.is_finite()) {
            return Err(WaveformError::invalid(
                "max_delta",
                self.max_delta,
                "a finite number >= 0",
            ));
        }
        Ok(())
    }

    pub fn build(self) -> Result<Waveform, WaveformError> {
        Waveform::from_config(self)
    }
}

/// Lattice approximation of a quarter circle, closed by reflection across y = x.
///
/// The curve is flat at y = 250 for columns up to `x` and then follows the circle
/// centred at (x0, x0) through (x, 250) and (250, x). Only columns whose nearest
/// lattice point lies within `max_delta` of that circle contribute a point.
/// Everything is computed on construction; a `Waveform` never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    config: WaveformConfig,
    wf: Polyline,
    perf: NativeFloat,
}

impl Waveform {
    /// Build the waveform for `x`, `x0` and `max_delta`.
    /// Fails with [`WaveformError::InvalidArgument`] if the parameters are out of range.
    pub fn new(x: i64, x0: i64, max_delta: NativeFloat) -> Result<Self, WaveformError> {
        Self::from_config(WaveformConfig::new(x, x0, max_delta))
    }

    pub fn from_config(config: WaveformConfig) -> Result<Self, WaveformError> {
        config.validate()?;

        let half = lattice_arc(&config);
        let wf = mirror(half.iter().copied());
        let perf = wf.performance()?;
        debug!(
            "{}: {} arc points, {} waveform points, performance {}",
            WaveformDisplay(&config),
            half.len(),
            wf.len(),
            perf
        );

        Ok(Waveform { config, wf, perf })
    }

    pub fn x(&self) -> i64 {
        self.config.x
    }

    pub fn x0(&self) -> i64 {
        self.config.x0
    }

    pub fn max_delta(&self) -> NativeFloat {
        self.config.max_delta
    }

    pub fn config(&self) -> WaveformConfig {
        self.config
    }

    /// The symmetric polyline
    pub fn polyline(&self) -> &Polyline {
        &self.wf
    }

    pub fn points(&self) -> &[LatticePoint] {
        self.wf.as_slice()
    }

    /// Area under the waveform divided by its length
    pub fn performance(&self) -> NativeFloat {
        self.perf
    }

    pub fn print_performance(&self) {
        println!("{}", self.perf);
    }

    /// Radius of the circle centred at (x0, x0) through (x, 250) and (250, x)
    pub fn radius(&self) -> NativeFloat {
        radius(&self.config)
    }
}

fn radius(config: &WaveformConfig) -> NativeFloat {
    let a = (GRID_MAX - config.x0) as NativeFloat;
    let b = (config.x - config.x0) as NativeFloat;
    (a * a + b * b).sqrt()
}

/// Ideal height of the curve over column `col`
fn ideal_height(config: &WaveformConfig, r: NativeFloat, col: i64) -> NativeFloat {
    if col <= config.x {
        return GRID_MAX as NativeFloat;
    }
    let dx = (col - config.x0) as NativeFloat;
    // exact radicands may come out a hair below zero
    config.x0 as NativeFloat + (r * r - dx * dx).max(0.0).sqrt()
}

/// One lattice point per column whose rounded height stays within `max_delta`
/// of the ideal curve. Heights are rounded half to even.
fn lattice_arc(config: &WaveformConfig) -> Vec<LatticePoint> {
    let r = radius(config);
    debug!("arc radius {} centred at ({}, {})", r, config.x0, config.x0);

    (0..=GRID_MAX)
        .filter_map(|col| {
            let y_raw = ideal_height(config, r, col);
            let y = y_raw.round_ties_even();
            if (y_raw - y).abs() <= config.max_delta {
                Some(LatticePoint::new(col, y as i64))
            } else {
                None
            }
        })
        .collect()
}

struct WaveformDisplay<'a>(&'a WaveformConfig);

impl fmt::Display for WaveformDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Waveform({}, {}, {:?})", self.0.x, self.0.x0, self.0.max_delta)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", WaveformDisplay(&self.config))
    }
}
