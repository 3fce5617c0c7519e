use crate::error::{FluidError, FluidResult};
use crate::solver::DEFAULT_RELAX_ITERATIONS;
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of a [`crate::FluidState`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    pub size: usize,
    pub dt: f32,
    pub diffusion: f32,
    pub viscosity: f32,
    pub relax_iterations: usize,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            size: 50,
            dt: 0.1,
            diffusion: 0.001,
            viscosity: 0.2,
            relax_iterations: DEFAULT_RELAX_ITERATIONS,
        }
    }
}

impl FluidConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_diffusion(mut self, diffusion: f32) -> Self {
        self.diffusion = diffusion;
        self
    }

    pub fn with_viscosity(mut self, viscosity: f32) -> Self {
        self.viscosity = viscosity;
        self
    }

    pub fn with_relax_iterations(mut self, iterations: usize) -> Self {
        self.relax_iterations = iterations;
        self
    }

    pub fn validate(&self) -> FluidResult<()> {
        if self.size == 0 {
            return Err(FluidError::InvalidSize(self.size));
        }
        check_time_step(self.dt)?;
        check_viscosity(self.viscosity)?;
        check_diffusion(self.diffusion)?;
        if self.relax_iterations == 0 {
            return Err(FluidError::InvalidIterations);
        }
        Ok(())
    }

    /// Parses a JSON document; missing keys take their default values.
    pub fn from_json_str(text: &str) -> FluidResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|err| FluidError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> FluidResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| FluidError::Parse(err.to_string()))
    }
}

pub(crate) fn check_time_step(dt: f32) -> FluidResult<()> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(FluidError::InvalidTimeStep(dt));
    }
    Ok(())
}

pub(crate) fn check_viscosity(viscosity: f32) -> FluidResult<()> {
    if !(viscosity.is_finite() && viscosity >= 0.0) {
        return Err(FluidError::InvalidViscosity(viscosity));
    }
    Ok(())
}

pub(crate) fn check_diffusion(diffusion: f32) -> FluidResult<()> {
    if !(diffusion.is_finite() && diffusion >= 0.0) {
        return Err(FluidError::InvalidDiffusion(diffusion));
    }
    Ok(())
}
