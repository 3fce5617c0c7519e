use thiserror::Error;

pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    #[error("grid resolution must be positive, got {0}")]
    InvalidSize(usize),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f32),

    #[error("viscosity must be non-negative and finite, got {0}")]
    InvalidViscosity(f32),

    #[error("diffusion rate must be non-negative and finite, got {0}")]
    InvalidDiffusion(f32),

    #[error("relaxation iteration count must be positive")]
    InvalidIterations,

    #[error("{name} field is sized for resolution {provided}, simulation uses {expected}")]
    GridMismatch {
        name: &'static str,
        expected: usize,
        provided: usize,
    },

    #[error("cell ({i}, {j}) is outside a grid of resolution {n}")]
    CellOutOfRange { i: usize, j: usize, n: usize },

    #[error("invalid configuration document: {0}")]
    Parse(String),
}
