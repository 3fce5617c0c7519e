mod boundary;
mod config;
mod error;
mod field;
mod fluid;
mod grid;
mod solver;
mod vec2;
mod vec_field;

pub use boundary::{enforce, BoundaryKind};
pub use config::FluidConfig;
pub use error::{FluidError, FluidResult};
pub use field::{Field, FieldPair};
pub use fluid::FluidState;
pub use grid::Grid;
pub use solver::{advect, diffuse, project, relax, DEFAULT_RELAX_ITERATIONS};
pub use vec2::Vec2;
pub use vec_field::{divergence, max_speed, VecField};
