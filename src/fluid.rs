use crate::boundary::BoundaryKind;
use crate::config::{check_diffusion, check_time_step, check_viscosity, FluidConfig};
use crate::error::{FluidError, FluidResult};
use crate::field::FieldPair;
use crate::solver::{advect, diffuse, project};
use crate::vec_field::{divergence, max_speed};
use crate::{Field, Grid, VecField, Vec2};

/// Complete simulation state: transported fields, projection scratch and the
/// source impulses queued for the next step.
#[derive(Clone, Debug)]
pub struct FluidState {
    config: FluidConfig,
    grid: Grid,
    density: FieldPair,
    vel_x: FieldPair,
    vel_y: FieldPair,
    pressure: Field,
    divergence: Field,
    density_source: Field,
    velocity_source: VecField,
}

impl FluidState {
    pub fn new(config: FluidConfig) -> FluidResult<Self> {
        config.validate()?;
        let grid = Grid::new(config.size);
        log::debug!(
            "creating fluid state: n={} dt={} viscosity={} diffusion={} iterations={}",
            config.size,
            config.dt,
            config.viscosity,
            config.diffusion,
            config.relax_iterations
        );
        Ok(Self {
            config,
            grid,
            density: FieldPair::new(grid),
            vel_x: FieldPair::new(grid),
            vel_y: FieldPair::new(grid),
            pressure: Field::zeros(grid),
            divergence: Field::zeros(grid),
            density_source: Field::zeros(grid),
            velocity_source: VecField::new(grid, Vec2::zero()),
        })
    }

    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn density(&self) -> &Field {
        self.density.current()
    }

    pub fn velocity_x(&self) -> &Field {
        self.vel_x.current()
    }

    pub fn velocity_y(&self) -> &Field {
        self.vel_y.current()
    }

    pub fn velocity_at(&self, i: usize, j: usize) -> Vec2 {
        Vec2::new(self.vel_x.current().get(i, j), self.vel_y.current().get(i, j))
    }

    pub fn pressure(&self) -> &Field {
        &self.pressure
    }

    pub fn total_density(&self) -> f32 {
        self.density.current().interior_sum()
    }

    /// Sum of |divergence| over interior cells of the current velocity.
    pub fn divergence_norm(&self) -> f32 {
        divergence(self.vel_x.current(), self.vel_y.current()).interior_abs_sum()
    }

    pub fn max_speed(&self) -> f32 {
        max_speed(self.vel_x.current(), self.vel_y.current())
    }

    pub fn add_density_source(&mut self, source: &Field) -> FluidResult<()> {
        self.check_grid("density source", source)?;
        self.density_source.add_scaled_in_place(source, 1.0);
        Ok(())
    }

    pub fn add_velocity_source(&mut self, source_x: &Field, source_y: &Field) -> FluidResult<()> {
        self.check_grid("velocity-x source", source_x)?;
        self.check_grid("velocity-y source", source_y)?;
        self.velocity_source.u_mut().add_scaled_in_place(source_x, 1.0);
        self.velocity_source.v_mut().add_scaled_in_place(source_y, 1.0);
        Ok(())
    }

    pub fn add_velocity_source_field(&mut self, source: &VecField) -> FluidResult<()> {
        self.add_velocity_source(source.u(), source.v())
    }

    pub fn add_density_at(&mut self, i: usize, j: usize, amount: f32) -> FluidResult<()> {
        self.check_cell(i, j)?;
        let value = self.density_source.get(i, j);
        self.density_source.set(i, j, value + amount);
        Ok(())
    }

    pub fn add_velocity_at(&mut self, i: usize, j: usize, impulse: Vec2) -> FluidResult<()> {
        self.check_cell(i, j)?;
        let value = self.velocity_source.get(i, j);
        self.velocity_source
            .set(i, j, Vec2::new(value.x + impulse.x, value.y + impulse.y));
        Ok(())
    }

    pub fn clear_sources(&mut self) {
        self.density_source.fill(0.0);
        self.velocity_source.fill(Vec2::zero());
    }

    /// Zeroes every buffer, keeping the configuration.
    pub fn reset(&mut self) {
        self.density.reset();
        self.vel_x.reset();
        self.vel_y.reset();
        self.pressure.fill(0.0);
        self.divergence.fill(0.0);
        self.clear_sources();
    }

    /// One tick with the configured viscosity, diffusion and time step.
    pub fn step(&mut self) {
        let FluidConfig {
            dt,
            viscosity,
            diffusion,
            ..
        } = self.config;
        self.advance_velocity(viscosity, dt);
        self.advance_density(diffusion, dt);
    }

    /// Velocity half of a tick with caller-chosen rates; rejects the same
    /// values [`FluidConfig::validate`] would, leaving the state untouched.
    pub fn velocity_step(&mut self, viscosity: f32, dt: f32) -> FluidResult<()> {
        check_viscosity(viscosity)?;
        check_time_step(dt)?;
        self.advance_velocity(viscosity, dt);
        Ok(())
    }

    pub fn density_step(&mut self, diffusion: f32, dt: f32) -> FluidResult<()> {
        check_diffusion(diffusion)?;
        check_time_step(dt)?;
        self.advance_density(diffusion, dt);
        Ok(())
    }

    fn advance_velocity(&mut self, viscosity: f32, dt: f32) {
        let iterations = self.config.relax_iterations;

        self.vel_x
            .current_mut()
            .add_scaled_in_place(self.velocity_source.u(), dt);
        self.vel_y
            .current_mut()
            .add_scaled_in_place(self.velocity_source.v(), dt);
        self.velocity_source.fill(Vec2::zero());

        self.vel_x.swap();
        let (u, u0) = self.vel_x.split_mut();
        diffuse(BoundaryKind::VelocityX, u, u0, viscosity, dt, iterations);

        self.vel_y.swap();
        let (v, v0) = self.vel_y.split_mut();
        diffuse(BoundaryKind::VelocityY, v, v0, viscosity, dt, iterations);

        self.project();

        self.vel_x.swap();
        self.vel_y.swap();
        let (u, u0) = self.vel_x.split_mut();
        let v0 = self.vel_y.previous();
        advect(BoundaryKind::VelocityX, u, u0, u0, v0, dt);
        let (v, v0) = self.vel_y.split_mut();
        let u0 = self.vel_x.previous();
        advect(BoundaryKind::VelocityY, v, v0, u0, v0, dt);

        self.project();

        log::trace!(
            "velocity step: max speed {:.4}, divergence {:.4e}",
            self.max_speed(),
            self.divergence_norm()
        );
    }

    fn advance_density(&mut self, diffusion: f32, dt: f32) {
        let iterations = self.config.relax_iterations;

        self.density
            .current_mut()
            .add_scaled_in_place(&self.density_source, dt);
        self.density_source.fill(0.0);

        self.density.swap();
        let (d, d0) = self.density.split_mut();
        diffuse(BoundaryKind::Scalar, d, d0, diffusion, dt, iterations);

        self.density.swap();
        let (d, d0) = self.density.split_mut();
        advect(
            BoundaryKind::Scalar,
            d,
            d0,
            self.vel_x.current(),
            self.vel_y.current(),
            dt,
        );

        log::trace!("density step: total {:.4}", self.total_density());
    }

    fn project(&mut self) {
        project(
            self.vel_x.current_mut(),
            self.vel_y.current_mut(),
            &mut self.pressure,
            &mut self.divergence,
            self.config.relax_iterations,
        );
    }

    fn check_grid(&self, name: &'static str, field: &Field) -> FluidResult<()> {
        if field.grid() != self.grid {
            return Err(FluidError::GridMismatch {
                name,
                expected: self.grid.n(),
                provided: field.grid().n(),
            });
        }
        Ok(())
    }

    fn check_cell(&self, i: usize, j: usize) -> FluidResult<()> {
        if !self.grid.contains(i, j) {
            return Err(FluidError::CellOutOfRange {
                i,
                j,
                n: self.grid.n(),
            });
        }
        Ok(())
    }
}
