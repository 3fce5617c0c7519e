use stable_fluids::{divergence, enforce, BoundaryKind, Field, FluidConfig, FluidState};

fn assert_close(a: f32, b: f32, tol: f32) {
    assert!(
        (a - b).abs() <= tol,
        "expected {a} to be within {tol} of {b}"
    );
}

fn still_state(n: usize, dt: f32) -> FluidState {
    let config = FluidConfig::new(n)
        .with_dt(dt)
        .with_viscosity(0.0)
        .with_diffusion(0.0);
    FluidState::new(config).expect("valid config")
}

#[test]
fn point_source_without_flow_stays_put() {
    let mut state = still_state(4, 0.1);
    let source = Field::from_fn(state.grid(), |i, j| if (i, j) == (2, 2) { 1.0 } else { 0.0 });
    state.add_density_source(&source).unwrap();
    state.step();

    let density = state.density();
    let grid = state.grid();
    for (i, j) in grid.interior() {
        let expected = if (i, j) == (2, 2) { 0.1 } else { 0.0 };
        assert_close(density.get(i, j), expected, 1e-6);
    }
    assert_eq!(state.max_speed(), 0.0);
}

#[test]
fn uniform_push_is_projected_towards_zero_divergence() {
    let mut state = still_state(4, 0.1);
    let grid = state.grid();
    let push = Field::new(grid, 5.0);
    let zero = Field::zeros(grid);
    state.add_velocity_source(&push, &zero).unwrap();
    state.velocity_step(0.0, 0.1).unwrap();

    // divergence the walls induce on the raw, unprojected input
    let mut raw = Field::new(grid, 0.5);
    enforce(BoundaryKind::VelocityX, &mut raw);
    let unprojected = divergence(&raw, &zero).interior_abs_sum();

    let projected = state.divergence_norm();
    assert!(unprojected > 0.5);
    assert!(
        projected < 0.5 * unprojected,
        "divergence {unprojected} -> {projected}"
    );
}

#[test]
fn velocity_field_mirrors_reflect_condition_after_step() {
    let mut state = still_state(6, 0.1);
    let grid = state.grid();
    let push = Field::from_fn(grid, |i, j| if (3..=4).contains(&i) && j == 3 { 4.0 } else { 0.0 });
    let zero = Field::zeros(grid);
    state.add_velocity_source(&push, &zero).unwrap();
    state.step();

    let u = state.velocity_x();
    for k in 1..=6 {
        assert_eq!(u.get(0, k), -u.get(1, k));
        assert_eq!(u.get(7, k), -u.get(6, k));
    }
    let d = state.density();
    for k in 1..=6 {
        assert_eq!(d.get(0, k), d.get(1, k));
    }
}

#[test]
fn diffusion_only_spreads_density() {
    let config = FluidConfig::new(8).with_viscosity(0.0).with_diffusion(0.05);
    let mut state = FluidState::new(config).unwrap();
    state.add_density_at(4, 4, 10.0).unwrap();
    state.step();
    let total = state.total_density();
    assert_close(total, 1.0, 0.02);
    assert!(state.density().get(4, 4) < 1.0);
    assert!(state.density().get(5, 4) > 0.0);
    assert!(state.density().get(4, 3) > 0.0);
}

#[test]
fn config_from_json_drives_simulation() {
    let config = FluidConfig::from_json_str(
        r#"{ "size": 8, "dt": 0.05, "viscosity": 0.0, "diffusion": 0.0, "relax_iterations": 10 }"#,
    )
    .unwrap();
    let mut state = FluidState::new(config).unwrap();
    state.add_density_at(3, 3, 2.0).unwrap();
    state.step();
    assert_close(state.density().get(3, 3), 0.1, 1e-6);
}
