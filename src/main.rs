use anyhow::{Context, Result};
use clap::Parser;
use stable_fluids::{Field, FluidConfig, FluidState, Vec2};
use std::path::PathBuf;

/// Headless smoke plume: injects density and lift near the floor each tick,
/// then prints the final density as ASCII shades.
#[derive(Parser, Debug)]
#[command(name = "stable-fluids", version, about)]
struct Cli {
    /// JSON configuration; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    dt: Option<f32>,

    #[arg(long)]
    viscosity: Option<f32>,

    #[arg(long)]
    diffusion: Option<f32>,

    #[arg(long, default_value_t = 100)]
    steps: usize,

    #[arg(long, default_value_t = 100.0)]
    source_density: f32,

    #[arg(long, default_value_t = 5.0)]
    source_lift: f32,
}

fn load_config(cli: &Cli) -> Result<FluidConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            FluidConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => FluidConfig::default(),
    };
    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    if let Some(viscosity) = cli.viscosity {
        config.viscosity = viscosity;
    }
    if let Some(diffusion) = cli.diffusion {
        config.diffusion = diffusion;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn inject_plume(state: &mut FluidState, density: f32, lift: f32) -> Result<()> {
    let n = state.grid().n();
    let center = n / 2 + 1;
    let half_width = (n / 16).max(1);
    for i in center.saturating_sub(half_width).max(1)..=(center + half_width).min(n) {
        state.add_density_at(i, 2, density)?;
        state.add_velocity_at(i, 2, Vec2::new(0.0, lift))?;
    }
    Ok(())
}

fn density_to_ascii(density: &Field) -> String {
    const SHADES: &[u8] = b" .:-=+*#%@";
    let n = density.grid().n();
    let (_, max_value) = density.min_max();
    let scale = if max_value > 0.0 { 1.0 / max_value } else { 0.0 };
    let mut out = String::with_capacity((n + 1) * n);
    for j in (1..=n).rev() {
        for i in 1..=n {
            let t = (density.get(i, j) * scale).clamp(0.0, 1.0);
            let shade = (t * (SHADES.len() - 1) as f32).round() as usize;
            out.push(SHADES[shade] as char);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut state = FluidState::new(config).context("creating simulation")?;
    log::info!(
        "running {} steps on a {}x{} grid",
        cli.steps,
        config.size,
        config.size
    );
    for tick in 0..cli.steps {
        inject_plume(&mut state, cli.source_density, cli.source_lift)?;
        state.step();
        log::debug!(
            "tick {tick}: density {:.3}, max speed {:.3}, divergence {:.3e}",
            state.total_density(),
            state.max_speed(),
            state.divergence_norm()
        );
    }
    print!("{}", density_to_ascii(state.density()));
    Ok(())
}
