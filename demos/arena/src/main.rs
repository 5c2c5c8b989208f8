//! arena: a boss and a wave of shielded, firing enemies drifting around a
//! 30×18 arena.
//!
//! Writes `actor_snapshots.csv` and `activations.csv` to the output
//! directory and logs a summary.
//!
//! ```text
//! cargo run --release -p arena -- --enemies 12 --out output/arena
//! cargo run --release -p arena -- --config demos/arena/arena.json -v
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use drift_core::{ActorId, ArenaConfig, Frame, Vec2};
use drift_motion::{WanderConfig, estimate_radius};
use drift_output::{ArenaOutputObserver, CsvWriter, OutputWriter};
use drift_sim::{Activation, ActorStore, ArenaBuilder, ArenaObserver, EffectRole};
use drift_timer::{ActivationEvent, DelayRange, TimerConfig};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Bounded wanderers with probabilistic shields and weapons", version)]
struct Cli {
    /// Arena configuration (JSON).  Missing fields take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the CSV traces
    #[arg(short, long, default_value = "output/arena")]
    out: PathBuf,

    /// Number of enemies besides the boss
    #[arg(short, long, default_value_t = 8)]
    enemies: usize,

    /// Override the configured seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured frame count
    #[arg(long)]
    frames: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ── Actor recipes ─────────────────────────────────────────────────────────────

/// Boss collider half-extents.
const BOSS_COLLIDER: Vec2 = Vec2::new(1.5, 1.1);
/// Enemy sprite half-extents (no collider).
const ENEMY_SPRITE: Vec2 = Vec2::new(0.45, 0.4);

fn boss_motion() -> WanderConfig {
    WanderConfig::default()
        .with_speed(3.0)
        .with_change_interval(2.0)
        .with_radius(estimate_radius(Some(BOSS_COLLIDER), None))
}

fn enemy_motion() -> WanderConfig {
    WanderConfig::default()
        .with_speed(2.5)
        .with_change_interval(1.5)
        .with_edge_inset(0.25)
        .with_radius(estimate_radius(None, Some(ENEMY_SPRITE)))
}

fn enemy_shield() -> TimerConfig {
    TimerConfig::shield(50, DelayRange::new(2.0, 4.0))
}

fn enemy_weapon() -> TimerConfig {
    TimerConfig::fire(100, DelayRange::new(0.8, 1.2))
}

// ── Summary observer ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer and tallies what happened.
struct SummaryObserver<W: OutputWriter> {
    inner:          ArenaOutputObserver<W>,
    shields_raised: u64,
    shots:          u64,
    substeps:       u64,
}

impl<W: OutputWriter> SummaryObserver<W> {
    fn new(inner: ArenaOutputObserver<W>) -> Self {
        Self { inner, shields_raised: 0, shots: 0, substeps: 0 }
    }
}

impl<W: OutputWriter> ArenaObserver for SummaryObserver<W> {
    fn on_activation(&mut self, a: &Activation) {
        match (a.role, a.event) {
            (EffectRole::Shield, ActivationEvent::Activate) => self.shields_raised += 1,
            (EffectRole::Weapon, ActivationEvent::Activate) => self.shots += 1,
            _ => {}
        }
        self.inner.on_activation(a);
    }

    fn on_frame_end(&mut self, _frame: Frame, substeps: u32) {
        self.substeps += u64::from(substeps);
    }

    fn on_snapshot(&mut self, frame: Frame, time_secs: f64, actors: &ActorStore) {
        self.inner.on_snapshot(frame, time_secs, actors);
    }

    fn on_run_end(&mut self, final_frame: Frame) {
        self.inner.on_run_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<ArenaConfig> {
    let Some(path) = path else {
        return Ok(ArenaConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    // 1. Configuration.
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(frames) = cli.frames {
        config.total_frames = frames;
    }
    if config.bounds.is_none() {
        warn!("no arena bounds configured; every wanderer will stay put");
    }
    info!(
        seed = config.seed,
        frames = config.total_frames,
        frame_dt = config.frame_dt,
        fixed_dt = config.fixed_dt,
        enemies = cli.enemies,
        "arena configured"
    );

    // 2. Spawn the boss at the centre and the enemies at random.
    let mut builder = ArenaBuilder::new(config.clone());
    let boss = builder.spawn_wanderer(boss_motion(), Some(Vec2::ZERO));
    for _ in 0..cli.enemies {
        let enemy = builder.spawn_wanderer(enemy_motion(), None);
        builder.with_timer(enemy, EffectRole::Shield, enemy_shield())?;
        builder.with_timer(enemy, EffectRole::Weapon, enemy_weapon())?;
    }
    let mut arena = builder.build()?;

    // 3. Output.
    let writer = CsvWriter::new(&cli.out)
        .with_context(|| format!("creating output in {}", cli.out.display()))?;
    let mut obs = SummaryObserver::new(ArenaOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    arena.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }

    // 5. Summary.
    info!(
        wall_secs = elapsed.as_secs_f64(),
        sim_secs = arena.elapsed_secs(),
        physics_substeps = obs.substeps,
        shields_raised = obs.shields_raised,
        shots = obs.shots,
        "run complete"
    );
    info!(
        snapshot_rows = obs.inner.snapshot_rows(),
        activation_rows = obs.inner.activation_rows(),
        dir = %cli.out.display(),
        "traces written"
    );

    println!();
    println!("{:<8} {:>9} {:>9} {:>8} {:>8} {:<7}", "Actor", "x", "y", "vx", "vy", "Shield");
    println!("{}", "-".repeat(54));
    for id in arena.actors.iter_alive() {
        let p = arena.actors.position(id).unwrap_or(Vec2::ZERO);
        let v = arena.actors.velocity(id);
        let shield = arena.actors.effect_active(id, EffectRole::Shield);
        println!(
            "{:<8} {:>9.3} {:>9.3} {:>8.3} {:>8.3} {:<7}",
            label(id, boss),
            p.x,
            p.y,
            v.x,
            v.y,
            if shield { "up" } else { "-" },
        );
    }

    Ok(())
}

fn label(id: ActorId, boss: ActorId) -> String {
    if id == boss { "boss".to_owned() } else { id.0.to_string() }
}
