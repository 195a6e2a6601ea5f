use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use signal_race::simulation::{
    ManualClock, MonotonicClock, ScenarioCatalog, SimConfig, SimWorld, TimeSource,
    DEFAULT_FRAME_RATE, DEPARTURE_INTERVAL, FIXED_GREEN_TIME,
};

#[derive(Parser)]
#[command(name = "signal_race")]
#[command(about = "Fixed vs adaptive traffic signal race with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Ticks per second
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE)]
    fps: f64,

    /// Green duration for the fixed timer in seconds
    #[arg(long, default_value_t = FIXED_GREEN_TIME)]
    fixed_green: f64,

    /// Minimum spacing between departures in seconds
    #[arg(long, default_value_t = DEPARTURE_INTERVAL)]
    departure_interval: f64,

    /// Give up after this many simulated seconds in headless mode
    #[arg(long, default_value = "600")]
    max_seconds: f64,

    /// Pace headless frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Randomise each headless frame delta by up to this fraction
    #[arg(long, default_value = "0")]
    jitter: f64,

    /// Seed for the frame jitter
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Seconds of simulated time between headless summaries
    #[arg(long, default_value = "10")]
    report_every: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SimConfig {
        fixed_green_time: cli.fixed_green,
        departure_interval: cli.departure_interval,
        frame_rate: cli.fps,
    };
    let world = SimWorld::with_config(config, ScenarioCatalog::default())?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(world);
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn,signal_race=info"),
        )
        .init();
        run_headless(world, &cli).context("headless run failed")?;
    }
    Ok(())
}

/// Run the race in headless mode (no graphics)
fn run_headless(mut world: SimWorld, cli: &Cli) -> Result<()> {
    ensure!(
        (0.0..1.0).contains(&cli.jitter),
        "jitter must be in [0, 1), got {}",
        cli.jitter
    );
    ensure!(cli.report_every > 0.0, "report interval must be positive");

    println!("Running signal race in headless mode...");
    println!(
        "FPS: {}, Fixed green: {}s, Departure interval: {}s",
        world.config.frame_rate, world.config.fixed_green_time, world.config.departure_interval
    );
    println!();

    let nominal = world.config.frame_delta();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut frame_delta = || {
        if cli.jitter > 0.0 {
            nominal * (1.0 + rng.random_range(-cli.jitter..=cli.jitter))
        } else {
            nominal
        }
    };

    if cli.realtime {
        let clock = MonotonicClock::new();
        world.start(clock.now());
        let mut last = clock.now();
        let mut next_report = cli.report_every;
        while !world.is_over() && clock.now() < cli.max_seconds {
            std::thread::sleep(std::time::Duration::from_secs_f64(frame_delta()));
            let now = clock.now();
            world.tick(now, now - last);
            last = now;
            if now >= next_report {
                next_report += cli.report_every;
                world.print_summary();
                println!();
            }
        }
    } else {
        let mut clock = ManualClock::new();
        world.start(clock.now());
        let mut next_report = cli.report_every;
        while !world.is_over() && clock.now() < cli.max_seconds {
            let delta = frame_delta();
            clock.advance(delta);
            world.tick(clock.now(), delta);
            if clock.now() >= next_report {
                next_report += cli.report_every;
                world.print_summary();
                println!();
            }
        }
    }

    println!("=== Final State ===");
    world.print_summary();

    if !world.is_over() {
        log::warn!(
            "race did not finish within {}s of simulated time",
            cli.max_seconds
        );
    }
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(world: SimWorld) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Signal Race UI...");
    println!();
    println!("Controls:");
    println!("  SPACE       - Start the race");
    println!("  ESC         - Exit");
    println!();

    let frame_rate = world.config.frame_rate;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,signal_race=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Adaptive vs Fixed Signal Race".into(),
                        resolution: (1100, 800).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(Time::<Fixed>::from_hz(frame_rate))
        .insert_resource(signal_race::ui::SimWorldResource(world))
        .add_plugins(signal_race::ui::SignalRaceUIPlugin)
        .run();
}
