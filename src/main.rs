use std::process::ExitCode;
use std::thread;

use subsim::cli::{CliOptions, CommandLine, USAGE};
use subsim::interfaces::{CompassInterface, DepthSensorInterface};
use subsim::{HeadlessHost, SensorReading, Simulator, WorldSource};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable. Sensor readings are logged
/// at debug under `subsim::sensors`.
const DEFAULT_LOG_FILTER: &str = "warn,subsim=info";

fn log_filter(env: Option<&str>) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_tracing() {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());

    // SUBSIM_LOG_FORMAT=json for machine-readable output.
    let json = matches!(std::env::var("SUBSIM_LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    init_tracing();

    let cmd = CommandLine::from_env();
    let options = match CliOptions::from_command_line(&cmd) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            eprint!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    if options.help {
        print!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let config = match options.simulator_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Unable to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut host = HeadlessHost::new().with_frame_rate(config.scheduler.step_rate_hz);
    if let Some(frames) = options.frames {
        host = host.with_frame_limit(frames);
    }

    let world = WorldSource::from_path(config.world.clone());
    let mut sim = Simulator::new(config).with_host(Box::new(host));

    let (reading_tx, reading_rx) = crossbeam_channel::unbounded::<SensorReading>();
    sim.add_interface(Box::new(CompassInterface::new(reading_tx.clone())));
    sim.add_interface(Box::new(DepthSensorInterface::new(reading_tx)));
    let consumer = thread::spawn(move || {
        for reading in reading_rx {
            debug!(target: "subsim::sensors", ?reading);
        }
    });

    if let Err(e) = sim.init(world) {
        error!("Unable to initialise simulator: {}", e);
        return ExitCode::FAILURE;
    }

    while sim.is_running() {
        sim.update();
    }

    info!(
        "Simulated {:.2}s in {} steps",
        sim.sim_time(),
        sim.stats().total_steps()
    );
    // Closes the interface channels so the consumer finishes.
    sim.deinit();
    let _ = consumer.join();

    ExitCode::SUCCESS
}
