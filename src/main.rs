use std::process;
use std::sync::{Mutex, OnceLock};

use bounded_life::{DisplayConfig, Simulation, rendering};
use macroquad::prelude::*;

mod options;

/// Everything built before the window opens
struct Launch {
    display: DisplayConfig,
    window_size: (i32, i32),
    /// Taken by `main` once the window exists
    simulation: Mutex<Option<Simulation>>,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Parse the command line and build the initial board once; exits before
/// any window exists on `--help`, bad options or a bad placement.
fn launch() -> &'static Launch {
    LAUNCH.get_or_init(|| {
        env_logger::init();

        let configs = options::Args::from_env()
            .and_then(|args| args.as_ref().map(options::Args::configs).transpose());
        let (config, display) = match configs {
            Ok(Some(configs)) => configs,
            Ok(None) => process::exit(0),
            Err(err) => {
                log::error!("{err}");
                process::exit(2);
            }
        };

        let simulation = match Simulation::new(&config) {
            Ok(simulation) => simulation,
            Err(err) => {
                log::error!("failed to build initial board: {err}");
                process::exit(1);
            }
        };

        Launch {
            window_size: display.window_size(config.width, config.height),
            display,
            simulation: Mutex::new(Some(simulation)),
        }
    })
}

fn window_conf() -> Conf {
    let (width, height) = launch().window_size;
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: width.max(64),
        window_height: height.max(64),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let launch = launch();
    let display = &launch.display;

    let taken = launch.simulation.lock().ok().and_then(|mut slot| slot.take());
    let Some(mut simulation) = taken else {
        log::error!("initial board already taken");
        process::exit(1);
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        simulation.tick();
        rendering::draw_grid(simulation.grid(), display);
        rendering::draw_status(
            display,
            get_fps(),
            simulation.generation(),
            simulation.population(),
        );
        log::trace!(
            "generation {} evolved in {:.2}ms",
            simulation.generation(),
            simulation.last_evolution_time_ms()
        );

        next_frame().await;

        if let Some(delay) = display.frame_delay {
            std::thread::sleep(delay);
        }
    }
}
