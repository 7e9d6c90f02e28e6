use std::str::FromStr;
use std::time::Duration;

use bounded_life::{Algorithm, DisplayConfig, Placement, SimulationConfig, presets};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),

    #[error("invalid value '{value}' for --{option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("placement '{0}' is not of the form NAME@X,Y")]
    MalformedPlacement(String),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt(
            "w",
            "width",
            "set board width in cells (the default gliders need at least 53)",
            "WIDTH",
        );
        opts.optopt(
            "h",
            "height",
            "set board height in cells (the default gliders need at least 53)",
            "HEIGHT",
        );
        opts.optopt("c", "cell-size", "cell edge length in pixels", "PX");
        opts.optopt("d", "density", "random fill threshold, cells above it start alive", "P");
        opts.optopt("s", "seed", "fixed random seed", "SEED");
        opts.optopt("a", "algorithm", "serial, parallel or double-buffered", "NAME");
        opts.optopt("", "sleep", "the amount of time to sleep between frames", "MILLIS");
        opts.optmulti(
            "p",
            "pattern",
            "place a preset, replaces the default gliders (repeatable)",
            "NAME@X,Y",
        );
        opts.optflag("", "no-lines", "do not draw the cell lattice");
        opts
    }

    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: bounded_life [options]"));
            println!("algorithms:");
            for algorithm in Algorithm::all() {
                println!("  {:<16} {}", algorithm.name(), algorithm.description());
            }
            println!("patterns:");
            for pattern in presets::all_patterns() {
                let size = format!("{}x{}", pattern.width(), pattern.height());
                println!("  {:<16} {:<6} {}", pattern.name, size, pattern.description);
            }
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }

    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn value<T: FromStr>(&self, option: &'static str) -> Result<Option<T>, OptionsError> {
        self.matches
            .opt_str(option)
            .map(|value| {
                value
                    .parse()
                    .map_err(|_| OptionsError::InvalidValue { option, value })
            })
            .transpose()
    }

    pub fn simulation_config(&self) -> Result<SimulationConfig, OptionsError> {
        let mut config = SimulationConfig::default();
        if let Some(width) = self.value("width")? {
            config.width = width;
        }
        if let Some(height) = self.value("height")? {
            config.height = height;
        }
        if let Some(density) = self.value("density")? {
            config.density = density;
        }
        config.seed = self.value("seed")?;
        if let Some(algorithm) = self.value("algorithm")? {
            config.algorithm = algorithm;
        }

        let placements = self.matches.opt_strs("pattern");
        if !placements.is_empty() {
            config.placements = placements
                .iter()
                .map(|arg| parse_placement(arg))
                .collect::<Result<_, _>>()?;
        }
        Ok(config)
    }

    pub fn display_config(&self) -> Result<DisplayConfig, OptionsError> {
        let mut display = DisplayConfig::default();
        if let Some(cell_size) = self.value::<f32>("cell-size")? {
            if !(cell_size > 0.0) {
                return Err(OptionsError::InvalidValue {
                    option: "cell-size",
                    value: cell_size.to_string(),
                });
            }
            display.cell_size = cell_size;
        }
        if let Some(millis) = self.value("sleep")? {
            display.frame_delay = (millis > 0).then(|| Duration::from_millis(millis));
        }
        display.show_grid_lines = !self.matches.opt_present("no-lines");
        Ok(display)
    }

    pub fn configs(&self) -> Result<(SimulationConfig, DisplayConfig), OptionsError> {
        Ok((self.simulation_config()?, self.display_config()?))
    }
}

/// Parse `NAME@X,Y`, e.g. `glider@50,10`
fn parse_placement(arg: &str) -> Result<Placement, OptionsError> {
    let malformed = || OptionsError::MalformedPlacement(arg.to_owned());

    let (name, offset) = arg.split_once('@').ok_or_else(malformed)?;
    let (x, y) = offset.split_once(',').ok_or_else(malformed)?;
    let x: usize = x.trim().parse().map_err(|_| malformed())?;
    let y: usize = y.trim().parse().map_err(|_| malformed())?;
    let pattern =
        presets::by_name(name.trim()).ok_or_else(|| OptionsError::UnknownPattern(name.to_owned()))?;

    Ok(Placement::new(pattern, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not help")
    }

    #[test]
    fn defaults_match_classic_board() {
        let args = args(&[]);
        let config = args.simulation_config().unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(args.display_config().unwrap(), DisplayConfig::default());
    }

    #[test]
    fn size_density_seed_parse() {
        let config = args(&["-w", "40", "--height", "30", "-d", "0.75", "--seed", "12"])
            .simulation_config()
            .unwrap();
        assert_eq!((config.width, config.height), (40, 30));
        assert_eq!(config.density, 0.75);
        assert_eq!(config.seed, Some(12));
    }

    #[test]
    fn algorithm_parses() {
        let config = args(&["--algorithm", "double-buffered"]).simulation_config().unwrap();
        assert_eq!(config.algorithm, Algorithm::DoubleBuffered);

        let err = args(&["-a", "simd"]).simulation_config().unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue { option: "algorithm", .. }));
    }

    #[test]
    fn patterns_replace_defaults() {
        let config = args(&["-p", "block@1,2", "--pattern", "Glider@5,6"])
            .simulation_config()
            .unwrap();
        let placed: Vec<_> = config
            .placements
            .iter()
            .map(|p| (p.pattern.name, p.x, p.y))
            .collect();
        assert_eq!(placed, vec![("Block", 1, 2), ("Glider", 5, 6)]);
    }

    #[test]
    fn bad_patterns_rejected() {
        assert!(matches!(
            parse_placement("gun@1,1"),
            Err(OptionsError::UnknownPattern(_))
        ));
        assert!(matches!(
            parse_placement("glider"),
            Err(OptionsError::MalformedPlacement(_))
        ));
        assert!(matches!(
            parse_placement("glider@1"),
            Err(OptionsError::MalformedPlacement(_))
        ));
        assert!(matches!(
            parse_placement("glider@-1,2"),
            Err(OptionsError::MalformedPlacement(_))
        ));
    }

    #[test]
    fn display_options() {
        let display = args(&["-c", "4", "--sleep", "0", "--no-lines"])
            .display_config()
            .unwrap();
        assert_eq!(display.cell_size, 4.0);
        assert_eq!(display.frame_delay, None);
        assert!(!display.show_grid_lines);

        assert!(args(&["-c", "0"]).display_config().is_err());
        assert!(args(&["--sleep", "soon"]).display_config().is_err());
    }

    #[test]
    fn small_board_keeps_default_gliders_and_fails_startup() {
        let config = args(&["-w", "30", "-h", "20", "--seed", "1"])
            .simulation_config()
            .unwrap();
        assert_eq!(config.placements.len(), 3);
        assert!(matches!(
            bounded_life::Simulation::new(&config),
            Err(bounded_life::Error::OutOfBounds { x: 50, y: 50, .. })
        ));

        let config = args(&["-w", "30", "-h", "20", "-p", "glider@1,1"])
            .simulation_config()
            .unwrap();
        assert!(bounded_life::Simulation::new(&config).is_ok());
    }

    #[test]
    fn unknown_flag_fails() {
        assert!(matches!(Args::new(&["--bogus"]), Err(OptionsError::Parse(_))));
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }
}
