use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ufo_radar", version, about = "UFO sightings radar sweep")]
pub struct CliArgs {
    /// Run the simulation without a UI, print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of ticks to simulate in headless mode (default: one rotation)
    #[arg(long, value_name = "N")]
    pub ticks: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override the sightings CSV path
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Maximum sightings revealed per sweep rotation
    #[arg(long, value_name = "N")]
    pub budget: Option<String>,

    /// Sweep advance per tick, in radians
    #[arg(long = "sweep-speed", value_name = "RAD")]
    pub sweep_speed: Option<String>,

    /// Half-width of the sweep beam, in radians
    #[arg(long = "sweep-width", value_name = "RAD")]
    pub sweep_width: Option<String>,

    /// Simulation ticks per second
    #[arg(long = "tick-rate", value_name = "HZ")]
    pub tick_rate: Option<String>,

    /// Angular distance metric: linear or wrapped
    #[arg(long = "angular-distance", value_name = "METRIC")]
    pub angular_distance: Option<String>,
}

impl CliArgs {
    /// Pushes CLI overrides into the environment so config loading sees a
    /// single source.
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.dataset {
            std::env::set_var("RADAR_DATASET", path);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("RADAR_LOG_FILE", path);
        }

        let values = [
            ("RADAR_REVEAL_BUDGET", &self.budget),
            ("RADAR_SWEEP_SPEED", &self.sweep_speed),
            ("RADAR_SWEEP_WIDTH", &self.sweep_width),
            ("RADAR_TICK_RATE", &self.tick_rate),
            ("RADAR_ANGULAR_DISTANCE", &self.angular_distance),
        ];
        for (key, value) in values {
            if let Some(value) = value {
                std::env::set_var(key, value);
            }
        }

        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn parses_headless_flags() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "ufo_radar",
            "--headless",
            "--json",
            "--ticks",
            "500",
            "--budget",
            "3",
            "--angular-distance",
            "wrapped",
        ])?;

        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.ticks, Some(500));
        assert_eq!(args.budget.as_deref(), Some("3"));
        assert_eq!(args.angular_distance.as_deref(), Some("wrapped"));
        assert!(args.dataset.is_none());
        Ok(())
    }
}
