use anyhow::{Context as _, Result};
use mapbounds_entities::geo::GeoBounds;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "mapbounds.toml";

const ENV_NAME_BOUNDS: &str = "MAPBOUNDS_BOUNDS";

#[derive(Debug)]
pub struct Config {
    /// Used when no bounds are given on the command line.
    pub bounds: GeoBounds,
    pub output: Output,
}

#[derive(Debug)]
pub struct Output {
    pub pretty_json: bool,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let mut cfg = Self::try_load_from_file(file_path)?;
        cfg.apply_bounds_override(env::var(ENV_NAME_BOUNDS).ok())?;
        Ok(cfg)
    }

    fn try_load_from_file<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }

    fn apply_bounds_override(&mut self, value: Option<String>) -> Result<()> {
        if let Some(bounds) = value {
            log::info!("Using bounds from {ENV_NAME_BOUNDS}");
            self.bounds = bounds
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_BOUNDS} '{bounds}'"))?;
        }
        Ok(())
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { bounds, output } = from;
        let raw::Bounds {
            east,
            west,
            south,
            north,
        } = bounds.unwrap_or_default();
        let bounds = GeoBounds::try_new(east, west, south, north)
            .context("Invalid bounds configuration")?;
        let raw::Output { pretty_json } = output.unwrap_or_default();
        let output = Output {
            pretty_json: pretty_json.unwrap_or_default(),
        };
        Ok(Self { bounds, output })
    }
}
