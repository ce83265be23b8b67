use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("mapbounds.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bounds: Option<Bounds>,
    pub output: Option<Output>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bounds {
    pub east: f64,
    pub west: f64,
    pub south: f64,
    pub north: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Config::default().bounds.expect("Bounds configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub pretty_json: Option<bool>,
}

impl Default for Output {
    fn default() -> Self {
        Config::default().output.expect("Output configuration")
    }
}
