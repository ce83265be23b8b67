use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use mapbounds_boundary::SerdeJsonFormatter;
use mapbounds_entities::geo::{GeoBounds, GeoPoint};
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the bounds as JSON
    Show {
        /// Bounds as east,west,south,north in degrees
        #[arg(long, value_name = "E,W,S,N", allow_hyphen_values = true)]
        bounds: Option<GeoBounds>,
    },
    /// Test which points lie within the bounds
    Contains {
        /// Bounds as east,west,south,north in degrees
        #[arg(long, value_name = "E,W,S,N", allow_hyphen_values = true)]
        bounds: Option<GeoBounds>,

        /// Points as lng,lat in degrees
        #[arg(required = true, value_name = "LNG,LAT", allow_hyphen_values = true)]
        points: Vec<GeoPoint>,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let stdout = io::stdout();
    exec(&cfg, args.command, &mut stdout.lock())
}

fn exec<W: Write>(cfg: &Config, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Show { bounds } => {
            let bounds = select_bounds(cfg, bounds);
            let formatter = SerdeJsonFormatter::new(cfg.output.pretty_json);
            writeln!(out, "{}", bounds.to_json_string(&formatter))?;
        }
        Command::Contains { bounds, points } => {
            let bounds = select_bounds(cfg, bounds);
            let mut hits = 0;
            for pt in points {
                let contained = bounds.contains(pt);
                if contained {
                    hits += 1;
                }
                writeln!(out, "{pt}\t{contained}")?;
            }
            log::debug!("{hits} point(s) within {bounds:?}");
        }
    }
    Ok(())
}

fn select_bounds(cfg: &Config, bounds: Option<GeoBounds>) -> GeoBounds {
    let bounds = bounds.unwrap_or_else(|| {
        log::info!("No bounds specified, using configured bounds");
        cfg.bounds
    });
    if bounds.is_empty() {
        log::warn!("Bounds are empty");
    } else if bounds.is_inverted() {
        log::warn!("Bounds are inverted (east < west or north < south) and contain no points");
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Output;

    fn config() -> Config {
        Config {
            bounds: GeoBounds::try_new(10.0, -10.0, -5.0, 5.0).unwrap(),
            output: Output { pretty_json: false },
        }
    }

    fn exec_args(args: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(args)?;
        let mut out = Vec::new();
        exec(&config(), args.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn show_configured_bounds() {
        assert_eq!(
            "{\"east\":10.0,\"west\":-10.0,\"south\":-5.0,\"north\":5.0,\"location\":{\"lng\":-10.0,\"lat\":5.0}}\n",
            exec_args(&["mapbounds", "show"]).unwrap()
        );
    }

    #[test]
    fn show_bounds_from_args() {
        let out = exec_args(&["mapbounds", "show", "--bounds", "-170,170,-1,1"]).unwrap();
        assert!(out.starts_with("{\"east\":-170.0,\"west\":170.0,"));
    }

    #[test]
    fn reject_out_of_range_bounds() {
        assert!(exec_args(&["mapbounds", "show", "--bounds", "181,0,0,0"]).is_err());
        assert!(exec_args(&["mapbounds", "show", "--bounds", "1,0,0"]).is_err());
    }

    #[test]
    fn contains_points() {
        let out = exec_args(&["mapbounds", "contains", "0,0", "15,0", "10,5", "-10.5,0"]).unwrap();
        assert_eq!("0,0\ttrue\n15,0\tfalse\n10,5\ttrue\n-10.5,0\tfalse\n", out);
    }

    #[test]
    fn contains_with_inverted_bounds() {
        let out = exec_args(&[
            "mapbounds",
            "contains",
            "--bounds",
            "-170,170,-10,10",
            "175,0",
        ])
        .unwrap();
        assert_eq!("175,0\tfalse\n", out);
    }

    #[test]
    fn contains_requires_valid_points() {
        assert!(exec_args(&["mapbounds", "contains"]).is_err());
        assert!(exec_args(&["mapbounds", "contains", "0,91"]).is_err());
        assert!(exec_args(&["mapbounds", "contains", "zero,0"]).is_err());
    }
}
