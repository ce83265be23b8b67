use itertools::Itertools;
use std::{
    fmt,
    hash::{Hash, Hasher},
    num::ParseFloatError,
    str::FromStr,
};
use thiserror::Error;

const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;
const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;

/// Names a single coordinate parameter for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordParam {
    East,
    West,
    South,
    North,
    Lng,
    Lat,
}

impl CoordParam {
    pub const fn is_longitude(self) -> bool {
        matches!(self, Self::East | Self::West | Self::Lng)
    }

    pub const fn min_deg(self) -> f64 {
        if self.is_longitude() {
            LNG_DEG_MIN
        } else {
            LAT_DEG_MIN
        }
    }

    pub const fn max_deg(self) -> f64 {
        if self.is_longitude() {
            LNG_DEG_MAX
        } else {
            LAT_DEG_MAX
        }
    }

    /// Returns `deg` unchanged if it lies within the inclusive range.
    ///
    /// NaN never lies within any range.
    pub fn check(self, deg: f64) -> Result<f64, CoordRangeError> {
        if (self.min_deg()..=self.max_deg()).contains(&deg) {
            Ok(deg)
        } else {
            Err(CoordRangeError {
                param: self,
                value: deg,
                min: self.min_deg(),
                max: self.max_deg(),
            })
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::West => "west",
            Self::South => "south",
            Self::North => "north",
            Self::Lng => "lng",
            Self::Lat => "lat",
        }
    }
}

impl fmt::Display for CoordParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{param} must be a number between {min} and {max} degrees, got {value}")]
pub struct CoordRangeError {
    pub param: CoordParam,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseCoordsError {
    #[error("expected {expected} comma-separated numbers")]
    Arity { expected: usize },
    #[error("invalid {param} '{input}': {source}")]
    Number {
        param: CoordParam,
        input: String,
        source: ParseFloatError,
    },
    #[error(transparent)]
    Range(#[from] CoordRangeError),
}

fn parse_deg(param: CoordParam, input: &str) -> Result<f64, ParseCoordsError> {
    let input = input.trim();
    input
        .parse::<f64>()
        .map_err(|source| ParseCoordsError::Number {
            param,
            input: input.to_owned(),
            source,
        })
}

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    lng: f64,
    lat: f64,
}

impl GeoPoint {
    /// Creates a point without validating its coordinates.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn try_from_lng_lat_deg(lng: f64, lat: f64) -> Result<Self, CoordRangeError> {
        let lng = CoordParam::Lng.check(lng)?;
        let lat = CoordParam::Lat.check(lat)?;
        Ok(Self::new(lng, lat))
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

impl FromStr for GeoPoint {
    type Err = ParseCoordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng, lat) = s
            .split(',')
            .collect_tuple()
            .ok_or(ParseCoordsError::Arity { expected: 2 })?;
        let lng = parse_deg(CoordParam::Lng, lng)?;
        let lat = parse_deg(CoordParam::Lat, lat)?;
        Ok(Self::try_from_lng_lat_deg(lng, lat)?)
    }
}

/// Renders bounds as a JSON document.
///
/// Implementations live outside of this crate so that the entities
/// stay independent of any serialization library.
pub trait JsonFormatter {
    fn to_json_string(&self, bounds: &GeoBounds) -> String;
}

/// A rectangular region on a longitude/latitude map.
///
/// All four limits are validated on construction and never change
/// afterwards. Inverted regions (`east < west` or `north < south`)
/// are accepted as-is and not normalized.
#[derive(Debug, Clone, Copy)]
pub struct GeoBounds {
    east: f64,
    west: f64,
    south: f64,
    north: f64,
}

impl GeoBounds {
    /// The all-zero bounds.
    pub const EMPTY: Self = Self {
        east: 0.0,
        west: 0.0,
        south: 0.0,
        north: 0.0,
    };

    /// Validates the limits in the order east, west, south, north and
    /// reports only the first one that is out of range.
    pub fn try_new(east: f64, west: f64, south: f64, north: f64) -> Result<Self, CoordRangeError> {
        let east = CoordParam::East.check(east)?;
        let west = CoordParam::West.check(west)?;
        let south = CoordParam::South.check(south)?;
        let north = CoordParam::North.check(north)?;
        Ok(Self {
            east,
            west,
            south,
            north,
        })
    }

    pub const fn east(&self) -> f64 {
        self.east
    }

    pub const fn west(&self) -> f64 {
        self.west
    }

    pub const fn south(&self) -> f64 {
        self.south
    }

    pub const fn north(&self) -> f64 {
        self.north
    }

    /// The north-west corner.
    pub const fn location(&self) -> GeoPoint {
        GeoPoint::new(self.west, self.north)
    }

    pub fn is_empty(&self) -> bool {
        self.east == 0.0 && self.west == 0.0 && self.south == 0.0 && self.north == 0.0
    }

    pub fn is_inverted(&self) -> bool {
        self.east < self.west || self.north < self.south
    }

    /// Inclusive on all four edges.
    ///
    /// Plain numeric comparison: an inverted region such as one crossing
    /// the antimeridian contains no point at all.
    pub fn contains(&self, pt: GeoPoint) -> bool {
        pt.lng() >= self.west
            && pt.lng() <= self.east
            && pt.lat() >= self.south
            && pt.lat() <= self.north
    }

    pub fn with_east(&self, east: f64) -> Result<Self, CoordRangeError> {
        Self::try_new(east, self.west, self.south, self.north)
    }

    pub fn with_west(&self, west: f64) -> Result<Self, CoordRangeError> {
        Self::try_new(self.east, west, self.south, self.north)
    }

    pub fn with_south(&self, south: f64) -> Result<Self, CoordRangeError> {
        Self::try_new(self.east, self.west, south, self.north)
    }

    pub fn with_north(&self, north: f64) -> Result<Self, CoordRangeError> {
        Self::try_new(self.east, self.west, self.south, north)
    }

    pub fn to_json_string<F>(&self, formatter: &F) -> String
    where
        F: JsonFormatter + ?Sized,
    {
        formatter.to_json_string(self)
    }

    // Single source of truth for both equality and hashing.
    const fn limits(&self) -> [f64; 4] {
        [self.east, self.west, self.south, self.north]
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for GeoBounds {
    fn eq(&self, other: &Self) -> bool {
        self.limits() == other.limits()
    }
}

// NaN is rejected by `try_new`.
impl Eq for GeoBounds {}

impl Hash for GeoBounds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for deg in self.limits() {
            // -0.0 == 0.0
            let deg = if deg == 0.0 { 0.0 } else { deg };
            deg.to_bits().hash(state);
        }
    }
}

impl FromStr for GeoBounds {
    type Err = ParseCoordsError;

    /// Parses `east,west,south,north`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (east, west, south, north) = s
            .split(',')
            .collect_tuple()
            .ok_or(ParseCoordsError::Arity { expected: 4 })?;
        let east = parse_deg(CoordParam::East, east)?;
        let west = parse_deg(CoordParam::West, west)?;
        let south = parse_deg(CoordParam::South, south)?;
        let north = parse_deg(CoordParam::North, north)?;
        Ok(Self::try_new(east, west, south, north)?)
    }
}
