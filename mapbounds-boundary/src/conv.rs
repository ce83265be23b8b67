use super::*;
use mapbounds_entities as e;

impl From<e::geo::GeoPoint> for MapPoint {
    fn from(from: e::geo::GeoPoint) -> Self {
        Self {
            lng: from.lng(),
            lat: from.lat(),
        }
    }
}

impl From<MapPoint> for e::geo::GeoPoint {
    fn from(from: MapPoint) -> Self {
        let MapPoint { lng, lat } = from;
        Self::new(lng, lat)
    }
}

impl From<e::geo::GeoBounds> for MapBounds {
    fn from(from: e::geo::GeoBounds) -> Self {
        Self {
            east: from.east(),
            west: from.west(),
            south: from.south(),
            north: from.north(),
            location: Some(from.location().into()),
        }
    }
}

impl TryFrom<MapBounds> for e::geo::GeoBounds {
    type Error = e::geo::CoordRangeError;

    fn try_from(from: MapBounds) -> Result<Self, Self::Error> {
        let MapBounds {
            east,
            west,
            south,
            north,
            location: _,
        } = from;
        Self::try_new(east, west, south, north)
    }
}
