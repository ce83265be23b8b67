use crate::MapBounds;
use mapbounds_entities::geo::{GeoBounds, JsonFormatter};

/// Formats bounds through their [`MapBounds`] representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonFormatter {
    pub pretty: bool,
}

impl SerdeJsonFormatter {
    pub const fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl JsonFormatter for SerdeJsonFormatter {
    fn to_json_string(&self, bounds: &GeoBounds) -> String {
        let bounds = MapBounds::from(*bounds);
        let json = if self.pretty {
            serde_json::to_string_pretty(&bounds)
        } else {
            serde_json::to_string(&bounds)
        };
        json.expect("MapBounds of plain numbers as JSON")
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn compact_json() {
        let bounds = GeoBounds::try_new(10.0, -10.0, -5.0, 5.5).unwrap();
        assert_eq!(
            r#"{"east":10.0,"west":-10.0,"south":-5.0,"north":5.5,"location":{"lng":-10.0,"lat":5.5}}"#,
            bounds.to_json_string(&SerdeJsonFormatter::default())
        );
    }

    #[test]
    fn pretty_json() {
        let json = GeoBounds::EMPTY.to_json_string(&SerdeJsonFormatter::new(true));
        assert!(json.starts_with("{\n  \"east\": 0.0,"));
        assert!(json.contains("\"location\": {\n    \"lng\": 0.0,"));
    }

    #[test]
    fn json_round_trip() {
        let bounds = GeoBounds::try_new(13.76, 13.09, 52.34, 52.68).unwrap();
        let json = bounds.to_json_string(&SerdeJsonFormatter::default());
        let parsed: MapBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(bounds, GeoBounds::try_from(parsed).unwrap());
    }

    #[test]
    fn read_without_location() {
        let parsed: MapBounds =
            serde_json::from_str(r#"{"east":1.0,"west":-1.0,"south":-2.0,"north":2.0}"#).unwrap();
        assert_eq!(None, parsed.location);
        let bounds = GeoBounds::try_from(parsed).unwrap();
        assert_eq!(-1.0, bounds.location().lng());
        assert_eq!(2.0, bounds.location().lat());
    }
}
