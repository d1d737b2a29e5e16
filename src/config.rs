use std::env;
use std::str::FromStr;

use crate::entities::Coordinates;
use crate::error::{config_error, Error};
use crate::external::{console::ListFormat, MapOptions, PanOptions};

pub const DEFAULT_ZOOM: u8 = 15;
pub const DEFAULT_TILE_URL: &str =
    "https://tiles.stadiamaps.com/tiles/alidade_smooth/{z}/{x}/{y}{r}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; Stadia Maps, &copy; OpenMapTiles &copy; OpenStreetMap contributors";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub map: MapOptions,
    pub pan: PanOptions,
    pub start_position: Option<Coordinates>,
    pub list_format: ListFormat,
    pub seed_sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapOptions {
                zoom: DEFAULT_ZOOM,
                tile_url: DEFAULT_TILE_URL.into(),
                attribution: DEFAULT_ATTRIBUTION.into(),
            },
            pan: PanOptions {
                zoom: DEFAULT_ZOOM,
                animate: true,
                duration_secs: 1.0,
            },
            start_position: None,
            list_format: ListFormat::Text,
            seed_sample: false,
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(zoom) = parse::<u8, _>(&lookup, "MAP_ZOOM")? {
            config.map.zoom = zoom;
            config.pan.zoom = zoom;
        }
        if let Some(url) = lookup("MAP_TILE_URL") {
            config.map.tile_url = url;
        }
        if let Some(attribution) = lookup("MAP_ATTRIBUTION") {
            config.map.attribution = attribution;
        }
        if let Some(animate) = parse::<bool, _>(&lookup, "PAN_ANIMATE")? {
            config.pan.animate = animate;
        }
        if let Some(duration) = parse::<f64, _>(&lookup, "PAN_DURATION_SECS")? {
            if !duration.is_finite() || duration < 0.0 {
                return Err(config_error("PAN_DURATION_SECS"));
            }
            config.pan.duration_secs = duration;
        }
        config.start_position = parse::<Coordinates, _>(&lookup, "START_POSITION")?;
        if let Some(format) = parse::<ListFormat, _>(&lookup, "LIST_FORMAT")? {
            config.list_format = format;
        }
        if let Some(seed) = parse::<bool, _>(&lookup, "SEED_SAMPLE")? {
            config.seed_sample = seed;
        }

        Ok(config)
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| config_error(key)),
        None => Ok(None),
    }
}

#[test]
fn defaults_when_unset() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.map.zoom, 15);
    assert!(config.start_position.is_none());
}

#[test]
fn reads_overrides() {
    use std::collections::HashMap;

    let vars: HashMap<&str, &str> = HashMap::from([
        ("MAP_ZOOM", "12"),
        ("PAN_ANIMATE", "false"),
        ("PAN_DURATION_SECS", "0.5"),
        ("START_POSITION", "3.1321683,101.6710431"),
        ("LIST_FORMAT", "json"),
        ("SEED_SAMPLE", "true"),
    ]);
    let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

    assert_eq!(config.map.zoom, 12);
    assert_eq!(config.pan.zoom, 12);
    assert!(!config.pan.animate);
    assert_eq!(config.pan.duration_secs, 0.5);
    assert_eq!(
        config.start_position,
        Some(Coordinates::new(3.1321683, 101.6710431))
    );
    assert_eq!(config.list_format, ListFormat::Json);
    assert!(config.seed_sample);
}

#[test]
fn rejects_unparsable_values() {
    use crate::error::CONFIG_ERROR;

    let err = Config::from_lookup(|key| (key == "MAP_ZOOM").then(|| "far".to_string())).unwrap_err();
    assert_eq!(err.code, CONFIG_ERROR);

    let err = Config::from_lookup(|key| (key == "PAN_DURATION_SECS").then(|| "-1".to_string()))
        .unwrap_err();
    assert_eq!(err.code, CONFIG_ERROR);
}
