use std::env;
use std::net::SocketAddr;

use crate::{
    entities::Coordinates,
    error::{config_error, Error},
};

#[derive(Clone, Debug, PartialEq)]
pub enum GeolocationSource {
    Ip,
    Fixed(Coordinates),
    Unsupported,
}

#[derive(Clone, Debug)]
pub struct MapSettings {
    pub default_center: Coordinates,
    pub default_zoom: u8,
    pub located_zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub user_agent: String,
    pub nominatim_api_base: String,
    pub nominatim_limit: Option<u32>,
    pub osrm_api_base: String,
    pub osrm_profile: String,
    pub ipapi_base: String,
    pub geolocation: GeolocationSource,
    pub high_accuracy: bool,
    pub map: MapSettings,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up
    /// a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let addr = parse("WAYFINDER_ADDR", &get("WAYFINDER_ADDR", "127.0.0.1:3000"))?;

        let nominatim_limit = match lookup("NOMINATIM_LIMIT") {
            Some(limit) => Some(parse("NOMINATIM_LIMIT", &limit)?),
            None => None,
        };

        let geolocation = match get("GEOLOCATION", "ip").as_str() {
            "ip" => GeolocationSource::Ip,
            "none" => GeolocationSource::Unsupported,
            "fixed" => {
                let position =
                    lookup("GEOLOCATION_FIXED").ok_or_else(|| config_error("GEOLOCATION_FIXED"))?;
                GeolocationSource::Fixed(parse("GEOLOCATION_FIXED", &position)?)
            }
            _ => return Err(config_error("GEOLOCATION")),
        };

        let map = MapSettings {
            default_center: parse(
                "MAP_DEFAULT_CENTER",
                &get("MAP_DEFAULT_CENTER", "14.617776,121.102570"),
            )?,
            default_zoom: parse("MAP_DEFAULT_ZOOM", &get("MAP_DEFAULT_ZOOM", "13"))?,
            located_zoom: parse("MAP_LOCATED_ZOOM", &get("MAP_LOCATED_ZOOM", "14"))?,
            tile_url: get(
                "MAP_TILE_URL",
                "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            ),
            tile_attribution: get("MAP_TILE_ATTRIBUTION", "&copy; OpenStreetMap contributors"),
        };

        Ok(Config {
            addr,
            user_agent: get(
                "HTTP_USER_AGENT",
                concat!("wayfinder/", env!("CARGO_PKG_VERSION")),
            ),
            nominatim_api_base: get("NOMINATIM_API_BASE", "https://nominatim.openstreetmap.org"),
            nominatim_limit,
            osrm_api_base: get("OSRM_API_BASE", "https://router.project-osrm.org"),
            osrm_profile: get("OSRM_PROFILE", "driving"),
            ipapi_base: get("IPAPI_BASE", "https://ipapi.co"),
            geolocation,
            high_accuracy: parse(
                "GEOLOCATION_HIGH_ACCURACY",
                &get("GEOLOCATION_HIGH_ACCURACY", "false"),
            )?,
            map,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value.trim().parse().map_err(|_| config_error(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_test() {
        let config = config(&[]).unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.geolocation, GeolocationSource::Ip);
        assert_eq!(config.osrm_profile, "driving");
        assert_eq!(config.nominatim_limit, None);
        assert_eq!(config.map.default_zoom, 13);
        assert_eq!(config.map.located_zoom, 14);
        assert_eq!(
            config.map.default_center,
            Coordinates::new(14.617776, 121.10257)
        );
        assert!(!config.high_accuracy);
    }

    #[test]
    fn fixed_geolocation_test() {
        let fixed = config(&[("GEOLOCATION", "fixed"), ("GEOLOCATION_FIXED", "1.5,2.5")]).unwrap();
        assert_eq!(
            fixed.geolocation,
            GeolocationSource::Fixed(Coordinates::new(1.5, 2.5))
        );

        let err = config(&[("GEOLOCATION", "fixed")]).unwrap_err();
        assert_eq!(err, config_error("GEOLOCATION_FIXED"));
    }

    #[test]
    fn malformed_values_test() {
        assert!(config(&[("GEOLOCATION", "gps")]).is_err());
        assert!(config(&[("MAP_DEFAULT_ZOOM", "very")]).is_err());
        assert!(config(&[("WAYFINDER_ADDR", "localhost")]).is_err());
        assert!(config(&[("NOMINATIM_LIMIT", "-1")]).is_err());
    }
}
