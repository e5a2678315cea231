use std::{env, net::IpAddr, path::PathBuf, time::Duration};

use crate::domain::tuning::FlightParameters;

// Runtime/server settings (flight tuning lives in the domain).

pub fn http_port() -> u16 {
    env::var("TRACKER_PORT")
        .or_else(|_| env::var("PORT"))
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000)
}

pub fn http_host() -> IpAddr {
    env::var("TRACKER_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn data_dir() -> PathBuf {
    env::var("TRACKER_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

pub fn static_dir() -> PathBuf {
    env::var("TRACKER_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))
}

// Interval for server-driven ticks; unset or 0 leaves ticking to clients.
pub fn auto_tick_interval() -> Option<Duration> {
    env::var("TRACKER_AUTO_TICK_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
}

pub fn flight_parameters() -> std::io::Result<FlightParameters> {
    match env::var("TRACKER_FLIGHT_CONFIG") {
        Ok(path) => load_flight_parameters(&path),
        Err(_) => Ok(FlightParameters::default()),
    }
}

pub fn load_flight_parameters(path: &str) -> std::io::Result<FlightParameters> {
    let text = std::fs::read_to_string(path)?;
    parse_flight_parameters(&text)
}

pub fn parse_flight_parameters(text: &str) -> std::io::Result<FlightParameters> {
    let params: FlightParameters = toml::from_str(text)
        .map_err(|e| std::io::Error::other(format!("invalid flight config: {e}")))?;
    params
        .validate()
        .map_err(|e| std::io::Error::other(format!("invalid flight config: {e:?}")))?;
    Ok(params)
}

/// Everything the server needs to start, resolved up front.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub flight: FlightParameters,
    pub auto_tick: Option<Duration>,
}

impl TrackerConfig {
    pub fn from_env() -> std::io::Result<Self> {
        Ok(Self {
            data_dir: data_dir(),
            static_dir: static_dir(),
            flight: flight_parameters()?,
            auto_tick: auto_tick_interval(),
        })
    }
}
