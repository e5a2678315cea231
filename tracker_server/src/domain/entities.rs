use serde::{Deserialize, Serialize};
use std::fmt;

// Last known location of a drone. Planar x/y that happens to be named lat/lng.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    // Advance by one tick of the given velocity, per axis.
    pub fn moved_by(self, velocity: VelocityVector) -> Self {
        Self {
            lat: self.lat + velocity.lat,
            lng: self.lng + velocity.lng,
        }
    }
}

// Per-tick rate of change of a drone's position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VelocityVector {
    pub lat: f64,
    pub lng: f64,
}

impl VelocityVector {
    pub const ZERO: Self = Self { lat: 0.0, lng: 0.0 };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn magnitude(&self) -> f64 {
        (self.lat * self.lat + self.lng * self.lng).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// The two tracked drones.
///
/// Each drone owns a slug used in routes and storage file names, a home
/// position restored on reset, and a multiplier applied to the global turn
/// probability (drone 2 turns more often).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DroneId {
    Drone1,
    Drone2,
}

impl DroneId {
    pub const ALL: [DroneId; 2] = [DroneId::Drone1, DroneId::Drone2];

    pub const fn slug(self) -> &'static str {
        match self {
            DroneId::Drone1 => "drone1",
            DroneId::Drone2 => "drone2",
        }
    }

    pub const fn home(self) -> Position {
        match self {
            DroneId::Drone1 => Position::new(37.7749, -122.4194),
            DroneId::Drone2 => Position::new(37.7749, -122.4294),
        }
    }

    pub const fn turn_scale(self) -> f64 {
        match self {
            DroneId::Drone1 => 1.0,
            DroneId::Drone2 => 1.2,
        }
    }
}

impl fmt::Display for DroneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
