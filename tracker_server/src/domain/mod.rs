// Domain layer: drone flight model and storage ports.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod systems;
pub mod tuning;

pub use entities::{DroneId, Position, VelocityVector};
pub use errors::{StoreError, TrackerError};
pub use tuning::FlightParameters;
