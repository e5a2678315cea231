use async_trait::async_trait;

use crate::domain::entities::{DroneId, Position};
use crate::domain::errors::StoreError;

// Port for the last-known-position record of each drone.
#[async_trait]
pub trait PositionStore: Send + Sync {
    async fn get(&self, drone: DroneId) -> Result<Position, StoreError>;
    async fn set(&self, drone: DroneId, position: Position) -> Result<(), StoreError>;

    // Overwrite the record with the drone's home position.
    async fn reset(&self, drone: DroneId) -> Result<Position, StoreError> {
        let home = drone.home();
        self.set(drone, home).await?;
        Ok(home)
    }
}

// Port for uniform randomness in [0, 1).
pub trait RandomSource: Send {
    fn uniform(&mut self) -> f64;
}
