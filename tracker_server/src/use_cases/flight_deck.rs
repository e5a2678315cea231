use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{DroneId, VelocityVector};
use crate::domain::ports::RandomSource;

// In-memory velocity per drone. Not persisted; a restart starts from rest.
pub type VelocityTable = HashMap<DroneId, VelocityVector>;

/// Process-local simulation state owned by the tick driver.
///
/// The mutex around it is also the per-drone write lock: ticks, resets and
/// manual position updates hold it for their whole read-modify-write, so
/// concurrent requests are applied one after another.
pub struct FlightDeck {
    pub velocities: VelocityTable,
    pub rng: Box<dyn RandomSource>,
}

pub type SharedFlightDeck = Arc<Mutex<FlightDeck>>;

impl FlightDeck {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            velocities: VelocityTable::new(),
            rng,
        }
    }

    pub fn shared(rng: Box<dyn RandomSource>) -> SharedFlightDeck {
        Arc::new(Mutex::new(Self::new(rng)))
    }

    // Missing entries read as zero velocity.
    pub fn velocity(&self, drone: DroneId) -> VelocityVector {
        self.velocities.get(&drone).copied().unwrap_or_default()
    }
}
