use tracing::{debug, warn};

use crate::domain::entities::{DroneId, Position, VelocityVector};
use crate::domain::errors::{StoreError, TrackerError};
use crate::domain::ports::PositionStore;
use crate::domain::systems::flight;
use crate::domain::tuning::FlightParameters;
use crate::use_cases::flight_deck::SharedFlightDeck;

// Outcome of one tick for one drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneTick {
    pub drone: DroneId,
    pub position: Position,
    pub vector: VelocityVector,
}

// Tick driver: advances every drone by one simulation step.
pub struct SimulateMovementUseCase<S> {
    pub store: S,
    pub deck: SharedFlightDeck,
    pub params: FlightParameters,
}

impl<S> SimulateMovementUseCase<S>
where
    S: PositionStore,
{
    pub async fn execute(&self) -> Result<Vec<DroneTick>, TrackerError> {
        let mut guard = self.deck.lock().await;
        let deck = &mut *guard;

        // Read and simulate every drone before writing any of them.
        let mut ticks = Vec::with_capacity(DroneId::ALL.len());
        for drone in DroneId::ALL {
            let position = match self.store.get(drone).await {
                Ok(position) => position,
                Err(StoreError::NotFound) => {
                    warn!(%drone, "no stored position, starting from home");
                    drone.home()
                }
                Err(err) => {
                    warn!(%drone, error = ?err, "failed to read drone position");
                    return Err(err.into());
                }
            };

            let turn_probability = self.params.turn_probability * drone.turn_scale();
            let (position, vector) = flight::step_drone(
                position,
                deck.velocity(drone),
                turn_probability,
                &self.params,
                deck.rng.as_mut(),
            )
            .inspect_err(|_| warn!(%drone, "refusing to simulate non-finite state"))?;

            ticks.push(DroneTick {
                drone,
                position,
                vector,
            });
        }

        for tick in &ticks {
            self.store
                .set(tick.drone, tick.position)
                .await
                .inspect_err(|err| warn!(drone = %tick.drone, error = ?err, "failed to write drone position"))?;
            // Only keep momentum for positions that actually landed.
            deck.velocities.insert(tick.drone, tick.vector);
            debug!(
                drone = %tick.drone,
                lat = tick.position.lat,
                lng = tick.position.lng,
                v_lat = tick.vector.lat,
                v_lng = tick.vector.lng,
                "drone moved"
            );
        }

        Ok(ticks)
    }
}
