use crate::domain::entities::{DroneId, Position};
use crate::domain::errors::TrackerError;
use crate::domain::ports::PositionStore;
use crate::use_cases::flight_deck::SharedFlightDeck;

// Reads the last persisted position of a drone.
pub struct GetPositionUseCase<S> {
    pub store: S,
}

impl<S> GetPositionUseCase<S>
where
    S: PositionStore,
{
    pub async fn execute(&self, drone: DroneId) -> Result<Position, TrackerError> {
        self.store.get(drone).await.map_err(TrackerError::from)
    }
}

// Overwrites a drone's position from an external report.
pub struct UpdatePositionUseCase<S> {
    pub store: S,
    pub deck: SharedFlightDeck,
}

impl<S> UpdatePositionUseCase<S>
where
    S: PositionStore,
{
    pub async fn execute(&self, drone: DroneId, position: Position) -> Result<(), TrackerError> {
        if !position.is_finite() {
            return Err(TrackerError::NonFiniteInput);
        }

        // Serialize with ticks so a tick cannot overwrite this update with stale data.
        let _deck = self.deck.lock().await;
        self.store
            .set(drone, position)
            .await
            .map_err(TrackerError::from)
    }
}
