use tracing::{info, warn};

use crate::domain::entities::{DroneId, Position, VelocityVector};
use crate::domain::errors::TrackerError;
use crate::domain::ports::PositionStore;
use crate::use_cases::flight_deck::SharedFlightDeck;

// Sends every drone home and brings it to rest.
pub struct ResetDronesUseCase<S> {
    pub store: S,
    pub deck: SharedFlightDeck,
}

impl<S> ResetDronesUseCase<S>
where
    S: PositionStore,
{
    pub async fn execute(&self) -> Result<Vec<(DroneId, Position)>, TrackerError> {
        let mut deck = self.deck.lock().await;

        let mut homes = Vec::with_capacity(DroneId::ALL.len());
        for drone in DroneId::ALL {
            let home = self
                .store
                .reset(drone)
                .await
                .inspect_err(|err| warn!(%drone, error = ?err, "failed to reset drone position"))?;
            deck.velocities.insert(drone, VelocityVector::ZERO);
            homes.push((drone, home));
        }

        info!("drones reset to initial positions");
        Ok(homes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::FlightParameters;
    use crate::use_cases::flight_deck::FlightDeck;
    use crate::use_cases::positions::GetPositionUseCase;
    use crate::use_cases::simulate::SimulateMovementUseCase;
    use crate::use_cases::test_support::{FailureFlags, FixedRandom, RecordingStore};

    #[tokio::test]
    async fn when_reset_runs_then_get_returns_home_and_velocity_is_zero() {
        let store = RecordingStore::new();
        store.insert_test_position(DroneId::Drone1, Position::new(50.0, 60.0));
        let deck = FlightDeck::shared(Box::new(FixedRandom(0.5)));
        deck.lock()
            .await
            .velocities
            .insert(DroneId::Drone1, VelocityVector::new(0.0009, -0.0009));
        let use_case = ResetDronesUseCase {
            store: store.clone(),
            deck: deck.clone(),
        };

        let homes = use_case.execute().await.expect("expected reset to succeed");

        assert_eq!(
            homes,
            vec![
                (DroneId::Drone1, Position::new(37.7749, -122.4194)),
                (DroneId::Drone2, Position::new(37.7749, -122.4294)),
            ]
        );
        let position = GetPositionUseCase { store }
            .execute(DroneId::Drone1)
            .await
            .expect("expected position after reset");
        assert_eq!(position, DroneId::Drone1.home());
        assert_eq!(deck.lock().await.velocity(DroneId::Drone1), VelocityVector::ZERO);
    }

    #[tokio::test]
    async fn when_tick_follows_reset_then_it_starts_from_rest() {
        let store = RecordingStore::seeded();
        let deck = FlightDeck::shared(Box::new(FixedRandom(0.5)));
        let params = FlightParameters {
            turn_probability: 1.0,
            ..Default::default()
        };
        let simulate = SimulateMovementUseCase {
            store: store.clone(),
            deck: deck.clone(),
            params,
        };
        let reset = ResetDronesUseCase {
            store: store.clone(),
            deck,
        };

        simulate.execute().await.expect("expected warm-up tick");
        simulate.execute().await.expect("expected warm-up tick");
        reset.execute().await.expect("expected reset to succeed");
        assert_eq!(store.get_test_position(DroneId::Drone1), Some(DroneId::Drone1.home()));

        let ticks = simulate.execute().await.expect("expected tick after reset");

        // From rest, a midpoint turn adds nothing and drift is the whole vector.
        let drift = params.drift_factor;
        assert_eq!(ticks[0].vector, VelocityVector::new(drift, drift));
        assert_eq!(ticks[0].position, DroneId::Drone1.home().moved_by(ticks[0].vector));
        assert!((ticks[0].vector.magnitude() - drift * 2f64.sqrt()).abs() < 1e-12);
    }

    #[tokio::test]
    async fn when_store_set_fails_then_reset_returns_storage_failure() {
        let use_case = ResetDronesUseCase {
            store: RecordingStore::seeded().with_failures(FailureFlags {
                set: true,
                ..Default::default()
            }),
            deck: FlightDeck::shared(Box::new(FixedRandom(0.5))),
        };

        let result = use_case.execute().await;

        assert_eq!(result, Err(TrackerError::StorageFailure));
    }
}
