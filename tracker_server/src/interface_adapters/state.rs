use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::RandomSource;
use crate::domain::tuning::FlightParameters;
use crate::frameworks::file_store::JsonFileStore;
use crate::use_cases::flight_deck::{FlightDeck, SharedFlightDeck};

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonFileStore,
    // Velocities and randomness, locked for the length of each tick.
    pub deck: SharedFlightDeck,
    pub flight: FlightParameters,
}

impl AppState {
    pub fn new(store: JsonFileStore, flight: FlightParameters) -> Self {
        Self::with_random(store, flight, Box::new(StdRandom::from_os_rng()))
    }

    pub fn with_random(
        store: JsonFileStore,
        flight: FlightParameters,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            store,
            deck: FlightDeck::shared(rng),
            flight,
        }
    }
}

// `rand` adapter for the simulator's random source.
pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self) -> f64 {
        // Standard f64 sampling is uniform over [0, 1).
        self.0.random::<f64>()
    }
}
