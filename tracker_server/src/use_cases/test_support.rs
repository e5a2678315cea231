use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{DroneId, Position};
use crate::domain::errors::StoreError;
use crate::domain::ports::{PositionStore, RandomSource};

pub(crate) type PositionTable = Arc<Mutex<HashMap<DroneId, Position>>>;

// Random source that always returns the same draw.
pub(crate) struct FixedRandom(pub(crate) f64);

impl RandomSource for FixedRandom {
    fn uniform(&mut self) -> f64 {
        self.0
    }
}

// Random source that replays a scripted sequence, wrapping around at the end.
pub(crate) struct SequenceRandom {
    draws: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub(crate) fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "sequence needs at least one draw");
        Self { draws, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn uniform(&mut self) -> f64 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    positions: PositionTable,
    // Every successful set(), in call order.
    writes: Arc<Mutex<Vec<(DroneId, Position)>>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            positions: Arc::new(Mutex::new(HashMap::new())),
            writes: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    // Store pre-seeded with every drone's home position.
    pub(crate) fn seeded() -> Self {
        let store = Self::new();
        for drone in DroneId::ALL {
            store.insert_test_position(drone, drone.home());
        }
        store
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_position(&self, drone: DroneId, position: Position) {
        let mut guard = self.positions.lock().expect("positions mutex poisoned");
        guard.insert(drone, position);
    }

    pub(crate) fn get_test_position(&self, drone: DroneId) -> Option<Position> {
        let guard = self.positions.lock().expect("positions mutex poisoned");
        guard.get(&drone).copied()
    }

    pub(crate) fn writes(&self) -> Vec<(DroneId, Position)> {
        self.writes.lock().expect("writes mutex poisoned").clone()
    }
}

#[async_trait]
impl PositionStore for RecordingStore {
    async fn get(&self, drone: DroneId) -> Result<Position, StoreError> {
        if self.failures.get {
            return Err(StoreError::Failure("get failed".to_string()));
        }

        let guard = self.positions.lock().expect("positions mutex poisoned");
        guard.get(&drone).copied().ok_or(StoreError::NotFound)
    }

    async fn set(&self, drone: DroneId, position: Position) -> Result<(), StoreError> {
        if self.failures.set {
            return Err(StoreError::Failure("set failed".to_string()));
        }

        self.positions
            .lock()
            .expect("positions mutex poisoned")
            .insert(drone, position);
        self.writes
            .lock()
            .expect("writes mutex poisoned")
            .push((drone, position));
        Ok(())
    }
}
