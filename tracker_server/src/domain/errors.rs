// Domain-level errors for tracking workflows.
#[derive(Debug, PartialEq)]
pub enum TrackerError {
    // No position has ever been stored for the drone.
    PositionNotFound,
    // The position store failed to read or write.
    StorageFailure,
    // A velocity or position component was NaN or infinite.
    NonFiniteInput,
}

// Port-level failures reported by position store adapters.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NotFound,
    Failure(String),
}

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => TrackerError::PositionNotFound,
            StoreError::Failure(_) => TrackerError::StorageFailure,
        }
    }
}
