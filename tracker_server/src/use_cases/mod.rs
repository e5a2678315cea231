// Use cases layer: application workflows for the drone tracker.

pub mod flight_deck;
pub mod positions;
pub mod reset;
pub mod simulate;

#[cfg(test)]
pub(crate) mod test_support;

pub use flight_deck::{FlightDeck, SharedFlightDeck, VelocityTable};
pub use positions::{GetPositionUseCase, UpdatePositionUseCase};
pub use reset::ResetDronesUseCase;
pub use simulate::{DroneTick, SimulateMovementUseCase};
