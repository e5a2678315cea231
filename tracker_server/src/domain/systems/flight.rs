use crate::domain::entities::{Position, VelocityVector};
use crate::domain::errors::TrackerError;
use crate::domain::ports::RandomSource;
use crate::domain::tuning::FlightParameters;

/// Computes the velocity for the next tick from the previous one.
///
/// Order matters: inertia, then either a random course change or continued
/// acceleration along the current heading, then the speed clamp, then wind
/// noise and drift. Noise and drift come after the clamp, so the returned
/// magnitude may end up slightly above `max_speed`.
///
/// Random draws happen in a fixed order (turn decision, lat, lng, lat noise,
/// lng noise), which keeps the step reproducible under a scripted source.
pub fn next_velocity(
    prev: VelocityVector,
    turn_probability: f64,
    params: &FlightParameters,
    rng: &mut dyn RandomSource,
) -> Result<VelocityVector, TrackerError> {
    if !prev.is_finite() || !turn_probability.is_finite() {
        return Err(TrackerError::NonFiniteInput);
    }

    let mut v = VelocityVector::new(prev.lat * params.inertia, prev.lng * params.inertia);

    if rng.uniform() < turn_probability {
        v.lat += symmetric(rng.uniform()) * params.acceleration;
        v.lng += symmetric(rng.uniform()) * params.acceleration;
    } else {
        v.lat += sign(v.lat) * params.acceleration * (0.5 + rng.uniform());
        v.lng += sign(v.lng) * params.acceleration * (0.5 + rng.uniform());
    }

    let mut v = clamp_speed(v, params.max_speed);

    v.lat += symmetric(rng.uniform()) * params.random_factor + params.drift_factor;
    v.lng += symmetric(rng.uniform()) * params.random_factor + params.drift_factor;

    if !v.is_finite() {
        return Err(TrackerError::NonFiniteInput);
    }
    Ok(v)
}

/// One full tick for a single drone: new velocity, then position += velocity.
pub fn step_drone(
    position: Position,
    prev: VelocityVector,
    turn_probability: f64,
    params: &FlightParameters,
    rng: &mut dyn RandomSource,
) -> Result<(Position, VelocityVector), TrackerError> {
    if !position.is_finite() {
        return Err(TrackerError::NonFiniteInput);
    }

    let velocity = next_velocity(prev, turn_probability, params, rng)?;
    let next = position.moved_by(velocity);
    if !next.is_finite() {
        return Err(TrackerError::NonFiniteInput);
    }

    Ok((next, velocity))
}

// Rescale proportionally so the magnitude is at most `max_speed`.
pub fn clamp_speed(v: VelocityVector, max_speed: f64) -> VelocityVector {
    let speed = v.magnitude();
    if speed > max_speed {
        VelocityVector::new(v.lat / speed * max_speed, v.lng / speed * max_speed)
    } else {
        v
    }
}

// Unlike f64::signum, zero (of either sign) maps to zero.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// Map [0, 1) onto [-1, 1).
fn symmetric(u: f64) -> f64 {
    u * 2.0 - 1.0
}
