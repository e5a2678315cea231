use serde::Deserialize;

/// Flight tuning shared by every drone's simulation step.
///
/// Keep this separate from runtime/server configuration (ports, paths, tick timers).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightParameters {
    /// Speed ceiling applied after acceleration, in degrees per tick.
    pub max_speed: f64,

    /// Acceleration added per tick, in degrees per tick.
    pub acceleration: f64,

    /// Fraction of the previous velocity kept each tick (0..=1).
    pub inertia: f64,

    /// Half-width of the per-axis environmental noise (wind and friends).
    pub random_factor: f64,

    /// Constant bias added to both axes every tick.
    pub drift_factor: f64,

    /// Chance per tick of a sharp course change (0..=1), before per-drone scaling.
    pub turn_probability: f64,
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            max_speed: 0.001,
            acceleration: 0.0002,
            inertia: 0.85,
            random_factor: 0.0001,
            drift_factor: 0.00005,
            turn_probability: 0.15,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InvalidFlightParameters {
    NotFinite(&'static str),
    Negative(&'static str),
    OutOfUnitRange(&'static str),
}

impl FlightParameters {
    pub fn validate(&self) -> Result<(), InvalidFlightParameters> {
        let fields = [
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("inertia", self.inertia),
            ("random_factor", self.random_factor),
            ("drift_factor", self.drift_factor),
            ("turn_probability", self.turn_probability),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(InvalidFlightParameters::NotFinite(name));
            }
            if value < 0.0 {
                return Err(InvalidFlightParameters::Negative(name));
            }
        }
        if self.inertia > 1.0 {
            return Err(InvalidFlightParameters::OutOfUnitRange("inertia"));
        }
        if self.turn_probability > 1.0 {
            return Err(InvalidFlightParameters::OutOfUnitRange("turn_probability"));
        }

        Ok(())
    }
}
